//! Page metadata for the document head

use maud::{Markup, html};

/// Page level metadata handed to the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seo {
    /// Full document title.
    pub title: String,
    /// Absolute canonical URL of the page.
    pub canonical: String,
    pub description: Option<String>,
    /// Absolute URL of the social preview image.
    pub image: String,
    /// Alt text for the preview image.
    pub image_alt: String,
    pub twitter: Option<String>,
}

/// Builds the social preview image URL for a title.
///
/// The title is percent encoded into the image path of the preview service.
///
/// # Arguments
///
/// * `base`: Preview image service base URL
/// * `title`: Text rendered onto the image
pub fn og_image_url(base: &str, title: &str) -> String {
    format!(
        "{}/{}.png",
        base.trim_end_matches('/'),
        urlencoding::encode(title)
    )
}

/// Renders title, canonical link, Open Graph and Twitter card tags.
pub fn seo_head(seo: &Seo) -> Markup {
    html! {
        title { (seo.title) }
        link rel="canonical" href=(seo.canonical);
        @if let Some(description) = &seo.description {
            meta name="description" content=(description);
            meta property="og:description" content=(description);
        }
        meta property="og:type" content="website";
        meta property="og:url" content=(seo.canonical);
        meta property="og:title" content=(seo.title);
        meta property="og:image" content=(seo.image);
        meta property="og:image:alt" content=(seo.image_alt);
        meta name="twitter:card" content="summary_large_image";
        @if let Some(handle) = &seo.twitter {
            meta name="twitter:site" content=(handle);
            meta name="twitter:creator" content=(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Seo {
        Seo {
            title: "Curriculum Vitae \u{2014} Ada Example".to_string(),
            canonical: "https://ada.example/cv/".to_string(),
            description: None,
            image: og_image_url("https://og.example", "Curriculum Vitae"),
            image_alt: "Curriculum Vitae \u{2014} Ada Example".to_string(),
            twitter: None,
        }
    }

    #[test]
    fn test_og_image_url_encodes_title() {
        assert_eq!(
            og_image_url("https://og.example/", "Curriculum Vitae"),
            "https://og.example/Curriculum%20Vitae.png"
        );
    }

    #[test]
    fn test_seo_head_tags() {
        // Act
        let html = seo_head(&sample()).into_string();

        // Assert
        assert!(html.contains("<title>Curriculum Vitae"), "{}", html);
        assert!(
            html.contains(r#"<link rel="canonical" href="https://ada.example/cv/">"#),
            "{}",
            html
        );
        assert!(
            html.contains(r#"property="og:image" content="https://og.example/Curriculum%20Vitae.png""#),
            "{}",
            html
        );
        assert!(!html.contains("og:description"), "{}", html);
        assert!(!html.contains("twitter:site"), "{}", html);
    }

    #[test]
    fn test_seo_head_optional_tags() {
        // Arrange
        let mut seo = sample();
        seo.description = Some("Work history".to_string());
        seo.twitter = Some("@ada".to_string());

        // Act
        let html = seo_head(&seo).into_string();

        // Assert
        assert!(html.contains(r#"content="Work history""#), "{}", html);
        assert!(html.contains(r#"content="@ada""#), "{}", html);
    }
}
