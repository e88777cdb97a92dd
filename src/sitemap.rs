//! XML sitemap generation.

use maud::html;
use tracing::debug;

/// Generates sitemap XML listing every page route under `base_url`.
///
/// # Arguments
///
/// * `base_url`: Canonical site URL without trailing slash
/// * `routes`: Page routes such as `/` or `/cv/`
pub fn generate_sitemap(base_url: &str, routes: &[String]) -> String {
    debug!(count = routes.len(), "generating sitemap");

    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for route in routes {
        let loc = format!("{}{}", base_url, route);
        xml.push_str("  <url><loc>");
        xml.push_str(&html! { (loc) }.into_string());
        xml.push_str("</loc></url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_lists_routes() {
        // Arrange
        let routes = vec!["/".to_string(), "/cv/".to_string()];

        // Act
        let xml = generate_sitemap("https://ada.example", &routes);

        // Assert
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://ada.example/</loc>"));
        assert!(xml.contains("<loc>https://ada.example/cv/</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_escapes_locations() {
        // Act
        let xml = generate_sitemap("https://ada.example", &["/a&b/".to_string()]);

        // Assert
        assert!(xml.contains("/a&amp;b/"), "{}", xml);
    }
}
