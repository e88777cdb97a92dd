//! Page generation modules for different view types
//!
//! Each page module turns static content into a complete document using
//! the shared components. Page routes are defined here so generators,
//! navigation and the sitemap agree on them.

pub mod cv;
pub mod index;
pub mod post;
pub mod writing;

use crate::components::seo::{Seo, og_image_url};
use crate::content::Site;

pub const HOME_ROUTE: &str = "/";
pub const CV_ROUTE: &str = "/cv/";
pub const WRITING_ROUTE: &str = "/writing/";

/// Builds head metadata for a page.
///
/// The document title is `"<title> — <owner>"` unless the title already is
/// the owner's name; the preview image is rendered from the short title.
pub(crate) fn page_seo(site: &Site, title: &str, route: &str, description: Option<&str>) -> Seo {
    let full_title = if title == site.site.name {
        title.to_string()
    } else {
        format!("{} \u{2014} {}", title, site.site.name)
    };

    Seo {
        canonical: site.page_url(route),
        description: description
            .or(site.site.description.as_deref())
            .map(str::to_string),
        image: og_image_url(site.og_image_base(), title),
        image_alt: full_title.clone(),
        title: full_title,
        twitter: site.site.twitter.clone(),
    }
}
