//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::nav::site_nav;
use super::seo::{Seo, seo_head};
use crate::content::SiteMeta;
use crate::markdown::LinkResolver;
use crate::path::calculate_depth;

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, head metadata, site navigation and footer for every
/// page. Stylesheet names are resolved against the `assets/` directory
/// relative to the page's route.
///
/// # Arguments
///
/// * `site`: Site identity for the header and footer
/// * `seo`: Page level metadata for the document head
/// * `route`: Route of the page, used for relative links
/// * `stylesheets`: CSS file names inside `assets/`
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    site: &SiteMeta,
    seo: &Seo,
    route: &str,
    stylesheets: &[&str],
    body: Markup,
) -> Markup {
    let resolver = LinkResolver::with_depth(calculate_depth(route));
    let prefix = resolver.root_prefix();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (seo_head(seo))
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(format!("{}assets/{}", prefix, stylesheet));
                }
            }
            body {
                div class="container" {
                    (site_nav(&site.title, &site.nav, route, &resolver))
                    main class="content" {
                        (body)
                    }
                }
                (footer(&site.name))
            }
        }
    }
}

fn footer(name: &str) -> Markup {
    html! {
        footer class="site-footer" {
            span { "\u{00A9} " (name) }
        }
    }
}
