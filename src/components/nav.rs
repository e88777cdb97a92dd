//! Site navigation header

use maud::{Markup, html};

use crate::content::NavLink;
use crate::markdown::LinkResolver;

/// Renders the site header with navigation links
///
/// The link whose path matches the current route is marked active. Paths
/// are resolved relative to the current page so the output works when
/// opened from disk.
///
/// # Arguments
///
/// * `title`: Site title linking back to the home page
/// * `links`: Navigation entries in display order
/// * `route`: Route of the page being rendered
/// * `resolver`: Resolver for the page being rendered
///
/// # Returns
///
/// Header markup
pub fn site_nav(title: &str, links: &[NavLink], route: &str, resolver: &LinkResolver) -> Markup {
    html! {
        header class="site-header" {
            a class="site-title" href=(resolver.resolve_or_keep("/")) data-nav="internal" { (title) }
            nav class="site-nav" {
                @for link in links {
                    @let href = resolver.resolve_or_keep(&link.path);
                    @if is_active(&link.path, route) {
                        a class="nav-link nav-active" href=(href) aria-current="page" { (link.label) }
                    } @else {
                        a class="nav-link" href=(href) { (link.label) }
                    }
                }
            }
        }
    }
}

/// Whether a navigation path covers the current route.
///
/// The home link is only active on the home page; other links stay active
/// on their nested pages (`/writing` for `/writing/hello/`).
pub fn is_active(path: &str, route: &str) -> bool {
    let path = path.trim_matches('/');
    let route = route.trim_matches('/');

    if path.is_empty() {
        return route.is_empty();
    }

    route == path || route.starts_with(&format!("{}/", path))
}
