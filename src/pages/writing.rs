//! Writing index page generation

use maud::{Markup, html};

use super::index::post_card;
use super::{WRITING_ROUTE, page_seo};
use crate::components::layout::page_wrapper;
use crate::components::stack::{divided_stack, page_heading};
use crate::content::{Post, Site};
use crate::markdown::LinkResolver;
use crate::path::calculate_depth;

const TITLE: &str = "Writing";

/// Generates the post listing page
///
/// # Arguments
///
/// * `site`: Site content
/// * `posts`: Posts in display order (newest first)
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site: &Site, posts: &[Post]) -> Markup {
    let resolver = LinkResolver::with_depth(calculate_depth(WRITING_ROUTE));
    let seo = page_seo(site, TITLE, WRITING_ROUTE, None);
    let cards: Vec<Markup> = posts.iter().map(|post| post_card(post, &resolver)).collect();

    page_wrapper(
        &site.site,
        &seo,
        WRITING_ROUTE,
        &["writing.css"],
        html! {
            div class="stack gap-md" {
                (page_heading(TITLE))
                @if cards.is_empty() {
                    p class="empty-state" { "Nothing published yet." }
                } @else {
                    (divided_stack("gap-md", cards))
                }
            }
        },
    )
}
