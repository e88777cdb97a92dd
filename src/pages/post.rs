//! Post page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use super::page_seo;
use crate::components::layout::page_wrapper;
use crate::content::{Post, Site};
use crate::markdown::MarkdownRenderer;
use crate::path::calculate_depth;
use crate::util::{format_date, iso_date};

/// Generates a post page with its body rendered through the content
/// components.
///
/// # Errors
///
/// Returns error if the body fails to render
pub fn generate(site: &Site, post: &Post, renderer: &MarkdownRenderer) -> Result<Markup> {
    let route = post.route();
    let body = renderer
        .render_at_depth(&post.body, calculate_depth(&route))
        .with_context(|| format!("Failed to render post: {}", post.slug))?;
    let seo = page_seo(
        site,
        &post.front.title,
        &route,
        post.front.description.as_deref(),
    );

    Ok(page_wrapper(
        &site.site,
        &seo,
        &route,
        &["post.css"],
        html! {
            article class="post" {
                header class="post-header" {
                    h1 class="page-heading" { (post.front.title) }
                    time class="post-date" datetime=(iso_date(post.front.date)) {
                        (format_date(post.front.date))
                    }
                }
                div class="markdown" { (PreEscaped(body)) }
            }
        },
    ))
}
