//! Home page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use super::{HOME_ROUTE, WRITING_ROUTE, page_seo};
use crate::components::card::{Card, card};
use crate::components::layout::page_wrapper;
use crate::components::stack::{divided_stack, page_heading, section};
use crate::content::{Post, Site};
use crate::markdown::{LinkResolver, MarkdownRenderer};
use crate::util::format_date;

/// Number of posts listed on the home page.
pub const RECENT_POSTS: usize = 3;

/// Generates the home page
///
/// Shows the heading, the intro rendered through the content components,
/// the external profile links and the most recent posts.
///
/// # Arguments
///
/// * `site`: Site content
/// * `posts`: Published posts, newest first
/// * `renderer`: Markdown renderer for the intro
///
/// # Errors
///
/// Returns error if the intro markdown fails to render
pub fn generate(site: &Site, posts: &[Post], renderer: &MarkdownRenderer) -> Result<Markup> {
    let resolver = LinkResolver::with_depth(0);
    let seo = page_seo(site, &site.site.name, HOME_ROUTE, None);
    let home = &site.home;

    let intro = renderer
        .render_at_depth(&home.intro, resolver.depth())
        .context("Failed to render home intro")?;

    let recent: Vec<Markup> = posts
        .iter()
        .take(RECENT_POSTS)
        .map(|post| post_card(post, &resolver))
        .collect();

    let heading = home.heading.as_deref().unwrap_or(&site.site.name);

    Ok(page_wrapper(
        &site.site,
        &seo,
        HOME_ROUTE,
        &["home.css"],
        html! {
            div class="stack gap-lg" {
                (page_heading(heading))
                div class="intro markdown" { (PreEscaped(intro)) }
                @if !home.links.is_empty() {
                    ul class="profile-links" {
                        @for link in &home.links {
                            li {
                                a href=(link.url) target="_blank" rel="noopener noreferrer" { (link.label) }
                            }
                        }
                    }
                }
                @if !recent.is_empty() {
                    (section("recent-writing", "Recent Writing", html! {
                        (divided_stack("gap-md", recent))
                        a class="more-link" href=(resolver.resolve_or_keep(WRITING_ROUTE)) { "All writing \u{2192}" }
                    }))
                }
            }
        },
    ))
}

/// Card linking to a post page.
pub fn post_card(post: &Post, resolver: &LinkResolver) -> Markup {
    let route = post.route();
    let date = format_date(post.front.date);

    card(
        &Card {
            title: &post.front.title,
            primary_text: &date,
            secondary_text: post.front.description.as_deref(),
            url: Some(&route),
        },
        resolver,
    )
}
