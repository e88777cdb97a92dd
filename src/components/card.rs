//! Record summary card

use maud::{Markup, html};

use crate::markdown::{LinkKind, LinkResolver};

/// Content of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub title: &'a str,
    pub primary_text: &'a str,
    pub secondary_text: Option<&'a str>,
    /// Site path or external URL the title links to.
    pub url: Option<&'a str>,
}

/// Renders a card summarizing one record.
///
/// Site paths in `url` are resolved relative to the current page; external
/// URLs open in a new tab.
///
/// # Arguments
///
/// * `card`: Card content
/// * `resolver`: Resolver for the page the card is rendered on
pub fn card(card: &Card<'_>, resolver: &LinkResolver) -> Markup {
    let internal = LinkKind::classify(card.url).is_internal();

    html! {
        div class="card" {
            h3 class="card-title" {
                @if let Some(url) = card.url {
                    @if internal {
                        a href=(resolver.resolve_or_keep(url)) data-nav="internal" { (card.title) }
                    } @else {
                        a href=(url) target="_blank" rel="noopener noreferrer" { (card.title) }
                    }
                } @else {
                    (card.title)
                }
            }
            div class="card-meta" {
                span class="card-primary" { (card.primary_text) }
                @if let Some(secondary) = card.secondary_text {
                    span class="card-secondary" { (secondary) }
                }
            }
        }
    }
}
