//! Content rendering: markdown through styled tag components.
//!
//! Markdown is parsed by comrak with GitHub Flavored Markdown extensions and
//! every element is rendered by the component registered for its tag name in
//! a [`ComponentMap`]. Components layer default styling beneath caller props.

pub mod components;
mod element;
mod links;
mod map;
mod props;
mod renderer;
mod slug;

pub use element::{element, is_void};
pub use links::{LinkKind, LinkResolver};
pub use map::{Component, ComponentMap, STANDARD_TAGS};
pub use props::Props;
pub use renderer::MarkdownRenderer;
pub use slug::{Slugger, slugify};
