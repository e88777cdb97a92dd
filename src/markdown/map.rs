//! Tag name to component dispatch table.

use std::collections::HashMap;

use maud::Markup;

use super::Props;
use super::components;
use super::element::element;

/// Renders one content element from props and rendered children.
pub type Component = fn(&Props, Markup) -> Markup;

/// Tags the standard map styles, keyed the way content pipelines name them.
pub const STANDARD_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "p",
    "ul",
    "ol",
    "li",
    "a",
    "table",
    "th",
    "td",
    "hr",
    "br",
    "blockquote",
    "inlineCode",
];

/// Maps content element names to styled components.
///
/// Tags without an entry render as the plain element with props forwarded.
#[derive(Debug, Clone)]
pub struct ComponentMap {
    components: HashMap<&'static str, Component>,
}

impl ComponentMap {
    /// Map with no custom components; everything renders as plain elements.
    pub fn empty() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Map with the site's styled component for every standard tag.
    pub fn standard() -> Self {
        let entries: [(&'static str, Component); 15] = [
            ("h1", components::h1),
            ("h2", components::h2),
            ("h3", components::h3),
            ("p", components::paragraph),
            ("ul", components::unordered_list),
            ("ol", components::ordered_list),
            ("li", components::list_item),
            ("a", components::link),
            ("table", components::table),
            ("th", components::table_head_cell),
            ("td", components::table_data_cell),
            ("hr", components::rule),
            ("br", components::line_break),
            ("blockquote", components::quote),
            ("inlineCode", components::inline_code),
        ];

        Self {
            components: entries.into_iter().collect(),
        }
    }

    /// Registers a component, returning the one it replaced.
    pub fn insert(&mut self, tag: &'static str, component: Component) -> Option<Component> {
        self.components.insert(tag, component)
    }

    pub fn get(&self, tag: &str) -> Option<Component> {
        self.components.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.components.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Renders `tag` through its component, or as the plain element.
    ///
    /// `inlineCode` has no HTML element of its own and falls back to `code`.
    pub fn render(&self, tag: &str, props: &Props, children: Markup) -> Markup {
        match self.get(tag) {
            Some(component) => component(props, children),
            None => element(fallback_tag(tag), props, children),
        }
    }
}

impl Default for ComponentMap {
    fn default() -> Self {
        Self::standard()
    }
}

fn fallback_tag(tag: &str) -> &str {
    match tag {
        "inlineCode" => "code",
        other => other,
    }
}
