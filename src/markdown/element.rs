//! Generic element primitive.

use maud::{Markup, PreEscaped, html};

use super::Props;

/// Elements that never carry children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "source", "wbr"];

/// Returns whether the tag is an HTML void element.
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Renders an arbitrary element with the given props and children.
///
/// Maud requires tag names at compile time, so the tag is written by hand
/// while attribute values and style go through maud's escaping. Children of
/// void elements are discarded.
///
/// # Arguments
///
/// * `tag`: Element name, trusted (comes from the component map)
/// * `props`: Attributes and style declarations
/// * `children`: Already rendered child markup
pub fn element(tag: &str, props: &Props, children: Markup) -> Markup {
    let mut out = String::with_capacity(children.0.len() + 64);

    out.push('<');
    out.push_str(tag);
    for (name, value) in props.attrs() {
        push_attr(&mut out, name, value);
    }
    if let Some(style) = props.style_attr() {
        push_attr(&mut out, "style", &style);
    }
    out.push('>');

    if is_void(tag) {
        return PreEscaped(out);
    }

    out.push_str(&children.0);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');

    PreEscaped(out)
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html! { (value) }.into_string());
    out.push('"');
}
