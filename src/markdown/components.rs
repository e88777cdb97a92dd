//! Styled components for content tags.
//!
//! Each component takes caller props and rendered children, layers its
//! default styling beneath the caller props, and renders the semantically
//! matching element. Responsive sizes and hover states live in
//! `assets/markdown.css` under the `mdx-*` classes set here.

use maud::{Markup, html};

use super::element::element;
use super::links::LinkKind;
use super::Props;

/// Link color used for external links and heading anchors.
pub const LINK_COLOR: &str = "hsl(208,99%,44%)";

const MONO_FONT: &str =
    r#"SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace"#;

fn styled(tag: &str, defaults: Props, props: &Props, children: Markup) -> Markup {
    element(tag, &props.merged_over(&defaults), children)
}

pub fn h1(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-h1")
        .style("font-weight", "500")
        .style("margin-top", "16px")
        .style("margin-bottom", "16px");
    styled("h1", defaults, props, children)
}

pub fn h2(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-h2")
        .style("font-weight", "500")
        .style("margin-top", "2em")
        .style("margin-bottom", "1em");
    docs_heading("h2", defaults, props, children)
}

pub fn h3(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-h3")
        .style("font-weight", "500")
        .style("margin-top", "1em")
        .style("margin-bottom", "0.5em");
    docs_heading("h3", defaults, props, children)
}

/// Section heading with a hover anchor when an `id` is present.
fn docs_heading(tag: &str, defaults: Props, props: &Props, children: Markup) -> Markup {
    let defaults = defaults
        .class("mdx-heading")
        .style("scroll-margin-top", "100px");
    let id = props.id();

    let inner = html! {
        span class="mdx-heading-inner" {
            (children)
            @if let Some(id) = id {
                a class="mdx-anchor" aria-label="anchor" href=(format!("#{}", id)) { "#" }
            }
        }
    };

    styled(tag, defaults, props, inner)
}

pub fn paragraph(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-p")
        .style("margin-top", "1rem")
        .style("margin-bottom", "2rem")
        .style("line-height", "1.625");
    styled("p", defaults, props, children)
}

pub fn unordered_list(props: &Props, children: Markup) -> Markup {
    styled("ul", list_defaults("mdx-ul"), props, children)
}

pub fn ordered_list(props: &Props, children: Markup) -> Markup {
    styled("ol", list_defaults("mdx-ol"), props, children)
}

fn list_defaults(class: &str) -> Props {
    Props::new()
        .class(class)
        .style("padding-top", "8px")
        .style("padding-left", "16px")
        .style("margin-left", "8px")
        .style("margin-bottom", "32px")
}

pub fn list_item(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new().class("mdx-li").style("padding-bottom", "4px");
    styled("li", defaults, props, children)
}

/// Link that keeps site paths local and opens everything else in a new tab.
pub fn link(props: &Props, children: Markup) -> Markup {
    let preset_internal = props.get("data-nav") == Some("internal");

    if preset_internal || LinkKind::classify(props.href()).is_internal() {
        let defaults = Props::new().attr("data-nav", "internal");
        return styled("a", defaults, props, children);
    }

    let defaults = Props::new()
        .class("external-link")
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .style("color", LINK_COLOR)
        .style("text-decoration", "none")
        .style("transition", "all 0.15s ease-out")
        .style("border-bottom", "1px solid transparent");
    styled("a", defaults, props, children)
}

pub fn inline_code(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-code")
        .style("display", "inline-block")
        .style("font-family", MONO_FONT)
        .style("font-size", "0.84em")
        .style("background", "rgb(254, 252, 191)")
        .style("color", "rgb(116, 66, 16)")
        .style("padding", "0 3px")
        .style("border-radius", "2px");
    styled("code", defaults, props, children)
}

pub fn line_break(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new().class("mdx-br");
    styled("br", defaults, props, children)
}

pub fn rule(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-hr")
        .style("border", "0")
        .style("background", "#e2e8f0")
        .style("height", "1px")
        .style("margin", "12px 0")
        .style("width", "100%");
    styled("hr", defaults, props, children)
}

pub fn table(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-table")
        .style("text-align", "left")
        .style("margin-top", "32px")
        .style("width", "100%");
    styled("table", defaults, props, children)
}

pub fn table_head_cell(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-th")
        .style("background", "#f7fafc")
        .style("font-weight", "500")
        .style("padding", "8px")
        .style("font-size", "14px");
    styled("th", defaults, props, children)
}

pub fn table_data_cell(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-td")
        .style("padding", "8px")
        .style("border-top-width", "1px")
        .style("border-color", "inherit")
        .style("font-size", "0.875rem")
        .style("white-space", "normal");
    styled("td", defaults, props, children)
}

pub fn quote(props: &Props, children: Markup) -> Markup {
    let defaults = Props::new()
        .class("mdx-quote")
        .style("display", "flex")
        .style("align-items", "center")
        .style("position", "relative")
        .style("overflow", "hidden")
        .style("padding", "12px 16px 12px 12px")
        .style("margin", "16px 0 32px 0")
        .style("border-left", "4px solid #3182ce")
        .style("width", "98%")
        .style("background", "#ebf8ff");
    styled("blockquote", defaults, props, children)
}
