//! Workflow tests for folio content rendering.
//!
//! Tests the pipeline from markdown through a component map to HTML, and
//! from a parsed post to its finished page.

use anyhow::Result;
use folio::markdown::components;
use folio::pages;
use folio::{ComponentMap, MarkdownRenderer, Post, Props, Site};
use maud::{Markup, html};

const SITE: &str = r#"
[site]
name = "Flow Owner"
title = "flow.dev"
url = "https://flow.example"
"#;

fn shout(props: &Props, children: Markup) -> Markup {
    html! { p class="shout" data-id=[props.id()] { (children) "!" } }
}

/// Tests replacing one tag component leaves the others in place.
#[test]
fn test_workflow_custom_component_map() -> Result<()> {
    // Arrange
    let mut map = ComponentMap::standard();
    map.insert("p", shout);
    let renderer = MarkdownRenderer::with_components(map);

    // Act
    let html = renderer.render("## Title\n\nHello")?;

    // Assert
    assert!(html.contains(r#"<p class="shout">Hello!</p>"#), "{}", html);
    assert!(html.contains("mdx-h2"), "{}", html);
    Ok(())
}

/// Tests an empty map renders plain elements for every tag.
#[test]
fn test_workflow_empty_component_map() -> Result<()> {
    // Arrange
    let renderer = MarkdownRenderer::with_components(ComponentMap::empty());

    // Act
    let html = renderer.render("Some `code` and a [link](https://example.com).")?;

    // Assert
    assert!(html.contains("<p>"), "{}", html);
    assert!(html.contains("<code>code</code>"), "{}", html);
    assert!(!html.contains("mdx-"), "{}", html);
    Ok(())
}

/// Tests components merge caller props over their defaults.
#[test]
fn test_workflow_component_props_merge() {
    // Arrange
    let props = Props::new()
        .class("lead")
        .style("margin-bottom", "0")
        .attr("id", "intro");

    // Act
    let html = components::paragraph(&props, html! { "Text" }).into_string();

    // Assert
    assert!(html.contains(r#"class="mdx-p lead""#), "{}", html);
    assert!(html.contains("margin-bottom: 0"), "{}", html);
    assert!(html.contains(r#"id="intro""#), "{}", html);
}

/// Tests a post from source text through to its page.
#[test]
fn test_workflow_post_to_page() -> Result<()> {
    // Arrange
    let site = Site::from_toml(SITE)?;
    let post = Post::parse(
        "flow",
        "+++\ntitle = \"Flow\"\ndate = \"2023-11-05\"\n+++\n\n```rust\nlet x = 1;\n```\n\nVisit [home](/).\n",
    )?;
    let renderer = MarkdownRenderer::new();

    // Act
    let page = pages::post::generate(&site, &post, &renderer)?.into_string();

    // Assert
    assert!(page.contains("<title>Flow \u{2014} Flow Owner</title>"), "{}", page);
    assert!(page.contains("November 5, 2023"), "{}", page);
    assert!(page.contains(r#"class="language-rust""#), "{}", page);
    assert!(page.contains(r#"href="../../index.html""#), "{}", page);
    Ok(())
}
