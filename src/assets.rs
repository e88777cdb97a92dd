//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const CARD: &str = include_str!("../assets/components/card.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

const HOME_PAGE: &str = include_str!("../assets/page-home.css");
const CV_PAGE: &str = include_str!("../assets/page-cv.css");
const WRITING_PAGE: &str = include_str!("../assets/page-writing.css");
const POST_PAGE: &str = include_str!("../assets/page-post.css");

/// Stylesheets written to the assets directory, one per page type.
const BUNDLES: &[(&str, &[&str])] = &[
    ("home.css", &[BASE, LAYOUT, CARD, MARKDOWN, HOME_PAGE]),
    ("cv.css", &[BASE, LAYOUT, CARD, CV_PAGE]),
    ("writing.css", &[BASE, LAYOUT, CARD, WRITING_PAGE]),
    ("post.css", &[BASE, LAYOUT, MARKDOWN, POST_PAGE]),
];

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    for (name, parts) in BUNDLES {
        write_bundled(assets_dir, name, parts)?;
    }
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
