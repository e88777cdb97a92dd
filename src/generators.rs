//! Whole site generation.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::write_css_assets;
use crate::content::{Post, Site};
use crate::markdown::MarkdownRenderer;
use crate::pages::{self, CV_ROUTE, HOME_ROUTE, WRITING_ROUTE};
use crate::path::route_file;
use crate::sitemap::generate_sitemap;

/// Files written by a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Routes of generated pages, in generation order.
    pub routes: Vec<String>,
    /// Page files relative to the output directory.
    pub files: Vec<PathBuf>,
}

impl BuildSummary {
    pub fn page_count(&self) -> usize {
        self.routes.len()
    }
}

/// Generates the complete site into `output`.
///
/// Writes CSS assets, the home, CV and writing pages, one page per post
/// and a sitemap covering every page.
///
/// # Arguments
///
/// * `site`: Site content
/// * `posts`: Posts to publish, newest first
/// * `output`: Output directory, created if missing
///
/// # Errors
///
/// Returns error if markdown rendering fails or any file cannot be written
pub fn generate_site(site: &Site, posts: &[Post], output: &Path) -> Result<BuildSummary> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    let renderer = MarkdownRenderer::new();
    let mut summary = BuildSummary::default();

    let home = pages::index::generate(site, posts, &renderer)?;
    write_page(output, HOME_ROUTE, home, &mut summary)?;

    write_page(output, CV_ROUTE, pages::cv::generate(site), &mut summary)?;
    write_page(
        output,
        WRITING_ROUTE,
        pages::writing::generate(site, posts),
        &mut summary,
    )?;

    for post in posts {
        let page = pages::post::generate(site, post, &renderer)?;
        write_page(output, &post.route(), page, &mut summary)?;
    }

    let sitemap = generate_sitemap(&site.site.url, &summary.routes);
    let sitemap_path = output.join("sitemap.xml");
    fs::write(&sitemap_path, sitemap)
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

    info!(
        pages = summary.page_count(),
        posts = posts.len(),
        output = %output.display(),
        "site generated"
    );

    Ok(summary)
}

fn write_page(output: &Path, route: &str, page: Markup, summary: &mut BuildSummary) -> Result<()> {
    let relative = route_file(route);
    let path = output.join(&relative);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(&path, page.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))?;

    debug!(route, path = %path.display(), "generated page");

    summary.routes.push(route.to_string());
    summary.files.push(relative);
    Ok(())
}
