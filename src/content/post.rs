//! Long form posts: TOML front matter followed by markdown.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const DELIMITER: &str = "+++";

/// Metadata block at the top of a post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    /// Publication date, written as `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

/// A post ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub slug: String,
    pub front: FrontMatter,
    pub body: String,
}

impl Post {
    /// Splits front matter from the body and parses it.
    ///
    /// # Errors
    ///
    /// Returns error if the source does not open with a `+++` block, the
    /// block is unterminated, or its TOML is invalid.
    pub fn parse(slug: impl Into<String>, source: &str) -> Result<Self> {
        let source = source.trim_start_matches('\u{feff}');
        let mut lines = source.split_inclusive('\n');

        match lines.next() {
            Some(first) if first.trim_end() == DELIMITER => {}
            _ => bail!("Post must start with a {} front matter block", DELIMITER),
        }

        let mut front = String::new();
        let mut closed = false;
        for line in lines.by_ref() {
            if line.trim_end() == DELIMITER {
                closed = true;
                break;
            }
            front.push_str(line);
        }

        if !closed {
            bail!("Unterminated front matter block");
        }

        let body: String = lines.collect();
        let front: FrontMatter = toml::from_str(&front).context("Invalid front matter")?;

        Ok(Self {
            slug: slug.into(),
            front,
            body: body.trim_start_matches('\n').to_string(),
        })
    }

    /// Site route of the post page.
    pub fn route(&self) -> String {
        format!("/writing/{}/", self.slug)
    }
}

/// Loads every `*.md` post in a directory, newest first.
///
/// A missing directory yields no posts. Drafts are skipped unless
/// `include_drafts` is set. Posts with the same date are ordered by slug.
///
/// # Errors
///
/// Returns error if the directory or a post cannot be read or parsed.
pub fn load_posts(dir: impl AsRef<Path>, include_drafts: bool) -> Result<Vec<Post>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "no posts directory");
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read posts directory: {}", dir.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read posts directory entry")?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let slug = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => {
                warn!(path = %path.display(), "skipping post with invalid UTF-8 name");
                continue;
            }
        };

        if !is_url_safe(&slug) {
            warn!(path = %path.display(), "skipping post whose name is not URL safe");
            continue;
        }

        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read post: {}", path.display()))?;
        let post = Post::parse(slug, &source)
            .with_context(|| format!("Failed to parse post: {}", path.display()))?;

        if post.front.draft && !include_drafts {
            debug!(slug = %post.slug, "skipping draft");
            continue;
        }

        posts.push(post);
    }

    posts.sort_by(|a, b| {
        b.front
            .date
            .cmp(&a.front.date)
            .then_with(|| a.slug.cmp(&b.slug))
    });

    Ok(posts)
}

/// Slugs become route segments, so they must survive percent encoding
/// unchanged.
fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty() && urlencoding::encode(slug) == slug
}
