//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing temporary content directories used across
//! multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

pub const SITE_TOML: &str = r#"
[site]
name = "Test Owner"
title = "test.dev"
url = "https://test.example/"
description = "A test portfolio"

[home]
heading = "Hello there"
intro = "I write [software](https://example.com). Read my [CV](/cv)."
links = [{ label = "GitHub", url = "https://github.com/tester" }]

[[cv.experiences]]
title = "Staff Engineer"
company = "Initech"
start_date = "Feb 2020"
end_date = "Present"
location = "Remote"
url = "https://initech.example"
descriptions = ["Owned the reporting pipeline."]
stack = ["Rust", "SQLite"]

[[cv.educations]]
field = "Mathematics"
school = "Test University"
start_date = "2012"
end_date = "2016"
degree = "Master's degree"

[[cv.certifications]]
name = "Kubernetes Administrator"
date = "Apr 2021"
issued_by = "CNCF"
"#;

/// Creates temporary content directory with a site file and no posts.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_content_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "site.toml", SITE_TOML)?;
    Ok(dir)
}

/// Writes post with front matter into the content directory.
///
/// # Arguments
///
/// * `content_dir`: Content directory root
/// * `slug`: File stem of the post
/// * `front`: TOML front matter lines
/// * `body`: Markdown body
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_post(content_dir: &Path, slug: &str, front: &str, body: &str) -> Result<()> {
    let source = format!("+++\n{}\n+++\n\n{}", front.trim(), body);
    write_file(content_dir, &format!("posts/{}.md", slug), &source)
}

/// Writes file to directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
