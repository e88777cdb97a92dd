//! Integration tests for folio.
//!
//! Tests content loading and whole site generation into a directory.

mod common;

use anyhow::Result;
use folio::{Site, generate_site, load_posts};
use std::fs;
use tempfile::TempDir;

fn load_site(content: &TempDir) -> Result<Site> {
    Site::load(content.path().join("site.toml"))
}

/// Tests that a site without posts still produces every fixed page.
#[test]
fn test_generate_site_without_posts() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    let output = TempDir::new()?;
    let site = load_site(&content)?;
    let posts = load_posts(content.path().join("posts"), false)?;

    // Act
    let summary = generate_site(&site, &posts, output.path())?;

    // Assert
    assert_eq!(summary.routes, vec!["/", "/cv/", "/writing/"]);
    for file in ["index.html", "cv/index.html", "writing/index.html", "sitemap.xml"] {
        assert!(output.path().join(file).is_file(), "{} should exist", file);
    }
    for css in ["home.css", "cv.css", "writing.css", "post.css"] {
        assert!(
            output.path().join("assets").join(css).is_file(),
            "{} should exist",
            css
        );
    }

    let writing = fs::read_to_string(output.path().join("writing/index.html"))?;
    assert!(writing.contains("Nothing published yet."));
    Ok(())
}

/// Tests post pages, drafts and the sitemap together.
#[test]
fn test_generate_site_with_posts() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    common::write_post(
        content.path(),
        "first",
        "title = \"First Post\"\ndate = \"2024-01-10\"",
        "## Setup\n\nSee the [CV](/cv).\n",
    )?;
    common::write_post(
        content.path(),
        "second",
        "title = \"Second Post\"\ndate = \"2024-05-02\"",
        "Plain body.\n",
    )?;
    common::write_post(
        content.path(),
        "secret",
        "title = \"Secret\"\ndate = \"2024-06-01\"\ndraft = true",
        "Hidden.\n",
    )?;
    let output = TempDir::new()?;
    let site = load_site(&content)?;
    let posts = load_posts(content.path().join("posts"), false)?;

    // Act
    let summary = generate_site(&site, &posts, output.path())?;

    // Assert
    assert_eq!(
        summary.routes,
        vec![
            "/",
            "/cv/",
            "/writing/",
            "/writing/second/",
            "/writing/first/"
        ]
    );
    assert!(!output.path().join("writing/secret").exists());

    let first = fs::read_to_string(output.path().join("writing/first/index.html"))?;
    assert!(first.contains("First Post"));
    assert!(first.contains(r##"<a class="mdx-anchor" aria-label="anchor" href="#setup">"##));
    assert!(first.contains(r#"href="../../cv/index.html""#));
    assert!(first.contains(r#"href="../../assets/post.css""#));

    let sitemap = fs::read_to_string(output.path().join("sitemap.xml"))?;
    assert!(sitemap.contains("<loc>https://test.example/</loc>"));
    assert!(sitemap.contains("<loc>https://test.example/writing/first/</loc>"));
    assert!(!sitemap.contains("secret"));
    Ok(())
}

/// Tests that drafts are published when requested.
#[test]
fn test_load_posts_with_drafts() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    common::write_post(
        content.path(),
        "secret",
        "title = \"Secret\"\ndate = \"2024-06-01\"\ndraft = true",
        "Hidden.\n",
    )?;

    // Act
    let without = load_posts(content.path().join("posts"), false)?;
    let with = load_posts(content.path().join("posts"), true)?;

    // Assert
    assert!(without.is_empty());
    assert_eq!(with.len(), 1);
    assert_eq!(with[0].route(), "/writing/secret/");
    Ok(())
}

/// Tests CV page content generated from site records.
#[test]
fn test_generated_cv_page() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    let output = TempDir::new()?;
    let site = load_site(&content)?;

    // Act
    generate_site(&site, &[], output.path())?;

    // Assert
    let cv = fs::read_to_string(output.path().join("cv/index.html"))?;
    assert!(cv.contains("Staff Engineer"));
    assert!(cv.contains("Initech"));
    assert!(cv.contains("Master&#39;s degree") || cv.contains("Master's degree"));
    assert!(cv.contains("Kubernetes Administrator"));
    assert!(cv.contains(r#"data-key="experience_0""#));
    assert!(cv.contains(r#"<link rel="canonical" href="https://test.example/cv/">"#));
    Ok(())
}

/// Tests that a malformed site file is reported with its path.
#[test]
fn test_load_invalid_site_file() -> Result<()> {
    // Arrange
    let content = TempDir::new()?;
    common::write_file(content.path(), "site.toml", "[site]\nname = \"No URL\"\n")?;

    // Act
    let result = Site::load(content.path().join("site.toml"));

    // Assert
    let message = format!("{:#}", result.expect_err("Site without url should fail"));
    assert!(message.contains("site.toml"), "{}", message);
    Ok(())
}

/// Tests that regenerating into the same directory yields identical pages.
#[test]
fn test_generate_site_is_deterministic() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    let output = TempDir::new()?;
    let site = load_site(&content)?;

    // Act
    generate_site(&site, &[], output.path())?;
    let first = fs::read_to_string(output.path().join("index.html"))?;
    generate_site(&site, &[], output.path())?;
    let second = fs::read_to_string(output.path().join("index.html"))?;

    // Assert
    assert_eq!(first, second);
    Ok(())
}
