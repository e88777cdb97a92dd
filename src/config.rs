//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Site file name inside the content directory.
pub const SITE_FILE: &str = "site.toml";

/// Posts directory name inside the content directory.
pub const POSTS_DIR: &str = "posts";

/// Command line configuration for folio.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Config {
    /// Content directory containing site.toml and posts/
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Canonical base URL, overrides site.url
    #[arg(long)]
    pub base_url: Option<String>,

    /// Include draft posts
    #[arg(long)]
    pub drafts: bool,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory or its site file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        let site_file = self.site_file();
        if !site_file.is_file() {
            bail!("Site file does not exist: {}", site_file.display());
        }

        if let Some(url) = &self.base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            bail!("Base URL must start with http:// or https://: {}", url);
        }

        Ok(())
    }

    pub fn site_file(&self) -> PathBuf {
        self.content.join(SITE_FILE)
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.content.join(POSTS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(content: PathBuf) -> Config {
        Config {
            content,
            output: PathBuf::from("dist"),
            base_url: None,
            drafts: false,
            no_open: true,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_validate_missing_content_dir() {
        // Arrange
        let config = config(PathBuf::from("/nonexistent/content"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_missing_site_file() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let config = config(dir.path().to_path_buf());

        // Act
        let result = config.validate();

        // Assert
        let message = format!("{:#}", result.expect_err("Should fail without site.toml"));
        assert!(message.contains("site.toml"), "{}", message);
        Ok(())
    }

    #[test]
    fn test_validate_existing_content() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        fs::write(dir.path().join(SITE_FILE), "")?;
        let config = config(dir.path().to_path_buf());

        // Act & Assert
        assert!(config.validate().is_ok());
        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_base_url() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        fs::write(dir.path().join(SITE_FILE), "")?;
        let mut config = config(dir.path().to_path_buf());
        config.base_url = Some("ada.example".to_string());

        // Act & Assert
        assert!(config.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_content_paths() {
        // Arrange
        let config = config(PathBuf::from("site"));

        // Assert
        assert_eq!(config.site_file(), PathBuf::from("site/site.toml"));
        assert_eq!(config.posts_dir(), PathBuf::from("site/posts"));
    }

    #[test]
    fn test_parse_args() {
        // Act
        let config = Config::try_parse_from([
            "folio",
            "my-content",
            "-o",
            "public",
            "--base-url",
            "https://ada.example",
            "--drafts",
            "--no-open",
        ])
        .expect("Should parse arguments");

        // Assert
        assert_eq!(config.content, PathBuf::from("my-content"));
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.base_url.as_deref(), Some("https://ada.example"));
        assert!(config.drafts);
        assert!(config.no_open);
        assert!(!config.verbose);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Config::try_parse_from(["folio", "-v", "-q"]);
        assert!(result.is_err());
    }
}
