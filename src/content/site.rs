//! Site wide content loaded from `site.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default social preview image service.
pub const DEFAULT_OG_IMAGE_BASE: &str = "https://og.onur.dev";

/// All static content records for the site.
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub site: SiteMeta,
    #[serde(default)]
    pub home: Home,
    #[serde(default)]
    pub cv: CvData,
}

/// Identity and page metadata shared by every page.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteMeta {
    /// Owner name, used in page titles.
    pub name: String,
    /// Site title shown in the navigation header.
    pub title: String,
    /// Canonical base URL without trailing slash.
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub og_image_base: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default = "default_nav")]
    pub nav: Vec<NavLink>,
}

/// Navigation entry pointing at a site path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// Landing page content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Home {
    #[serde(default)]
    pub heading: Option<String>,
    /// Markdown rendered through the content components.
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

/// Records shown on the CV page, in display order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CvData {
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub field: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub degree: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub date: String,
    pub issued_by: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn default_nav() -> Vec<NavLink> {
    [("Home", "/"), ("Writing", "/writing"), ("CV", "/cv")]
        .into_iter()
        .map(|(label, path)| NavLink {
            label: label.to_string(),
            path: path.to_string(),
        })
        .collect()
}

impl Site {
    /// Reads and parses a site file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid site TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site file: {}", path.display()))?;
        Self::from_toml(&source)
            .with_context(|| format!("Failed to parse site file: {}", path.display()))
    }

    /// Parses site content from TOML source.
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or malformed.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut site: Site = toml::from_str(source).context("Invalid site TOML")?;
        site.site.url = site.site.url.trim_end_matches('/').to_string();
        Ok(site)
    }

    /// Replaces the canonical base URL.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.site.url = url.trim_end_matches('/').to_string();
        self
    }

    /// Absolute canonical URL for a site route such as `/cv/`.
    pub fn page_url(&self, route: &str) -> String {
        format!("{}{}", self.site.url, route)
    }

    pub fn og_image_base(&self) -> &str {
        self.site
            .og_image_base
            .as_deref()
            .unwrap_or(DEFAULT_OG_IMAGE_BASE)
    }
}
