//! Link classification and site internal link resolution.

/// Where a link points relative to the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Site path (`/about`) or in-page anchor (`#section`).
    Internal,
    /// Anything else, including links without a target.
    External,
}

impl LinkKind {
    /// Classifies a link target.
    ///
    /// Targets starting with `/` or `#` stay on the site. A missing target is
    /// treated as external.
    pub fn classify(href: Option<&str>) -> Self {
        match href {
            Some(h) if h.starts_with('/') || h.starts_with('#') => LinkKind::Internal,
            _ => LinkKind::External,
        }
    }

    pub fn is_internal(self) -> bool {
        self == LinkKind::Internal
    }
}

/// Rewrites root absolute site paths into page relative file paths.
///
/// Generated pages live at `<route>/index.html`, so `/cv` becomes
/// `cv/index.html` prefixed with one `../` per directory level of the page
/// being rendered. This keeps the output browsable straight from disk.
/// Anchors, external URLs and protocol relative URLs (`//host`) are left
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkResolver {
    depth: usize,
}

impl LinkResolver {
    /// Creates resolver for a page `depth` directories below the site root.
    pub fn with_depth(depth: usize) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Relative prefix that reaches the site root from the current page.
    pub fn root_prefix(&self) -> String {
        "../".repeat(self.depth)
    }

    /// Resolves link, returning `None` when it should not be rewritten.
    pub fn resolve(&self, href: &str) -> Option<String> {
        if !href.starts_with('/') || href.starts_with("//") {
            return None;
        }

        let split = href.find(['#', '?']).unwrap_or(href.len());
        let (path, suffix) = href.split_at(split);
        let path = path.trim_matches('/');

        let last_segment = path.rsplit('/').next().unwrap_or("");
        let target = if path.is_empty() {
            "index.html".to_string()
        } else if last_segment.contains('.') {
            path.to_string()
        } else {
            format!("{}/index.html", path)
        };

        Some(format!("{}{}{}", self.root_prefix(), target, suffix))
    }

    /// Resolves link or returns it unchanged.
    pub fn resolve_or_keep(&self, href: &str) -> String {
        self.resolve(href).unwrap_or_else(|| href.to_string())
    }
}
