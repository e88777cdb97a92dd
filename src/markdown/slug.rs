//! Heading anchor ids.

use std::collections::HashMap;

/// Generates unique GitHub style heading ids within one document.
///
/// Repeated headings receive `-1`, `-2`, ... suffixes in document order.
/// Every emitted id is remembered, so a suffixed id never collides with a
/// later heading whose own slug is the same text.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a unique id for heading text, or `None` when the text has no
    /// characters usable in an id.
    pub fn slug(&mut self, text: &str) -> Option<String> {
        let base = slugify(text);
        if base.is_empty() {
            return None;
        }

        let mut id = base.clone();
        while self.seen.contains_key(&id) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            id = format!("{}-{}", base, count);
        }
        self.seen.insert(id.clone(), 0);

        Some(id)
    }
}

/// Lowercases text, turns spaces into `-` and drops punctuation.
pub fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c.to_lowercase().collect::<String>())
            } else if c.is_whitespace() {
                Some("-".to_string())
            } else {
                None
            }
        })
        .collect()
}
