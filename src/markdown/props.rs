//! Property bags passed to content components.

use std::collections::BTreeMap;

/// Attributes and inline style declarations for a single element.
///
/// Attributes are kept sorted by name so rendered output is deterministic.
/// Style declarations keep insertion order; setting a property that already
/// exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    attrs: BTreeMap<String, String>,
    style: Vec<(String, String)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets a CSS declaration, replacing any previous value for the property.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    /// Appends a class name to the `class` attribute.
    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.style.push((property, value)),
        }
    }

    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() {
            return;
        }
        match self.attrs.get_mut("class") {
            Some(existing) if !existing.is_empty() => {
                if !existing.split_whitespace().any(|c| c == class) {
                    existing.push(' ');
                    existing.push_str(class);
                }
            }
            _ => {
                self.attrs.insert("class".to_string(), class.to_string());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id").filter(|id| !id.is_empty())
    }

    pub fn href(&self) -> Option<&str> {
        self.get("href")
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes style declarations as an inline `style` attribute value.
    ///
    /// Returns `None` when there are no declarations.
    pub fn style_attr(&self) -> Option<String> {
        if self.style.is_empty() {
            return None;
        }

        let declarations: Vec<String> = self
            .style
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect();
        Some(declarations.join("; "))
    }

    /// Layers these props over component defaults.
    ///
    /// Default declarations come first and caller declarations override them
    /// property by property. Caller attributes replace default attributes,
    /// except `class`, which is appended to the default class list.
    pub fn merged_over(&self, defaults: &Props) -> Props {
        let mut merged = defaults.clone();

        for (name, value) in &self.attrs {
            if name == "class" {
                for class in value.split_whitespace() {
                    merged.add_class(class);
                }
            } else {
                merged.attrs.insert(name.clone(), value.clone());
            }
        }

        for (property, value) in &self.style {
            merged.set_style(property.clone(), value.clone());
        }

        merged
    }
}
