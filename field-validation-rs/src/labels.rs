//! Field labels
//!
//! Maps field identifiers to the human readable names used in messages.

use std::collections::HashMap;

/// Resolves field identifiers to display labels
#[derive(Debug, Clone, Default)]
pub struct LabelResolver {
    labels: HashMap<String, String>,
}

impl LabelResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the label of a field, replacing any previous one
    pub fn set(&mut self, identifier: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(identifier.into(), label.into());
    }

    /// Declared label, or the identifier itself
    pub fn resolve<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.labels
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(identifier)
    }
}
