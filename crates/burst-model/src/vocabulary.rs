//! Suggestion vocabulary snapshots and the placeholder wire format.

use serde::Serialize;

pub const PLACEHOLDER_OPEN: &str = "{{";
pub const PLACEHOLDER_CLOSE: &str = "}}";

/// Joins a document name and field name into a vocabulary entry.
pub fn vocabulary_entry(document: &str, field: &str) -> String {
    format!("{document}.{field}")
}

/// Wraps an accepted entry as `{{entry}}`, trimming surrounding whitespace.
pub fn placeholder(entry: &str) -> String {
    format!("{PLACEHOLDER_OPEN}{}{PLACEHOLDER_CLOSE}", entry.trim())
}

/// An immutable, versioned list of `document.field` suggestions.
///
/// Snapshots are rebuilt in full whenever the registry changes and handed out
/// behind an `Arc`, so a reader never observes a half-built list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionVocabulary {
    version: u64,
    entries: Vec<String>,
}

impl SuggestionVocabulary {
    pub fn new(version: u64, entries: Vec<String>) -> Self {
        Self { version, entries }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
