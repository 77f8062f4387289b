use burst_model::InsertStyle;
use serde::{Deserialize, Serialize};

use crate::word::{Separator, WordBoundaries};

/// Characters that end a word. `.`, `_` and `-` are deliberately absent:
/// they appear inside `document.field` entries and are typed as part of a
/// query.
pub const DEFAULT_TERMINATORS: &str = ",;:!?()[]<>\"'{}|\\/=+*&^%$#@~`";

/// Tunables shared by every buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionOptions {
    /// Characters that end the current word.
    pub terminators: String,
    /// Minimum word length before typing opens the popup.
    pub min_word_len: usize,
    /// Cap on listed candidates; 0 lists all.
    pub max_candidates: usize,
    /// Appended after `}}` in editor buffers; empty appends nothing.
    pub editor_trailing_delimiter: String,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            terminators: DEFAULT_TERMINATORS.to_string(),
            min_word_len: 1,
            max_candidates: 0,
            editor_trailing_delimiter: " ".to_string(),
        }
    }
}

impl CompletionOptions {
    /// Boundaries of the filter query. Every style splits it on any
    /// whitespace.
    pub fn query_boundaries(&self) -> WordBoundaries {
        WordBoundaries::new(Separator::AnyWhitespace, self.terminators.chars())
    }

    /// Boundaries of the span an insertion replaces in a buffer of the given
    /// style. Line buffers split on spaces only, so a tab-joined run is
    /// replaced as a whole.
    pub fn boundaries(&self, style: InsertStyle) -> WordBoundaries {
        let separator = match style {
            InsertStyle::Line => Separator::Space,
            InsertStyle::Editor => Separator::AnyWhitespace,
        };
        WordBoundaries::new(separator, self.terminators.chars())
    }

    /// Text placed after the closing braces for the given style.
    pub fn trailing_delimiter(&self, style: InsertStyle) -> &str {
        match style {
            InsertStyle::Line => "",
            InsertStyle::Editor => &self.editor_trailing_delimiter,
        }
    }

    pub(crate) fn effective_min_word_len(&self) -> usize {
        self.min_word_len.max(1)
    }

    pub(crate) fn candidate_limit(&self) -> Option<usize> {
        (self.max_candidates > 0).then_some(self.max_candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_characters_are_not_terminators() {
        for ch in ['.', '_', '-'] {
            assert!(!DEFAULT_TERMINATORS.contains(ch), "{ch:?}");
        }
        assert!(DEFAULT_TERMINATORS.contains(','));
    }

    #[test]
    fn line_style_never_appends_a_delimiter() {
        let options = CompletionOptions::default();
        assert_eq!(options.trailing_delimiter(InsertStyle::Line), "");
        assert_eq!(options.trailing_delimiter(InsertStyle::Editor), " ");
    }

    #[test]
    fn query_uses_any_whitespace_for_every_style() {
        let options = CompletionOptions::default();
        assert_eq!(options.query_boundaries().separator(), Separator::AnyWhitespace);
        assert_eq!(options.boundaries(InsertStyle::Line).separator(), Separator::Space);
        assert_eq!(
            options.boundaries(InsertStyle::Editor).separator(),
            Separator::AnyWhitespace
        );
    }

    #[test]
    fn zero_limits_mean_unlimited() {
        let options = CompletionOptions {
            min_word_len: 0,
            ..CompletionOptions::default()
        };
        assert_eq!(options.effective_min_word_len(), 1);
        assert_eq!(options.candidate_limit(), None);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let options: CompletionOptions =
            toml::from_str("max_candidates = 10\neditor_trailing_delimiter = \"\"\n").unwrap();
        assert_eq!(options.max_candidates, 10);
        assert_eq!(options.candidate_limit(), Some(10));
        assert_eq!(options.trailing_delimiter(InsertStyle::Editor), "");
        assert_eq!(options.terminators, DEFAULT_TERMINATORS);
    }

    #[test]
    fn json_field_names_are_stable() {
        let value = serde_json::to_value(CompletionOptions::default()).unwrap();
        assert_eq!(value["min_word_len"], 1);
        assert_eq!(value["editor_trailing_delimiter"], " ");
    }
}
