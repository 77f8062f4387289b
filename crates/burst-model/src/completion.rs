//! Value types exchanged between the completion engine and its host UI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Char-offset span of the in-progress word ending at the cursor.
///
/// Always satisfies `start <= end`, and `end` equals the (clamped) cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CurrentWordSpan {
    pub start: usize,
    pub end: usize,
}

impl CurrentWordSpan {
    pub const fn empty_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Identifies one text-entry widget in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BufferId(pub u32);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer#{}", self.0)
    }
}

/// Which widget flavor a buffer belongs to.
///
/// The two flavors disagree on whether a delimiter follows the inserted
/// placeholder; each keeps its own behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertStyle {
    /// Single-line header field (To:, Subject:). Words split on spaces only,
    /// nothing is appended after `}}`.
    Line,
    /// Multi-line body editor. Words split on any whitespace, the configured
    /// trailing delimiter follows `}}`.
    #[default]
    Editor,
}

/// New buffer contents after accepting a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    pub text: String,
    /// Char offset just past the inserted placeholder (and delimiter, if any).
    pub cursor: usize,
}

/// What the host should draw for a buffer's suggestion popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupState {
    pub visible: bool,
    pub query: String,
    pub candidates: Vec<String>,
    pub highlighted_index: usize,
}

impl PopupState {
    pub fn highlighted(&self) -> Option<&str> {
        self.candidates
            .get(self.highlighted_index)
            .map(String::as_str)
    }
}
