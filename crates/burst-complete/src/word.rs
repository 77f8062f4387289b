//! Locating the word being typed at the cursor.
//!
//! All offsets are char offsets. A cursor past the end of the text is a
//! caller error; it is clamped to the text length (and logged at debug)
//! rather than producing a span that points outside the buffer.

use std::collections::BTreeSet;

use burst_model::CurrentWordSpan;
use tracing::debug;

use crate::options::DEFAULT_TERMINATORS;

/// What separates words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Only U+0020. Single-line fields split this way.
    Space,
    /// Any Unicode whitespace, newlines included.
    AnyWhitespace,
}

/// Separator class plus the terminator set for one buffer flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBoundaries {
    separator: Separator,
    terminators: BTreeSet<char>,
}

impl Default for WordBoundaries {
    fn default() -> Self {
        Self::new(Separator::AnyWhitespace, DEFAULT_TERMINATORS.chars())
    }
}

impl WordBoundaries {
    pub fn new(separator: Separator, terminators: impl IntoIterator<Item = char>) -> Self {
        Self {
            separator,
            terminators: terminators.into_iter().collect(),
        }
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn is_separator(&self, ch: char) -> bool {
        match self.separator {
            Separator::Space => ch == ' ',
            Separator::AnyWhitespace => ch.is_whitespace(),
        }
    }

    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }
}

/// Current word using the default (multi-line editor) boundaries.
///
/// See [`current_word_with`].
pub fn current_word(text: &str, cursor: usize) -> CurrentWordSpan {
    current_word_with(&WordBoundaries::default(), text, cursor)
}

/// Finds the word ending at `cursor`.
///
/// The word runs back from the cursor to just after the nearest separator
/// (or the start of the text). It is empty when the cursor sits right after a
/// separator or at offset 0. A word that contains a terminator anywhere is
/// not a query: the result is the empty span at the cursor, so `"a,b"` with
/// the cursor at 3 yields an empty word.
///
/// `cursor` is clamped to the text's char length.
pub fn current_word_with(boundaries: &WordBoundaries, text: &str, cursor: usize) -> CurrentWordSpan {
    let cursor = clamp_cursor(text, cursor);
    let prefix = &text[..byte_index(text, cursor)];
    let mut start = cursor;
    for ch in prefix.chars().rev() {
        if boundaries.is_separator(ch) {
            break;
        }
        if boundaries.is_terminator(ch) {
            return CurrentWordSpan::empty_at(cursor);
        }
        start -= 1;
    }
    CurrentWordSpan { start, end: cursor }
}

/// The text covered by `span`.
pub fn span_text(text: &str, span: CurrentWordSpan) -> &str {
    &text[byte_index(text, span.start)..byte_index(text, span.end)]
}

/// Clamps a char offset to `[0, char_len(text)]`.
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let len = char_len(text);
    if cursor > len {
        debug!(cursor, len, "cursor past end of buffer, clamping");
        len
    } else {
        cursor
    }
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the char at `offset`, or `text.len()` past the end.
pub(crate) fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(index, _)| index)
}
