//! Rewriting a buffer so an accepted entry becomes a `{{placeholder}}`.

use burst_model::{InsertStyle, Insertion, placeholder};

use crate::options::CompletionOptions;
use crate::word::{byte_index, char_len, current_word_with};

/// Inserts `entry` the way a single-line field does.
///
/// The word being typed (back to the previous space) is replaced by
/// `{{entry}}` and the cursor lands right after `}}`. If the character before
/// the cursor is a space the placeholder is appended there instead and the
/// previous word survives. Text after the cursor is kept as is.
///
/// ```
/// use burst_complete::insert;
///
/// let done = insert("To: jo", 6, "customers.email");
/// assert_eq!(done.text, "To: {{customers.email}}");
/// assert_eq!(done.cursor, 23);
/// ```
pub fn insert(text: &str, cursor: usize, entry: &str) -> Insertion {
    insert_with(&CompletionOptions::default(), InsertStyle::Line, text, cursor, entry)
}

/// Inserts `entry` using the word boundaries and trailing delimiter of
/// `style`.
///
/// Editor buffers follow the placeholder with the configured delimiter and
/// put the cursor after it; line buffers append nothing. Inserting twice at
/// the same spot gives two placeholders. `cursor` is clamped to the text's
/// char length.
pub fn insert_with(
    options: &CompletionOptions,
    style: InsertStyle,
    text: &str,
    cursor: usize,
    entry: &str,
) -> Insertion {
    let span = current_word_with(&options.boundaries(style), text, cursor);
    let mut inserted = placeholder(entry);
    inserted.push_str(options.trailing_delimiter(style));

    let head = &text[..byte_index(text, span.start)];
    let tail = &text[byte_index(text, span.end)..];
    let mut new_text = String::with_capacity(head.len() + inserted.len() + tail.len());
    new_text.push_str(head);
    new_text.push_str(&inserted);
    new_text.push_str(tail);

    Insertion {
        text: new_text,
        cursor: span.start + char_len(&inserted),
    }
}
