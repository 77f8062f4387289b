//! Inline `{{document.field}}` completion.
//!
//! Loaded sources feed a [`DocumentRegistry`], which publishes a flat
//! vocabulary snapshot. On each keystroke the word before the cursor is
//! located ([`current_word`]), the vocabulary is filtered by substring
//! ([`filter`]) and the popup state of the buffer is updated
//! ([`CompletionPopup`]). Accepting a candidate rewrites the buffer with the
//! placeholder ([`insert`]). [`CompletionEngine`] ties these together behind
//! the interface a UI layer calls.

pub mod engine;
pub mod filter;
pub mod insert;
pub mod options;
pub mod popup;
pub mod registry;
pub mod word;

pub use engine::CompletionEngine;
pub use filter::{filter, filter_limited};
pub use insert::{insert, insert_with};
pub use options::{CompletionOptions, DEFAULT_TERMINATORS};
pub use popup::{CompletionPopup, Key, KeyOutcome, PAGE_SIZE, Trigger};
pub use registry::{DocumentRegistry, RegistryError, build_vocabulary, validate_document_name};
pub use word::{
    Separator, WordBoundaries, char_len, clamp_cursor, current_word, current_word_with, span_text,
};
