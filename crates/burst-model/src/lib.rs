pub mod completion;
pub mod error;
pub mod source;
pub mod vocabulary;

pub use completion::{BufferId, CurrentWordSpan, InsertStyle, Insertion, PopupState};
pub use error::{BurstError, Result};
pub use source::{LoadStatus, SourceKind, TabularSource};
pub use vocabulary::{
    PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, SuggestionVocabulary, placeholder, vocabulary_entry,
};
