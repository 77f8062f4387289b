//! Loading comma-delimited sources into [`burst_model::TabularSource`].

pub mod error;
pub mod loader;

pub use error::IngestError;
pub use loader::{FIELD_DELIMITER, load_source, parse_source, read_source_text, split_fields};
