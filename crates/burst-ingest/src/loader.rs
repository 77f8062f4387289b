//! Tabular source loading.
//!
//! Sources are split naively: lines on `\n`, fields on `,`. Quoted fields
//! containing commas or newlines are not understood; a quoted `"Doe, Jane"`
//! header becomes two fields. Callers relying on quoting will see extra
//! columns.

use std::fs;
use std::path::Path;

use burst_model::{LoadStatus, SourceKind, TabularSource};
use tracing::{debug, info, warn};

use crate::error::IngestError;

pub const FIELD_DELIMITER: char = ',';

/// Loads the file at `path` as a tabular source.
///
/// A path that does not name a readable file yields the
/// [`LoadStatus::MissingSource`] sentinel, and a file with zero lines yields
/// [`LoadStatus::EmptySource`]. Neither is an error: the caller checks
/// [`TabularSource::is_absent`] and tells the user.
pub fn load_source(path: &Path, has_header_row: bool, kind: SourceKind) -> TabularSource {
    let text = match read_source_text(path) {
        Ok(text) => text,
        Err(IngestError::NotFound { .. }) => {
            info!(path = %path.display(), "source does not exist");
            return TabularSource::absent(kind, LoadStatus::MissingSource)
                .with_origin(path);
        }
        Err(error) => {
            warn!(%error, "source is not readable");
            return TabularSource::absent(kind, LoadStatus::MissingSource)
                .with_origin(path);
        }
    };
    let source = parse_source(&text, has_header_row, kind).with_origin(path);
    info!(
        path = %path.display(),
        kind = source.kind().label(),
        status = ?source.status(),
        fields = source.field_count(),
        records = source.records().len(),
        "loaded tabular source"
    );
    source
}

/// Reads a source file as text.
///
/// Invalid UTF-8 is replaced rather than rejected and a leading byte-order
/// mark is dropped.
pub fn read_source_text(path: &Path) -> Result<String, IngestError> {
    let bytes = fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.trim_start_matches('\u{feff}').to_string())
}

/// Parses already-read text into a tabular source.
///
/// With a header row, the first line supplies the field names and the rest
/// are records. Without one, fields are the positional names `"0".."n-1"`,
/// `n` being the column count of the first line, and every line is a record.
pub fn parse_source(text: &str, has_header_row: bool, kind: SourceKind) -> TabularSource {
    let lines = split_lines(text);
    let Some(first) = lines.first() else {
        debug!("source has no lines");
        return TabularSource::absent(kind, LoadStatus::EmptySource);
    };

    let header = split_fields(first);
    if has_header_row {
        let fields = header.into_iter().map(str::to_string).collect();
        let records = lines[1..].iter().map(|line| (*line).to_string()).collect();
        TabularSource::new(kind, fields, records)
    } else {
        let fields = (0..header.len()).map(|index| index.to_string()).collect();
        let records = lines.iter().map(|line| (*line).to_string()).collect();
        TabularSource::new(kind, fields, records)
    }
}

/// Splits one line on the field delimiter. No quote handling.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}

/// Splits text into lines with their terminators removed.
///
/// A trailing newline closes the last line rather than opening an empty one,
/// so `"a\nb\n"` has two lines and `""` has none.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').map(strip_line_terminator).collect()
}

fn strip_line_terminator(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_handles_terminators() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_fields_keeps_empty_cells() {
        assert_eq!(split_fields("a,,b,"), vec!["a", "", "b", ""]);
        assert_eq!(split_fields(""), vec![""]);
    }
}
