//! Loaded tabular sources.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Descriptive kind of a loaded source.
///
/// Purely informational: a distribution list loads and contributes to the
/// vocabulary exactly like any other source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Generic,
    DistributionList,
}

impl SourceKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::DistributionList => "distribution list",
        }
    }
}

/// How a load action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Loaded,
    /// The path does not name an existing, readable file.
    MissingSource,
    /// The file exists but holds zero lines.
    EmptySource,
}

impl LoadStatus {
    /// True for both sentinel outcomes.
    pub const fn is_absent(self) -> bool {
        !matches!(self, Self::Loaded)
    }
}

/// A parsed comma-delimited source: its field names and raw data rows.
///
/// `fields` is `None` for the missing/empty sentinel. Once built a source is
/// never mutated; reloading produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabularSource {
    kind: SourceKind,
    origin: Option<PathBuf>,
    status: LoadStatus,
    fields: Option<Vec<String>>,
    records: Vec<String>,
}

impl TabularSource {
    /// A successfully loaded source.
    pub fn new(kind: SourceKind, fields: Vec<String>, records: Vec<String>) -> Self {
        Self {
            kind,
            origin: None,
            status: LoadStatus::Loaded,
            fields: Some(fields),
            records,
        }
    }

    /// The sentinel for a missing or empty resource: no fields, no records.
    ///
    /// Passing [`LoadStatus::Loaded`] is treated as [`LoadStatus::EmptySource`].
    pub fn absent(kind: SourceKind, status: LoadStatus) -> Self {
        let status = if status.is_absent() {
            status
        } else {
            LoadStatus::EmptySource
        };
        Self {
            kind,
            origin: None,
            status,
            fields: None,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_origin(mut self, path: impl Into<PathBuf>) -> Self {
        self.origin = Some(path.into());
        self
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_absent(&self) -> bool {
        self.fields.is_none()
    }

    /// Field names, or `None` for the sentinel.
    ///
    /// Callers must check for `None` before offering fields as suggestions.
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    /// Number of fields; zero for the sentinel.
    pub fn field_count(&self) -> usize {
        self.fields.as_ref().map_or(0, Vec::len)
    }

    /// Data rows, header excluded when the source had one.
    pub fn records(&self) -> &[String] {
        &self.records
    }
}
