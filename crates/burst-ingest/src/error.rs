use std::path::PathBuf;

/// Failures while reading a source file.
///
/// These never leave the crate's public loading API: [`crate::load_source`]
/// folds them into the missing-source sentinel.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("source not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
