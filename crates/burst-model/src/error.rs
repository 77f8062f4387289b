use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BurstError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("invalid document spec '{0}' (expected NAME=PATH)")]
    InvalidDocumentSpec(String),
}

impl BurstError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BurstError>;
