//! User settings, persisted as TOML.
//!
//! The default file lives in the platform config folder:
//! - macOS: ~/Library/Application Support/com.email-burst.Email-Burst/
//! - Windows: %APPDATA%/email-burst/Email Burst/config/
//! - Linux: ~/.config/emailburst/

use std::fs;
use std::path::{Path, PathBuf};

use burst_complete::CompletionOptions;
use burst_model::{BurstError, SourceKind};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "email-burst";
const APP_NAME: &str = "Email Burst";
const CONFIG_FILENAME: &str = "settings.toml";

/// Settings file contents. Missing sections and keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub completion: CompletionOptions,
    /// Sources loaded before every command.
    #[serde(rename = "document")]
    pub documents: Vec<DocumentSetting>,
}

/// A named source to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSetting {
    pub name: String,
    pub path: PathBuf,
    #[serde(default = "default_has_header_row")]
    pub has_header_row: bool,
    #[serde(default)]
    pub kind: SourceKind,
}

fn default_has_header_row() -> bool {
    true
}

impl DocumentSetting {
    /// Parses a `NAME=PATH` command-line spec.
    pub fn parse_spec(
        spec: &str,
        has_header_row: bool,
        kind: SourceKind,
    ) -> Result<Self, BurstError> {
        let invalid = || BurstError::InvalidDocumentSpec(spec.to_string());
        let (name, path) = spec.split_once('=').ok_or_else(invalid)?;
        if name.is_empty() || path.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            name: name.to_string(),
            path: PathBuf::from(path),
            has_header_row,
            kind,
        })
    }
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Loads the default settings file.
///
/// Falls back to defaults when the file is absent, unreadable or invalid, or
/// when the platform has no config directory.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Settings::default();
    };
    if !path.exists() {
        tracing::info!(path = %path.display(), "no settings file, using defaults");
        return Settings::default();
    }
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(%error, "ignoring settings file, using defaults");
            Settings::default()
        }
    }
}

/// Loads an explicitly named settings file; unlike [`load_settings`] every
/// failure is reported.
pub fn load_settings_from(path: &Path) -> Result<Settings, BurstError> {
    let content = fs::read_to_string(path).map_err(|e| BurstError::io(path, e))?;
    let settings = parse_settings(path, &content)?;
    tracing::info!(path = %path.display(), documents = settings.documents.len(), "loaded settings");
    Ok(settings)
}

pub fn parse_settings(path: &Path, content: &str) -> Result<Settings, BurstError> {
    toml::from_str(content).map_err(|e| BurstError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn render_settings(settings: &Settings) -> Result<String, BurstError> {
    toml::to_string_pretty(settings).map_err(|e| BurstError::Config {
        path: PathBuf::from(CONFIG_FILENAME),
        message: e.to_string(),
    })
}

/// Writes `settings` to `path`, creating parent directories.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<(), BurstError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BurstError::io(parent, e))?;
    }
    let content = render_settings(settings)?;
    fs::write(path, content).map_err(|e| BurstError::io(path, e))?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_spec() {
        let doc = DocumentSetting::parse_spec("customers=lists/c.csv", true, SourceKind::Generic)
            .unwrap();
        assert_eq!(doc.name, "customers");
        assert_eq!(doc.path, PathBuf::from("lists/c.csv"));
        assert!(doc.has_header_row);
    }

    #[test]
    fn rejects_malformed_specs() {
        for spec in ["customers", "=a.csv", "customers="] {
            let err = DocumentSetting::parse_spec(spec, true, SourceKind::Generic).unwrap_err();
            assert!(matches!(err, BurstError::InvalidDocumentSpec(_)), "{spec}");
        }
    }

    #[test]
    fn path_may_contain_equals() {
        let doc =
            DocumentSetting::parse_spec("a=dir=x/a.csv", false, SourceKind::Generic).unwrap();
        assert_eq!(doc.path, PathBuf::from("dir=x/a.csv"));
    }

    #[test]
    fn default_settings_round_trip() {
        let settings = Settings::default();
        let text = render_settings(&settings).unwrap();
        let parsed = parse_settings(Path::new("settings.toml"), &text).unwrap();
        assert_eq!(parsed, settings);
    }
}
