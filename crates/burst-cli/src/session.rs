//! Builds a [`CompletionEngine`] from settings and command-line documents.

use burst_complete::{CompletionEngine, RegistryError};
use burst_model::{LoadStatus, TabularSource};
use tracing::{info_span, warn};

use crate::settings::{DocumentSetting, Settings};

/// Outcome of loading one configured document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub document: DocumentSetting,
    pub outcome: Result<LoadStatus, RegistryError>,
    /// Fields the document contributes to the vocabulary.
    pub fields: usize,
}

impl LoadReport {
    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome, Ok(LoadStatus::Loaded))
    }
}

/// Loads configured documents first, then `extra` ones, in order.
///
/// A later document with the same name replaces an earlier one, so command
/// line documents override the settings file.
pub fn build_engine(
    settings: &Settings,
    extra: &[DocumentSetting],
) -> (CompletionEngine, Vec<LoadReport>) {
    let span = info_span!(
        "build_engine",
        documents = settings.documents.len() + extra.len()
    );
    let _guard = span.enter();

    let mut engine = CompletionEngine::new(settings.completion.clone());
    let mut reports = Vec::new();
    for document in settings.documents.iter().chain(extra) {
        let outcome = engine.load_document(
            &document.name,
            &document.path,
            document.has_header_row,
            document.kind,
        );
        match &outcome {
            Ok(status) if status.is_absent() => {
                warn!(
                    document = %document.name,
                    path = %document.path.display(),
                    ?status,
                    "document has no fields"
                );
            }
            Ok(_) => {}
            Err(error) => warn!(%error, "document skipped"),
        }
        let fields = match outcome {
            Ok(_) => engine
                .registry()
                .document(&document.name)
                .map_or(0, TabularSource::field_count),
            Err(_) => 0,
        };
        reports.push(LoadReport {
            document: document.clone(),
            outcome,
            fields,
        });
    }
    (engine, reports)
}
