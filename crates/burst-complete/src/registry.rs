//! Named documents and the vocabulary derived from them.

use std::sync::Arc;

use burst_model::{LoadStatus, SuggestionVocabulary, TabularSource, vocabulary_entry};
use indexmap::IndexMap;
use tracing::{debug, info};

/// Rejected document names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("document name must not be empty")]
    EmptyName,

    #[error("document name '{name}' must not contain whitespace")]
    WhitespaceInName { name: String },
}

/// Checks the precondition on document names: non-empty, no whitespace.
///
/// Names end up inside placeholders typed as single words, so a space would
/// make the entry impossible to query.
pub fn validate_document_name(name: &str) -> Result<(), RegistryError> {
    if name.trim().is_empty() {
        return Err(RegistryError::EmptyName);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(RegistryError::WhitespaceInName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Documents keyed by user-chosen name, in registration order.
///
/// Every change rebuilds the vocabulary in full and publishes it as a new
/// `Arc` snapshot. Readers holding an older snapshot keep a complete older
/// version; nobody sees a partial rebuild.
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    documents: IndexMap<String, TabularSource>,
    vocabulary: Arc<SuggestionVocabulary>,
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self {
            documents: IndexMap::new(),
            vocabulary: Arc::new(SuggestionVocabulary::default()),
        }
    }

    /// Stores `source` under `name`, replacing any document already there.
    ///
    /// A replaced document keeps its position in the registration order; its
    /// vocabulary block is rebuilt from the new source only. Absent sources
    /// are stored too (a failed reload clears that name's suggestions) and
    /// contribute no entries. An invalid name leaves the registry untouched.
    pub fn register(
        &mut self,
        name: &str,
        source: TabularSource,
    ) -> Result<LoadStatus, RegistryError> {
        validate_document_name(name)?;
        let status = source.status();
        let fields = source.field_count();
        if self.documents.insert(name.to_string(), source).is_some() {
            info!(document = name, fields, "replaced document");
        } else {
            info!(document = name, fields, "registered document");
        }
        self.rebuild();
        Ok(status)
    }

    pub fn document(&self, name: &str) -> Option<&TabularSource> {
        self.documents.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn documents(&self) -> impl Iterator<Item = (&str, &TabularSource)> {
        self.documents
            .iter()
            .map(|(name, source)| (name.as_str(), source))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The current vocabulary snapshot.
    ///
    /// Cheap to call; consumers should fetch a fresh snapshot per query
    /// rather than caching one.
    pub fn vocabulary(&self) -> Arc<SuggestionVocabulary> {
        Arc::clone(&self.vocabulary)
    }

    /// Recomputes the vocabulary from the registered documents.
    ///
    /// Always equal to the published snapshot's entries.
    pub fn all_vocabulary(&self) -> SuggestionVocabulary {
        build_vocabulary(self.vocabulary.version(), self.documents())
    }

    fn rebuild(&mut self) {
        let version = self.vocabulary.version() + 1;
        let vocabulary = build_vocabulary(version, self.documents());
        debug!(version, entries = vocabulary.len(), "rebuilt vocabulary");
        self.vocabulary = Arc::new(vocabulary);
    }
}

/// Flattens documents into `name.field` entries: documents in the given
/// order, fields in source order. Absent sources add nothing.
pub fn build_vocabulary<'a>(
    version: u64,
    documents: impl IntoIterator<Item = (&'a str, &'a TabularSource)>,
) -> SuggestionVocabulary {
    let entries = documents
        .into_iter()
        .flat_map(|(name, source)| {
            source
                .fields()
                .unwrap_or_default()
                .iter()
                .map(move |field| vocabulary_entry(name, field))
        })
        .collect();
    SuggestionVocabulary::new(version, entries)
}

#[cfg(test)]
mod tests {
    use burst_model::SourceKind;

    use super::*;

    fn source(fields: &[&str]) -> TabularSource {
        TabularSource::new(
            SourceKind::Generic,
            fields.iter().map(|f| (*f).to_string()).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn vocabulary_follows_registration_then_field_order() {
        let mut registry = DocumentRegistry::new();
        registry.register("customers", source(&["name", "email"])).unwrap();
        registry.register("orders", source(&["id"])).unwrap();
        assert_eq!(
            registry.vocabulary().entries(),
            &["customers.name", "customers.email", "orders.id"]
        );
    }

    #[test]
    fn reregistering_replaces_in_place() {
        let mut registry = DocumentRegistry::new();
        registry.register("customers", source(&["name", "email"])).unwrap();
        registry.register("orders", source(&["id"])).unwrap();
        registry.register("customers", source(&["phone"])).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.vocabulary().entries(),
            &["customers.phone", "orders.id"]
        );
    }

    #[test]
    fn invalid_names_leave_registry_untouched() {
        let mut registry = DocumentRegistry::new();
        registry.register("customers", source(&["email"])).unwrap();
        let before = registry.vocabulary();

        assert_eq!(
            registry.register("", source(&["x"])),
            Err(RegistryError::EmptyName)
        );
        assert_eq!(
            registry.register("   ", source(&["x"])),
            Err(RegistryError::EmptyName)
        );
        assert!(matches!(
            registry.register(" customers", source(&["x"])),
            Err(RegistryError::WhitespaceInName { .. })
        ));
        assert_eq!(
            registry.register("customers\t", source(&["x"])),
            Err(RegistryError::WhitespaceInName {
                name: "customers\t".to_string()
            })
        );
        assert!(matches!(
            registry.register("my list", source(&["x"])),
            Err(RegistryError::WhitespaceInName { .. })
        ));

        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&before, &registry.vocabulary()));
    }

    #[test]
    fn snapshots_are_versioned_and_stable() {
        let mut registry = DocumentRegistry::new();
        let empty = registry.vocabulary();
        registry.register("customers", source(&["email"])).unwrap();
        let first = registry.vocabulary();
        registry.register("orders", source(&["id"])).unwrap();

        assert_eq!(empty.version(), 0);
        assert!(empty.is_empty());
        assert_eq!(first.version(), 1);
        assert_eq!(first.entries(), &["customers.email"]);
        assert_eq!(registry.vocabulary().version(), 2);
        assert_eq!(registry.all_vocabulary(), *registry.vocabulary());
    }

    #[test]
    fn absent_source_contributes_nothing() {
        let mut registry = DocumentRegistry::new();
        registry.register("customers", source(&["email"])).unwrap();
        let status = registry
            .register(
                "customers",
                TabularSource::absent(SourceKind::Generic, LoadStatus::MissingSource),
            )
            .unwrap();
        assert_eq!(status, LoadStatus::MissingSource);
        assert!(registry.vocabulary().is_empty());
        assert!(registry.document("customers").is_some());
    }
}
