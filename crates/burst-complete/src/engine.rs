//! The facade a UI layer talks to.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use burst_ingest::load_source;
use burst_model::{
    BufferId, InsertStyle, Insertion, LoadStatus, PopupState, SourceKind, SuggestionVocabulary,
    TabularSource,
};
use tracing::{debug, info_span};

use crate::options::CompletionOptions;
use crate::popup::{CompletionPopup, Key, KeyOutcome, Trigger};
use crate::registry::{DocumentRegistry, RegistryError, validate_document_name};

#[derive(Debug, Clone, Default)]
struct BufferCompletion {
    style: InsertStyle,
    popup: CompletionPopup,
}

/// Owns the registry and one popup per buffer.
///
/// Each call fetches the current vocabulary snapshot from the registry, so
/// loading a document is picked up by every buffer on its next keystroke.
/// Buffers never registered with [`Self::register_buffer`] behave as
/// [`InsertStyle::Editor`].
#[derive(Debug, Clone, Default)]
pub struct CompletionEngine {
    registry: DocumentRegistry,
    options: CompletionOptions,
    buffers: HashMap<BufferId, BufferCompletion>,
}

impl CompletionEngine {
    pub fn new(options: CompletionOptions) -> Self {
        Self {
            registry: DocumentRegistry::new(),
            options,
            buffers: HashMap::new(),
        }
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }

    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    /// Declares the widget flavor of a buffer, resetting its popup.
    pub fn register_buffer(&mut self, id: BufferId, style: InsertStyle) {
        self.buffers.insert(
            id,
            BufferCompletion {
                style,
                popup: CompletionPopup::new(),
            },
        );
    }

    pub fn buffer_style(&self, id: BufferId) -> InsertStyle {
        self.buffers
            .get(&id)
            .map_or(InsertStyle::default(), |buffer| buffer.style)
    }

    /// Loads `path` and registers it as `name`.
    ///
    /// The name is checked before touching the file. A missing or empty file
    /// is still registered (replacing any previous document of that name) and
    /// reported through the returned status.
    pub fn load_document(
        &mut self,
        name: &str,
        path: &Path,
        has_header_row: bool,
        kind: SourceKind,
    ) -> Result<LoadStatus, RegistryError> {
        let span = info_span!("load_document", document = name, path = %path.display());
        let _guard = span.enter();
        validate_document_name(name)?;
        let source = load_source(path, has_header_row, kind);
        self.registry.register(name, source)
    }

    /// Registers an already-built source as `name`.
    pub fn register_source(
        &mut self,
        name: &str,
        source: TabularSource,
    ) -> Result<LoadStatus, RegistryError> {
        self.registry.register(name, source)
    }

    pub fn suggestion_vocabulary(&self) -> Arc<SuggestionVocabulary> {
        self.registry.vocabulary()
    }

    /// Re-evaluates a buffer's popup after its text or cursor changed.
    ///
    /// Returns the popup to draw, or `None` when it should be hidden.
    pub fn on_text_changed(
        &mut self,
        id: BufferId,
        text: &str,
        cursor: usize,
    ) -> Option<PopupState> {
        self.update(id, text, cursor, Trigger::Keystroke)
    }

    /// Opens the popup regardless of the word length (explicit shortcut).
    pub fn force_show(&mut self, id: BufferId, text: &str, cursor: usize) -> Option<PopupState> {
        self.update(id, text, cursor, Trigger::ForceShow)
    }

    pub fn popup_state(&self, id: BufferId) -> Option<PopupState> {
        self.buffers.get(&id).and_then(|buffer| buffer.popup.state())
    }

    /// Forwards a key press to the buffer's popup.
    ///
    /// Anything but [`KeyOutcome::PassThrough`] must not reach the buffer.
    pub fn handle_key(&mut self, id: BufferId, key: Key) -> KeyOutcome {
        let Some(buffer) = self.buffers.get_mut(&id) else {
            return KeyOutcome::PassThrough;
        };
        buffer.popup.handle_key(key, &self.options, buffer.style)
    }

    /// Accepts candidate `index` of the buffer's visible popup.
    ///
    /// Returns `None` with nothing changed when the popup is hidden or the
    /// index is out of range.
    pub fn on_accept_candidate(&mut self, id: BufferId, index: usize) -> Option<Insertion> {
        let buffer = self.buffers.get_mut(&id)?;
        let insertion = buffer.popup.accept(index, &self.options, buffer.style);
        if insertion.is_none() {
            debug!(buffer = %id, index, "nothing to accept");
        }
        insertion
    }

    fn update(
        &mut self,
        id: BufferId,
        text: &str,
        cursor: usize,
        trigger: Trigger,
    ) -> Option<PopupState> {
        let vocabulary = self.registry.vocabulary();
        let buffer = self.buffers.entry(id).or_default();
        buffer
            .popup
            .update(&vocabulary, &self.options, text, cursor, trigger)
    }
}
