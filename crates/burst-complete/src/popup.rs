//! Per-buffer suggestion popup: when it opens, what it lists, which keys it
//! swallows.

use burst_model::{InsertStyle, Insertion, PopupState, SuggestionVocabulary};
use tracing::trace;

use crate::filter::filter_limited;
use crate::insert::insert_with;
use crate::options::CompletionOptions;
use crate::word::{current_word_with, span_text};

/// Rows skipped by `PageUp` / `PageDown`.
pub const PAGE_SIZE: usize = 7;

/// Why the popup is being re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Ordinary edit; opens only for a non-empty word.
    Keystroke,
    /// Explicit shortcut; opens even with an empty word.
    ForceShow,
}

/// Keys the host forwards before applying them to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Tab,
    Escape,
    Backspace,
    Char(char),
}

/// What the host must do with a forwarded key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours: apply the key to the buffer as usual.
    PassThrough,
    /// Swallowed to move the highlight.
    Consumed,
    /// Swallowed; the popup closed without inserting.
    Dismissed,
    /// Swallowed; replace the buffer with this.
    Accepted(Insertion),
}

impl KeyOutcome {
    /// Whether the key must be kept out of the buffer.
    pub fn is_intercepted(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Visible {
    query: String,
    candidates: Vec<String>,
    highlighted: usize,
    /// Buffer snapshot the candidates were computed from.
    text: String,
    cursor: usize,
}

/// `Idle` or `Visible`, for one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionPopup {
    visible: Option<Visible>,
}

impl CompletionPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.is_some()
    }

    /// Snapshot for drawing; `None` while idle.
    pub fn state(&self) -> Option<PopupState> {
        self.visible.as_ref().map(|v| PopupState {
            visible: true,
            query: v.query.clone(),
            candidates: v.candidates.clone(),
            highlighted_index: v.highlighted,
        })
    }

    /// Re-evaluates the popup after the buffer changed.
    ///
    /// Closes when the word is shorter than `min_word_len` (an empty word
    /// included, which covers a terminator before the cursor) unless
    /// `trigger` forces it open, and whenever nothing matches. The highlight
    /// goes back to the first candidate when the query text changed and is
    /// kept otherwise.
    pub fn update(
        &mut self,
        vocabulary: &SuggestionVocabulary,
        options: &CompletionOptions,
        text: &str,
        cursor: usize,
        trigger: Trigger,
    ) -> Option<PopupState> {
        let span = current_word_with(&options.query_boundaries(), text, cursor);
        if trigger == Trigger::Keystroke && span.len() < options.effective_min_word_len() {
            self.close();
            return None;
        }

        let query = span_text(text, span);
        let candidates = filter_limited(vocabulary, query, options.candidate_limit());
        if candidates.is_empty() {
            trace!(query, "no candidates");
            self.close();
            return None;
        }

        let highlighted = match &self.visible {
            Some(previous) if previous.query == query => {
                previous.highlighted.min(candidates.len() - 1)
            }
            _ => 0,
        };
        trace!(query, candidates = candidates.len(), "popup visible");
        self.visible = Some(Visible {
            query: query.to_string(),
            candidates,
            highlighted,
            text: text.to_string(),
            cursor: span.end,
        });
        self.state()
    }

    /// Routes a key through the popup.
    ///
    /// Idle popups pass every key through. Visible popups swallow
    /// navigation, accept (`Enter`, `Tab`) and dismiss (`Escape`) keys;
    /// editing keys pass through and the host calls [`Self::update`] after
    /// applying them.
    pub fn handle_key(
        &mut self,
        key: Key,
        options: &CompletionOptions,
        style: InsertStyle,
    ) -> KeyOutcome {
        let Some(visible) = self.visible.as_ref() else {
            return KeyOutcome::PassThrough;
        };
        let last = visible.candidates.len() - 1;
        let current = visible.highlighted;
        let next = match key {
            Key::Up => current.checked_sub(1).unwrap_or(last),
            Key::Down => {
                if current == last {
                    0
                } else {
                    current + 1
                }
            }
            Key::PageUp => current.saturating_sub(PAGE_SIZE),
            Key::PageDown => (current + PAGE_SIZE).min(last),
            Key::Home => 0,
            Key::End => last,
            Key::Enter | Key::Tab => {
                return self
                    .accept(current, options, style)
                    .map_or(KeyOutcome::Dismissed, KeyOutcome::Accepted);
            }
            Key::Escape => {
                self.close();
                return KeyOutcome::Dismissed;
            }
            Key::Backspace | Key::Char(_) => return KeyOutcome::PassThrough,
        };
        self.highlight(next);
        KeyOutcome::Consumed
    }

    /// Moves the highlight to `index` if it names a candidate.
    pub fn highlight(&mut self, index: usize) -> bool {
        match self.visible.as_mut() {
            Some(visible) if index < visible.candidates.len() => {
                visible.highlighted = index;
                true
            }
            _ => false,
        }
    }

    /// Inserts candidate `index` into the snapshot the popup was built from
    /// and returns to idle.
    ///
    /// Returns `None`, leaving the popup as it was, when idle or when `index`
    /// is out of range.
    pub fn accept(
        &mut self,
        index: usize,
        options: &CompletionOptions,
        style: InsertStyle,
    ) -> Option<Insertion> {
        let visible = self.visible.as_ref()?;
        let entry = visible.candidates.get(index)?;
        let insertion = insert_with(options, style, &visible.text, visible.cursor, entry);
        self.close();
        Some(insertion)
    }

    pub fn close(&mut self) {
        self.visible = None;
    }
}
