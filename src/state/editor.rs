//! Edit buffer for the file content editor modal.
//!
//! Holds the in-progress text plus a pristine snapshot so the editor can
//! offer reset-to-original, and the inline validation errors the netlist
//! save path produces. At most one modal's worth of edit state exists at a
//! time; `clear` runs whenever the editor closes.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// State backing the open content editor, provided via context.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    /// In-progress edit buffer bound to the textarea.
    pub content: String,
    /// Content as fetched, used by reset-to-original.
    pub original: String,
    /// Inline validation/save errors shown in the modal.
    pub errors: Vec<String>,
    /// A save round-trip is in flight.
    pub saving: bool,
}

impl EditorState {
    /// Load freshly fetched content into the buffer and snapshot.
    pub fn load(&mut self, content: String) {
        self.original.clone_from(&content);
        self.content = content;
        self.errors.clear();
        self.saving = false;
    }

    /// Discard edits and restore the fetched snapshot.
    pub fn reset(&mut self) {
        self.content.clone_from(&self.original);
        self.errors.clear();
    }

    /// Whether the buffer differs from the fetched snapshot.
    pub fn is_dirty(&self) -> bool {
        self.content != self.original
    }

    /// Drop all edit state when the modal closes.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
