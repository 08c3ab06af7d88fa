//! Draft buffer
//!
//! The single mutable working copy of whichever note is being edited.
//! Exactly one draft exists at a time; switching notes replaces it wholesale
//! and silently discards unsaved edits. An epoch counter, bumped on every
//! replacement, lets in-flight saves detect that the draft they were
//! dispatched for is gone and drop their result.

use crate::models::{Note, NoteId};

/// Placeholder shown in an empty editor.
///
/// This single constant is the empty-content signal for a brand-new draft,
/// the guard that suppresses autosave, and the render input for empty
/// content. Keep one copy; a diverging duplicate silently breaks the save
/// guard.
pub const PLACEHOLDER_TEXT: &str =
    "Start typing your note... (You can use markdown in this editor)";

/// The editable text field named by an edit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Body,
}

/// Point-in-time copy of the draft taken when a save is dispatched.
///
/// The saved epoch is compared on completion; a mismatch means the draft was
/// replaced while the request was in flight and the response must not touch
/// the current draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSnapshot {
    pub identity: Option<NoteId>,
    pub title_text: String,
    pub body_text: String,
    pub epoch: u64,
}

/// The in-progress title/content pair for the note being edited.
///
/// `identity == None` means no note has been saved under this draft yet; the
/// first successful save adopts the store-returned note and subsequent saves
/// become updates by id.
#[derive(Debug, Clone)]
pub struct DraftBuffer {
    identity: Option<Note>,
    title_text: String,
    body_text: String,
    epoch: u64,
}

impl Default for DraftBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftBuffer {
    /// A fresh, unsaved draft, as created at startup.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identity: None,
            title_text: String::new(),
            body_text: PLACEHOLDER_TEXT.to_string(),
            epoch: 0,
        }
    }

    /// Reset to the unsaved state: no identity, empty title, placeholder
    /// body. Bumps the epoch so in-flight saves become stale.
    pub fn new_draft(&mut self) {
        self.identity = None;
        self.title_text.clear();
        self.body_text = PLACEHOLDER_TEXT.to_string();
        self.epoch += 1;
    }

    /// Replace the draft with an existing note's fields. Bumps the epoch.
    pub fn load_draft(&mut self, note: Note) {
        self.title_text = note.title.clone();
        self.body_text = note.content.clone();
        self.identity = Some(note);
        self.epoch += 1;
    }

    /// Mutate the named text field. Never touches identity or epoch; total
    /// over its inputs.
    pub fn edit(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Title => self.title_text = value.to_string(),
            DraftField::Body => self.body_text = value.to_string(),
        }
    }

    /// Adopt a store-returned note as this draft's identity, but only when
    /// the draft has not been replaced since `dispatch_epoch` was captured.
    /// Returns whether the identity was adopted.
    pub fn adopt_identity(&mut self, note: Note, dispatch_epoch: u64) -> bool {
        if self.epoch == dispatch_epoch {
            self.identity = Some(note);
            true
        } else {
            false
        }
    }

    /// Capture the fields a save needs at dispatch time.
    #[must_use]
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            identity: self.identity.as_ref().map(|note| note.id),
            title_text: self.title_text.clone(),
            body_text: self.body_text.clone(),
            epoch: self.epoch,
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Note> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.title_text
    }

    #[must_use]
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}
