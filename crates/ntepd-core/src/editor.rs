//! Editor controller
//!
//! Owns the draft buffer, the note list cache, the deletion flow, the
//! preview string, and the autosave slot, and speaks the create/update/
//! delete protocol against the collection store. Every transport failure is
//! swallowed here: logged to the diagnostic sink, state left untouched, and
//! nothing propagated to the frontend. The only retry is the next natural
//! edit-and-debounce cycle.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::autosave::{AutosaveScheduler, QUIET_PERIOD};
use crate::cache::NoteListCache;
use crate::delete::DeletionFlow;
use crate::draft::{DraftBuffer, DraftField, PLACEHOLDER_TEXT};
use crate::models::{Note, NoteId, NotePayload};
use crate::render::render_preview;
use crate::sinks::{DiagnosticSink, NotificationSink};
use crate::transport::CollectionTransport;
use crate::util::lock;

/// What a [`Editor::save`] call did, for frontends and tests that want to
/// observe the controller without it ever returning an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// First successful save of this draft; the store assigned an identity.
    Created,
    /// Update of an already-persisted draft.
    Saved,
    /// Empty or placeholder body; no network call was made.
    Skipped,
    /// The draft was replaced while the request was in flight; the response
    /// was discarded.
    Stale,
    /// Transport failure; logged, draft left exactly as it was.
    Failed,
}

struct EditorInner<T> {
    transport: T,
    notifier: Arc<dyn NotificationSink>,
    diagnostics: Arc<dyn DiagnosticSink>,
    draft: Mutex<DraftBuffer>,
    cache: Mutex<NoteListCache>,
    deletion: Mutex<DeletionFlow>,
    preview: Mutex<String>,
    autosave: AutosaveScheduler,
}

/// The note lifecycle and synchronization controller.
///
/// Cheap to clone (shared state behind an `Arc`); the autosave timer holds a
/// clone so a quiet period can fire a save without the frontend's
/// involvement. Must be driven from within a Tokio runtime.
pub struct Editor<T: CollectionTransport> {
    inner: Arc<EditorInner<T>>,
}

impl<T: CollectionTransport> Clone for Editor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: CollectionTransport> Editor<T> {
    /// Build an editor with the standard 10 second autosave quiet period.
    ///
    /// Starts on a fresh, unsaved draft; call [`Self::refresh_notes`] to
    /// populate the sidebar list.
    pub fn new(
        transport: T,
        notifier: Arc<dyn NotificationSink>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self::with_quiet_period(transport, notifier, diagnostics, QUIET_PERIOD)
    }

    /// Build an editor with a custom quiet period. Intended for tests.
    pub fn with_quiet_period(
        transport: T,
        notifier: Arc<dyn NotificationSink>,
        diagnostics: Arc<dyn DiagnosticSink>,
        quiet_period: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(EditorInner {
                transport,
                notifier,
                diagnostics,
                draft: Mutex::new(DraftBuffer::new()),
                cache: Mutex::new(NoteListCache::new()),
                deletion: Mutex::new(DeletionFlow::new()),
                preview: Mutex::new(render_preview("")),
                autosave: AutosaveScheduler::new(quiet_period),
            }),
        }
    }

    /// Discard the current draft and start a new, unsaved one.
    ///
    /// Unsaved edits are dropped without warning; the pending autosave slot
    /// is cleared so a stale timer cannot fire against the new draft.
    pub fn new_note(&self) {
        self.inner.autosave.clear();
        lock(&self.inner.draft).new_draft();
        self.update_preview();
    }

    /// Replace the draft with an existing note, discarding unsaved edits.
    pub fn open_note(&self, note: Note) {
        self.inner.autosave.clear();
        lock(&self.inner.draft).load_draft(note);
        self.update_preview();
    }

    /// Apply a keystroke-level edit to the named draft field.
    ///
    /// Body edits re-render the preview synchronously; every edit (re)arms
    /// the autosave slot.
    pub fn edit(&self, field: DraftField, value: &str) {
        lock(&self.inner.draft).edit(field, value);
        if field == DraftField::Body {
            self.update_preview();
        }
        self.arm_autosave();
    }

    /// Persist the current draft: create when unsaved, update by id when
    /// already persisted.
    ///
    /// An empty or placeholder body suppresses the call entirely, so
    /// blur- and timer-triggered saves never persist placeholder notes. A
    /// response that arrives after the draft was replaced is discarded
    /// without touching the new draft.
    pub async fn save(&self) -> SaveOutcome {
        let snapshot = lock(&self.inner.draft).snapshot();
        if snapshot.body_text.is_empty() || snapshot.body_text == PLACEHOLDER_TEXT {
            return SaveOutcome::Skipped;
        }

        let payload = NotePayload::from_draft(&snapshot.title_text, &snapshot.body_text);
        let was_new = snapshot.identity.is_none();
        let result = match snapshot.identity {
            Some(id) => self.inner.transport.update(id, payload).await,
            None => self.inner.transport.create(payload).await,
        };

        match result {
            Ok(saved) => {
                let adopted = lock(&self.inner.draft).adopt_identity(saved, snapshot.epoch);
                // The store did mutate either way; the wholesale refresh is
                // idempotent and safe even for a stale save.
                self.refresh_notes().await;
                if !adopted {
                    return SaveOutcome::Stale;
                }
                if was_new {
                    self.inner.notifier.notify("Created a new note!");
                    SaveOutcome::Created
                } else {
                    self.inner.notifier.notify("Saved!");
                    SaveOutcome::Saved
                }
            }
            Err(error) => {
                self.inner.diagnostics.log("save", &error);
                SaveOutcome::Failed
            }
        }
    }

    /// Delete a note by id. On success the note list is refreshed and, when
    /// the deleted note is the one being edited, the draft resets to a new
    /// unsaved one. Returns whether the delete went through.
    pub async fn remove(&self, id: NoteId) -> bool {
        match self.inner.transport.delete(id).await {
            Ok(()) => {
                self.refresh_notes().await;
                let is_current =
                    lock(&self.inner.draft).identity().map(|note| note.id) == Some(id);
                if is_current {
                    self.inner.autosave.clear();
                    lock(&self.inner.draft).new_draft();
                    self.update_preview();
                }
                true
            }
            Err(error) => {
                self.inner.diagnostics.log("delete", &error);
                false
            }
        }
    }

    /// Re-fetch the full collection and replace the cached list wholesale.
    /// On failure the previous list stays available.
    pub async fn refresh_notes(&self) {
        match self.inner.transport.list().await {
            Ok(notes) => lock(&self.inner.cache).replace(notes),
            Err(error) => self.inner.diagnostics.log("list", &error),
        }
    }

    /// Arm deletion for `note`, replacing any previously armed target.
    pub fn arm_delete(&self, note: Note) {
        lock(&self.inner.deletion).arm(note);
    }

    /// Disarm the pending deletion with no side effects.
    pub fn cancel_delete(&self) {
        lock(&self.inner.deletion).cancel();
    }

    /// Confirm the armed deletion: issue the delete and emit the
    /// notification naming the target. A no-op when nothing is armed.
    pub async fn confirm_delete(&self) {
        let Some(target) = lock(&self.inner.deletion).take() else {
            return;
        };

        let label = target.display_title().to_string();
        self.remove(target.id).await;
        self.inner.notifier.notify(&format!("Deleted note \"{label}\""));
    }

    /// The persisted identity of the current draft, if any.
    #[must_use]
    pub fn current_note(&self) -> Option<Note> {
        lock(&self.inner.draft).identity().cloned()
    }

    #[must_use]
    pub fn title_text(&self) -> String {
        lock(&self.inner.draft).title_text().to_string()
    }

    #[must_use]
    pub fn body_text(&self) -> String {
        lock(&self.inner.draft).body_text().to_string()
    }

    /// The preview HTML as of the last body edit.
    #[must_use]
    pub fn preview_html(&self) -> String {
        lock(&self.inner.preview).clone()
    }

    /// The cached note list in store order.
    #[must_use]
    pub fn notes(&self) -> Vec<Note> {
        lock(&self.inner.cache).notes().to_vec()
    }

    /// Look up a cached note by id.
    #[must_use]
    pub fn find_note(&self, id: NoteId) -> Option<Note> {
        lock(&self.inner.cache).find(id).cloned()
    }

    /// The note currently armed for deletion, if any.
    #[must_use]
    pub fn pending_deletion(&self) -> Option<Note> {
        lock(&self.inner.deletion).armed().cloned()
    }

    /// Whether an autosave timer is pending.
    #[must_use]
    pub fn autosave_armed(&self) -> bool {
        self.inner.autosave.is_armed()
    }

    fn arm_autosave(&self) {
        let editor = self.clone();
        self.inner.autosave.arm(async move {
            editor.save().await;
        });
    }

    fn update_preview(&self) {
        let body = lock(&self.inner.draft).body_text().to_string();
        let html = render_preview(&body);
        *lock(&self.inner.preview) = html;
    }
}
