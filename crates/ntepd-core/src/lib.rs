//! ntepd-core - Core library for ntepd
//!
//! This crate contains the note lifecycle and synchronization controller
//! behind the ntepd editor: the draft buffer, the debounced autosave
//! scheduler, the create/update/delete protocol against the remote
//! collection store, the note list cache, the deletion confirmation flow,
//! and the markdown preview contract. Frontends supply the transport and
//! the notification/diagnostic sinks.

pub mod autosave;
pub mod cache;
pub mod delete;
pub mod draft;
pub mod editor;
pub mod error;
pub mod models;
pub mod render;
pub mod sinks;
pub mod transport;
mod util;

pub use draft::{DraftBuffer, DraftField, PLACEHOLDER_TEXT};
pub use editor::{Editor, SaveOutcome};
pub use error::TransportError;
pub use models::{Note, NoteId, NotePayload, UNTITLED_LABEL};
pub use transport::CollectionTransport;
