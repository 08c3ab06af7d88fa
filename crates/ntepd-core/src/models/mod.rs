//! Data models shared across the editor and transports

pub mod note;
pub mod settings;

pub use note::{Note, NoteId, NotePayload, UNTITLED_LABEL};
pub use settings::ThemeMode;
