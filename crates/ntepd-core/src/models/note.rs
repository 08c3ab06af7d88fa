//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Label substituted for an empty title when a note is saved or displayed.
///
/// Titles are normalized at save time only; an empty title stays empty at
/// rest.
pub const UNTITLED_LABEL: &str = "Untitled Note";

/// A unique identifier for a note, assigned by the collection store on
/// creation and immutable thereafter. A draft that has never been saved has
/// no id at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw store-assigned id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw numeric value as assigned by the store.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A persisted note as returned by the collection store.
///
/// The store is authoritative: unknown response fields are ignored and a
/// missing `content` decodes as empty, matching stores that omit the body
/// from list summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier
    pub id: NoteId,
    /// Title; may be empty
    #[serde(default)]
    pub title: String,
    /// Markdown source
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Title to show in lists and notifications: the stored title, or the
    /// default label when it is empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_LABEL
        } else {
            &self.title
        }
    }
}

/// Request body for create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

impl NotePayload {
    /// Build the save payload from the draft's raw text fields.
    ///
    /// The title is trimmed and falls back to [`UNTITLED_LABEL`] when empty;
    /// the content is carried verbatim.
    #[must_use]
    pub fn from_draft(title_text: &str, body_text: &str) -> Self {
        let trimmed = title_text.trim();
        let title = if trimmed.is_empty() {
            UNTITLED_LABEL.to_string()
        } else {
            trimmed.to_string()
        };

        Self {
            title,
            content: body_text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn note_id_roundtrips_through_display_and_parse() {
        let id = NoteId::new(42);
        let parsed: NoteId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_parse_rejects_garbage() {
        assert!("not-a-number".parse::<NoteId>().is_err());
    }

    #[test]
    fn note_decodes_with_missing_content_and_extra_fields() {
        let note: Note = serde_json::from_str(
            r#"{"id": 7, "title": "Shopping", "updated_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(note.id, NoteId::new(7));
        assert_eq!(note.title, "Shopping");
        assert_eq!(note.content, "");
    }

    #[test]
    fn display_title_falls_back_to_default_label() {
        let untitled = Note {
            id: NoteId::new(1),
            title: String::new(),
            content: "body".to_string(),
        };
        assert_eq!(untitled.display_title(), UNTITLED_LABEL);

        let titled = Note {
            title: "Shopping".to_string(),
            ..untitled
        };
        assert_eq!(titled.display_title(), "Shopping");
    }

    #[test]
    fn payload_trims_title_and_defaults_when_empty() {
        let payload = NotePayload::from_draft("  Groceries  ", "milk");
        assert_eq!(payload.title, "Groceries");
        assert_eq!(payload.content, "milk");

        let untitled = NotePayload::from_draft("   ", "milk");
        assert_eq!(untitled.title, UNTITLED_LABEL);
    }

    #[test]
    fn payload_keeps_content_verbatim() {
        let payload = NotePayload::from_draft("t", "  spaced body  \n");
        assert_eq!(payload.content, "  spaced body  \n");
    }
}
