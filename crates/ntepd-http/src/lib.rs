//! HTTP collection transport for the ntepd editor.
//!
//! Speaks the `/api/notes` JSON protocol of the note store:
//! `GET /api/notes`, `POST /api/notes`, `PUT /api/notes/{id}`,
//! `DELETE /api/notes/{id}`.

use reqwest::StatusCode;
use serde::Deserialize;

use ntepd_core::{CollectionTransport, Note, NoteId, NotePayload, TransportError};

/// Collection transport over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCollectionStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCollectionStore {
    /// Build a store client against `base_url` (scheme required, trailing
    /// slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let base_url = normalize_base_url(base_url.into())?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(connection_error)?;

        Ok(Self { base_url, client })
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.base_url)
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/api/notes/{id}", self.base_url)
    }
}

impl CollectionTransport for HttpCollectionStore {
    async fn list(&self) -> Result<Vec<Note>, TransportError> {
        let response = self
            .client
            .get(self.notes_url())
            .send()
            .await
            .map_err(connection_error)?;

        let response = expect_success(response).await?;
        response.json::<Vec<Note>>().await.map_err(payload_error)
    }

    async fn create(&self, payload: NotePayload) -> Result<Note, TransportError> {
        let response = self
            .client
            .post(self.notes_url())
            .json(&payload)
            .send()
            .await
            .map_err(connection_error)?;

        let response = expect_success(response).await?;
        response.json::<Note>().await.map_err(payload_error)
    }

    async fn update(&self, id: NoteId, payload: NotePayload) -> Result<Note, TransportError> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(&payload)
            .send()
            .await
            .map_err(connection_error)?;

        let response = expect_success(response).await?;
        response.json::<Note>().await.map_err(payload_error)
    }

    async fn delete(&self, id: NoteId) -> Result<(), TransportError> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(connection_error)?;

        expect_success(response).await?;
        Ok(())
    }
}

async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TransportError::Api(parse_api_error(status, &body)))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_base_url(raw: String) -> Result<String, TransportError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TransportError::InvalidConfiguration(
            "base URL must not be empty".to_string(),
        ));
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.trim_end_matches('/').to_string())
    } else {
        Err(TransportError::InvalidConfiguration(
            "base URL must include http:// or https://".to_string(),
        ))
    }
}

/// Truncate a response body for error messages.
fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

fn connection_error(error: reqwest::Error) -> TransportError {
    TransportError::Connection(error.to_string())
}

fn payload_error(error: reqwest::Error) -> TransportError {
    TransportError::InvalidPayload(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url(String::new()).is_err());
        assert!(normalize_base_url("   ".to_string()).is_err());
        assert!(normalize_base_url("notes.example.com".to_string()).is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://notes.example.com/".to_string()).unwrap(),
            "https://notes.example.com"
        );
    }

    #[test]
    fn endpoints_target_the_notes_collection() {
        let store = HttpCollectionStore::new("http://localhost:3000/").unwrap();
        assert_eq!(store.notes_url(), "http://localhost:3000/api/notes");
        assert_eq!(
            store.note_url(NoteId::new(7)),
            "http://localhost:3000/api/notes/7"
        );
    }

    #[test]
    fn parse_api_error_prefers_json_message() {
        let message = parse_api_error(
            StatusCode::NOT_FOUND,
            r#"{"error": "note not found"}"#,
        );
        assert_eq!(message, "note not found (404)");

        let message = parse_api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message": " store unavailable "}"#,
        );
        assert_eq!(message, "store unavailable (500)");
    }

    #[test]
    fn parse_api_error_falls_back_to_body_text_or_status() {
        assert_eq!(
            parse_api_error(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down (502)"
        );
        assert_eq!(parse_api_error(StatusCode::BAD_GATEWAY, "   "), "HTTP 502");
    }

    #[test]
    fn compact_text_truncates_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(compact_text(&long).len(), 180);
    }
}
