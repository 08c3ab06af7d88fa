//! Collaborator sinks supplied by the frontend
//!
//! The editor core never talks to a screen or a log file directly; it emits
//! through these fire-and-forget seams. Implementations must not block and
//! must not fail.

use crate::error::TransportError;

/// Transient user-facing messages ("Saved!", "Deleted note ...").
///
/// Display duration and animation are the sink's concern; the editor never
/// waits on it.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Diagnostic log for swallowed transport failures.
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, context: &str, error: &TransportError);
}

/// Default diagnostic sink backed by `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn log(&self, context: &str, error: &TransportError) {
        tracing::error!(context, %error, "collection store operation failed");
    }
}

/// Key-value preference storage. Used only for the theme, outside the
/// editor core.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}
