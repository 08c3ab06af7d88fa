//! Error types for ntepd-core

use thiserror::Error;

/// Failures surfaced by a collection transport.
///
/// Every variant is non-fatal: the controller logs it through the diagnostic
/// sink and aborts the operation with no partial state mutation. There is no
/// retry policy beyond the next natural edit-and-debounce cycle.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network/connectivity failure before a response was received
    #[error("Transport request failed: {0}")]
    Connection(String),

    /// Non-success response from the collection store
    #[error("Collection store error: {0}")]
    Api(String),

    /// Transport was constructed with an unusable configuration
    #[error("Invalid transport configuration: {0}")]
    InvalidConfiguration(String),

    /// Response body could not be decoded
    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
}
