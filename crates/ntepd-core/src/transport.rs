//! Collection transport trait
//!
//! The remote note collection behind the editor: an ordered store with
//! create/update/delete by id and a full-list fetch. Futures are `Send` so
//! a save dispatched from the autosave timer task can hold the transport
//! across the request.

use std::future::Future;

use crate::error::TransportError;
use crate::models::{Note, NoteId, NotePayload};

/// Request/response access to the remote note collection.
///
/// The store is single-tenant and authoritative: it assigns ids on create
/// and decides list order. All operations may fail with a
/// [`TransportError`]; callers treat every failure as non-fatal.
pub trait CollectionTransport: Send + Sync + 'static {
    /// Fetch the full collection in store order.
    fn list(&self) -> impl Future<Output = Result<Vec<Note>, TransportError>> + Send;

    /// Create a note; the store assigns and returns its identity.
    fn create(&self, payload: NotePayload)
        -> impl Future<Output = Result<Note, TransportError>> + Send;

    /// Update an existing note by id, returning the stored result.
    fn update(
        &self,
        id: NoteId,
        payload: NotePayload,
    ) -> impl Future<Output = Result<Note, TransportError>> + Send;

    /// Delete a note by id.
    fn delete(&self, id: NoteId) -> impl Future<Output = Result<(), TransportError>> + Send;
}
