//! Note list cache
//!
//! The last-fetched ordered list of note summaries. The store is
//! authoritative on sort order; the cache is never reordered or patched
//! incrementally, only replaced wholesale after every mutation and on
//! initial load. A failed refresh keeps the previous list on screen
//! (stale-but-available beats empty).

use crate::models::{Note, NoteId};

/// Ordered note summaries exactly as last returned by the collection store.
#[derive(Debug, Clone, Default)]
pub struct NoteListCache {
    notes: Vec<Note>,
}

impl NoteListCache {
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Replace the cache wholesale with a fresh fetch result.
    pub fn replace(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// Notes in store order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Look up a cached note by id.
    #[must_use]
    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(id: i64, title: &str) -> Note {
        Note {
            id: NoteId::new(id),
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn replace_preserves_store_order() {
        let mut cache = NoteListCache::new();
        cache.replace(vec![note(3, "c"), note(1, "a"), note(2, "b")]);

        let ids: Vec<i64> = cache.notes().iter().map(|n| n.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn replace_is_wholesale_not_a_merge() {
        let mut cache = NoteListCache::new();
        cache.replace(vec![note(1, "a"), note(2, "b")]);
        cache.replace(vec![note(2, "b")]);

        assert_eq!(cache.len(), 1);
        assert!(cache.find(NoteId::new(1)).is_none());
        assert!(cache.find(NoteId::new(2)).is_some());
    }
}
