//! Deletion confirmation flow
//!
//! A two-state machine gating the one destructive operation: idle, or armed
//! with exactly one target note. Arming while armed replaces the target
//! (last-arm-wins); cancel has no side effects.

use crate::models::Note;

/// At most one outstanding deletion target, or none.
#[derive(Debug, Clone, Default)]
pub struct DeletionFlow {
    armed: Option<Note>,
}

impl DeletionFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Arm deletion for `note`, replacing any previously armed target.
    pub fn arm(&mut self, note: Note) {
        self.armed = Some(note);
    }

    /// Disarm without deleting.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Take the armed target for confirmation, returning to idle.
    pub fn take(&mut self) -> Option<Note> {
        self.armed.take()
    }

    /// The currently armed target, if any.
    #[must_use]
    pub fn armed(&self) -> Option<&Note> {
        self.armed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteId;
    use pretty_assertions::assert_eq;

    fn note(id: i64, title: &str) -> Note {
        Note {
            id: NoteId::new(id),
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn arming_replaces_a_previous_target() {
        let mut flow = DeletionFlow::new();
        flow.arm(note(1, "A"));
        flow.arm(note(2, "B"));

        assert_eq!(flow.armed().unwrap().id, NoteId::new(2));
        assert_eq!(flow.take().unwrap().title, "B");
        assert!(flow.armed().is_none());
    }

    #[test]
    fn cancel_clears_without_side_effects() {
        let mut flow = DeletionFlow::new();
        flow.arm(note(1, "A"));
        flow.cancel();

        assert!(flow.armed().is_none());
        assert!(flow.take().is_none());
    }

    #[test]
    fn take_on_idle_yields_nothing() {
        let mut flow = DeletionFlow::new();
        assert!(flow.take().is_none());
    }
}
