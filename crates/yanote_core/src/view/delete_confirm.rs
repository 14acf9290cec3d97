//! Two-step delete guard attached to each rendered note.
//!
//! # Invariants
//! - The guard starts `Idle` and never leaves `Confirming` on its own.
//! - The delete callback runs at most once per confirm, and only from
//!   `Confirming`.

use crate::model::note::NoteId;
use log::debug;

pub const LABEL_REQUEST: &str = "Delete Note";
pub const LABEL_CONFIRM: &str = "Really Delete?";
pub const LABEL_CANCEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Idle,
    Confirming,
}

/// Result of a confirm attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The callback ran with this id; the guard should be unmounted.
    Deleted(NoteId),
    /// Confirm arrived while idle; nothing happened.
    Ignored,
}

/// Button labels for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteLabels {
    pub primary: &'static str,
    pub secondary: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirm {
    note_id: NoteId,
    state: ConfirmState,
}

impl DeleteConfirm {
    pub fn new(note_id: NoteId) -> Self {
        Self {
            note_id,
            state: ConfirmState::Idle,
        }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    pub fn state(&self) -> ConfirmState {
        self.state
    }

    pub fn is_confirming(&self) -> bool {
        self.state == ConfirmState::Confirming
    }

    /// `Idle -> Confirming`.
    pub fn request(&mut self) {
        if self.state == ConfirmState::Idle {
            debug!(
                "event=delete_request module=view status=ok id={}",
                self.note_id
            );
        }
        self.state = ConfirmState::Confirming;
    }

    /// `Confirming -> Idle`, with no other effect.
    pub fn cancel(&mut self) {
        if self.state == ConfirmState::Confirming {
            debug!(
                "event=delete_cancel module=view status=ok id={}",
                self.note_id
            );
        }
        self.state = ConfirmState::Idle;
    }

    /// Invokes `on_delete` with the bound id when confirming.
    pub fn confirm(&mut self, on_delete: impl FnOnce(NoteId)) -> ConfirmOutcome {
        if self.state != ConfirmState::Confirming {
            return ConfirmOutcome::Ignored;
        }
        on_delete(self.note_id);
        ConfirmOutcome::Deleted(self.note_id)
    }

    pub fn labels(&self) -> DeleteLabels {
        match self.state {
            ConfirmState::Idle => DeleteLabels {
                primary: LABEL_REQUEST,
                secondary: None,
            },
            ConfirmState::Confirming => DeleteLabels {
                primary: LABEL_CONFIRM,
                secondary: Some(LABEL_CANCEL),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfirmOutcome, ConfirmState, DeleteConfirm, LABEL_CANCEL, LABEL_CONFIRM};

    #[test]
    fn confirm_while_idle_does_not_call_back() {
        let mut guard = DeleteConfirm::new(7);
        let mut calls = 0;
        let outcome = guard.confirm(|_| calls += 1);
        assert_eq!(outcome, ConfirmOutcome::Ignored);
        assert_eq!(calls, 0);
        assert_eq!(guard.state(), ConfirmState::Idle);
    }

    #[test]
    fn confirming_labels_offer_cancel() {
        let mut guard = DeleteConfirm::new(7);
        guard.request();
        let labels = guard.labels();
        assert_eq!(labels.primary, LABEL_CONFIRM);
        assert_eq!(labels.secondary, Some(LABEL_CANCEL));
    }
}
