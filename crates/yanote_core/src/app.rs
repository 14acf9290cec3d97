//! Top-level application state and action dispatch.
//!
//! # Responsibility
//! - Own the note board, composer draft and list guards in one place.
//! - Apply user actions one at a time and report what changed.
//!
//! # Invariants
//! - Every action is total; actions naming an unknown note are no-ops.
//! - The list guards are reconciled after every board mutation, so a guard
//!   never outlives its note.

use crate::model::note::{NoteColor, NoteId};
use crate::service::note_board::NoteBoard;
use crate::view::composer::{Composer, DraftField};
use crate::view::delete_confirm::ConfirmOutcome;
use crate::view::note_list::{NoteItemView, NoteList};

/// Discrete user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Type(DraftField, char),
    Erase(DraftField),
    SetTitle(String),
    SetText(String),
    SelectColor(NoteColor),
    Submit,
    RequestDelete(NoteId),
    CancelDelete(NoteId),
    ConfirmDelete(NoteId),
}

/// Observable collection change caused by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    NoteAdded(NoteId),
    NoteDeleted(NoteId),
}

/// Single owner of the collection, the draft and the delete guards.
pub struct NotesApp {
    board: NoteBoard,
    composer: Composer,
    list: NoteList,
}

impl NotesApp {
    /// Wraps an existing board with a fresh composer.
    pub fn new(board: NoteBoard) -> Self {
        Self::with_composer(board, Composer::new())
    }

    pub fn with_composer(board: NoteBoard, composer: Composer) -> Self {
        let mut list = NoteList::new();
        list.reconcile(board.notes());
        Self {
            board,
            composer,
            list,
        }
    }

    pub fn board(&self) -> &NoteBoard {
        &self.board
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn list(&self) -> &NoteList {
        &self.list
    }

    /// Render-ready list items, newest first.
    pub fn items(&self) -> Vec<NoteItemView> {
        self.list.project(self.board.notes())
    }

    pub fn dispatch(&mut self, action: Action) -> Effect {
        match action {
            Action::Type(field, ch) => {
                self.composer.push_char(field, ch);
                Effect::None
            }
            Action::Erase(field) => {
                self.composer.pop_char(field);
                Effect::None
            }
            Action::SetTitle(value) => {
                self.composer.set_title(value);
                Effect::None
            }
            Action::SetText(value) => {
                self.composer.set_text(value);
                Effect::None
            }
            Action::SelectColor(color) => {
                self.composer.select_color(color);
                Effect::None
            }
            Action::Submit => {
                let candidate = self.composer.submit();
                let id = self.board.add_note(candidate);
                self.list.reconcile(self.board.notes());
                Effect::NoteAdded(id)
            }
            Action::RequestDelete(id) => {
                if let Some(guard) = self.list.guard_mut(id) {
                    guard.request();
                }
                Effect::None
            }
            Action::CancelDelete(id) => {
                if let Some(guard) = self.list.guard_mut(id) {
                    guard.cancel();
                }
                Effect::None
            }
            Action::ConfirmDelete(id) => self.confirm_delete(id),
        }
    }

    fn confirm_delete(&mut self, id: NoteId) -> Effect {
        let Some(guard) = self.list.guard_mut(id) else {
            return Effect::None;
        };
        let board = &mut self.board;
        let outcome = guard.confirm(|note_id| {
            board.delete_note(note_id);
        });
        match outcome {
            ConfirmOutcome::Deleted(note_id) => {
                self.list.reconcile(self.board.notes());
                Effect::NoteDeleted(note_id)
            }
            ConfirmOutcome::Ignored => Effect::None,
        }
    }
}
