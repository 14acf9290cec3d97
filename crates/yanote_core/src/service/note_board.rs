//! In-memory note collection.
//!
//! # Responsibility
//! - Own the ordered note collection (newest first).
//! - Provide the only create/delete entry points for notes.
//!
//! # Invariants
//! - No two notes share an id at any observable time.
//! - `add_note` always prepends; `delete_note` removes at most one note.
//! - Both mutations are total: neither validates nor fails.

use crate::model::id::NoteIdAllocator;
use crate::model::note::{NewNote, Note, NoteColor, NoteId};
use chrono::Utc;
use log::{debug, info, warn};

/// Demonstration fixtures loaded by [`NoteBoard::with_seed`].
const SEED_NOTES: &[(NoteId, NoteColor, &str, &str)] = &[
    (1234, NoteColor::Blue, "hella noteworthy", "some note"),
    (5678, NoteColor::Red, "duly noted", "another note"),
];

/// Canonical owner of the note collection.
#[derive(Debug, Clone, Default)]
pub struct NoteBoard {
    notes: Vec<Note>,
    ids: NoteIdAllocator,
}

impl NoteBoard {
    /// Creates a board with no notes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a board holding the demonstration fixtures.
    ///
    /// Fixture ids are reserved so generated ids never collide with them.
    pub fn with_seed() -> Self {
        let created_at = Utc::now();
        let mut ids = NoteIdAllocator::new();
        let notes = SEED_NOTES
            .iter()
            .map(|&(id, color, title, text)| {
                ids.reserve(id);
                Note::from_candidate(id, created_at, NewNote::new(title, text, color))
            })
            .collect::<Vec<_>>();

        debug!(
            "event=board_seed module=board status=ok count={}",
            notes.len()
        );
        Self { notes, ids }
    }

    /// Creates a note from a candidate and prepends it.
    ///
    /// # Contract
    /// - Assigns a fresh id and the current timestamp.
    /// - Accepts empty title/text without complaint.
    /// - Returns the new note id; the note is at index 0 afterwards.
    /// - After the allocator is exhausted, picks the lowest id not held by a
    ///   live note, so ids stay unique within the collection.
    pub fn add_note(&mut self, candidate: NewNote) -> NoteId {
        let id = match self.ids.next_id() {
            Some(id) => id,
            None => self.unused_id(),
        };
        let note = Note::from_candidate(id, Utc::now(), candidate);
        info!(
            "event=note_add module=board status=ok id={} color={} title_len={} text_len={}",
            id,
            note.color(),
            note.title().chars().count(),
            note.text().chars().count()
        );
        self.notes.insert(0, note);
        id
    }

    /// Removes the note with `id`.
    ///
    /// Returns `false` (and leaves the collection untouched) when no such
    /// note exists.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        match self.notes.iter().position(|note| note.id() == id) {
            Some(index) => {
                self.notes.remove(index);
                info!(
                    "event=note_delete module=board status=ok id={} remaining={}",
                    id,
                    self.notes.len()
                );
                true
            }
            None => {
                debug!("event=note_delete module=board status=noop id={id}");
                false
            }
        }
    }

    fn unused_id(&self) -> NoteId {
        let id = (1..=NoteId::MAX)
            .find(|candidate| self.get(*candidate).is_none())
            .unwrap_or_default();
        warn!("event=note_id_exhausted module=board status=fallback id={id}");
        id
    }

    /// Notes in display order, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
