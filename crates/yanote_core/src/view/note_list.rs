//! Note list projection.
//!
//! # Responsibility
//! - Keep one delete guard per rendered note, keyed by note id.
//! - Project notes into render-ready items in collection order.
//!
//! # Invariants
//! - After `reconcile`, guards exist for exactly the notes passed in.
//! - Paragraphs are the literal blank-line split of the body; empty
//!   segments are kept.

use crate::model::note::{Note, NoteColor, NoteId};
use crate::view::delete_confirm::{DeleteConfirm, DeleteLabels};
use chrono::{DateTime, Local, Utc};
use std::collections::HashMap;

const DATE_LINE_FORMAT: &str = "%-m/%-d/%Y";
const TIME_LINE_FORMAT: &str = "%-I:%M:%S %p";

/// Render-ready projection of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItemView {
    pub id: NoteId,
    pub title: String,
    /// Border/accent color.
    pub color: NoteColor,
    pub date_line: String,
    pub time_line: String,
    pub paragraphs: Vec<String>,
    pub delete: DeleteLabels,
    pub confirming: bool,
}

/// Delete guards for the rendered list.
#[derive(Debug, Clone, Default)]
pub struct NoteList {
    guards: HashMap<NoteId, DeleteConfirm>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts idle guards for new notes and drops guards of removed notes.
    pub fn reconcile(&mut self, notes: &[Note]) {
        self.guards
            .retain(|id, _| notes.iter().any(|note| note.id() == *id));
        for note in notes {
            self.guards
                .entry(note.id())
                .or_insert_with(|| DeleteConfirm::new(note.id()));
        }
    }

    pub fn guard(&self, id: NoteId) -> Option<&DeleteConfirm> {
        self.guards.get(&id)
    }

    pub fn guard_mut(&mut self, id: NoteId) -> Option<&mut DeleteConfirm> {
        self.guards.get_mut(&id)
    }

    pub fn mounted(&self) -> usize {
        self.guards.len()
    }

    /// Projects `notes` in order; notes without a mounted guard render idle.
    pub fn project(&self, notes: &[Note]) -> Vec<NoteItemView> {
        notes
            .iter()
            .map(|note| {
                let guard = self
                    .guards
                    .get(&note.id())
                    .cloned()
                    .unwrap_or_else(|| DeleteConfirm::new(note.id()));
                NoteItemView {
                    id: note.id(),
                    title: note.title().to_string(),
                    color: note.color(),
                    date_line: format_date_line(note.created_at()),
                    time_line: format_time_line(note.created_at()),
                    paragraphs: note.paragraphs().map(str::to_string).collect(),
                    delete: guard.labels(),
                    confirming: guard.is_confirming(),
                }
            })
            .collect()
    }
}

/// Human-readable local date, e.g. `10/18/2026`.
pub fn format_date_line(created_at: DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format(DATE_LINE_FORMAT)
        .to_string()
}

/// Human-readable local time, e.g. `9:05:07 PM`.
pub fn format_time_line(created_at: DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format(TIME_LINE_FORMAT)
        .to_string()
}
