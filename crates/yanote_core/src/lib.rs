//! Core state for the yanote notes app.
//! This crate is the single source of truth for note invariants; rendering
//! backends only read its projections and send it actions.

pub mod app;
pub mod logging;
pub mod model;
pub mod service;
pub mod view;

pub use app::{Action, Effect, NotesApp};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::id::NoteIdAllocator;
pub use model::note::{parse_note_color, NewNote, Note, NoteColor, NoteColorError, NoteId};
pub use service::note_board::NoteBoard;
pub use view::composer::{Composer, DraftField};
pub use view::delete_confirm::{ConfirmOutcome, ConfirmState, DeleteConfirm, DeleteLabels};
pub use view::note_list::{format_date_line, format_time_line, NoteItemView, NoteList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
