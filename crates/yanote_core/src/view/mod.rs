//! Headless view state and projections.
//!
//! # Responsibility
//! - Hold per-widget ephemeral state (composer draft, delete guards).
//! - Project the note collection into render-ready items.
//!
//! # Invariants
//! - View state never mutates the collection directly; it yields candidates
//!   or ids that the collection owner applies.
//! - Nothing here depends on a concrete rendering backend.

pub mod composer;
pub mod delete_confirm;
pub mod note_list;
