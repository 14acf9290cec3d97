//! Core use-case services.
//!
//! # Responsibility
//! - Own the canonical note collection and its two mutations.
//! - Keep view state (draft, delete guards) out of the collection owner.

pub mod note_board;
