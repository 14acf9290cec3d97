//! Domain model for color-tagged notes.
//!
//! # Responsibility
//! - Define the canonical note record and its fixed color palette.
//! - Own id allocation so identity rules live next to the record.
//!
//! # Invariants
//! - A note is immutable after creation; there is no edit path.
//! - Note ids are never reused within one process.

pub mod id;
pub mod note;
