//! Note id allocation.
//!
//! # Invariants
//! - Issued ids are strictly increasing, so a deleted id is never handed out
//!   again.
//! - Reserved ids (seed fixtures) are never issued.
//! - Once `u64::MAX` has been issued or reserved the allocator is exhausted
//!   and `next_id` returns `None` instead of repeating a value.

use crate::model::note::NoteId;

/// Monotonic id source for one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteIdAllocator {
    /// `None` once the id space is used up.
    next: Option<NoteId>,
}

impl Default for NoteIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteIdAllocator {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Marks an externally chosen id as taken.
    pub fn reserve(&mut self, id: NoteId) {
        if let Some(next) = self.next {
            if id >= next {
                self.next = id.checked_add(1);
            }
        }
    }

    /// Returns a fresh id and advances the counter.
    ///
    /// Returns `None` when the id space is exhausted.
    pub fn next_id(&mut self) -> Option<NoteId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteIdAllocator;

    #[test]
    fn next_id_is_strictly_increasing() {
        let mut ids = NoteIdAllocator::new();
        assert_eq!(ids.next_id(), Some(1));
        assert_eq!(ids.next_id(), Some(2));
    }

    #[test]
    fn reserve_skips_taken_ids_and_ignores_lower_values() {
        let mut ids = NoteIdAllocator::new();
        ids.reserve(5678);
        ids.reserve(1234);
        assert_eq!(ids.next_id(), Some(5679));
    }

    #[test]
    fn allocator_never_repeats_the_last_id() {
        let mut ids = NoteIdAllocator::new();
        ids.reserve(u64::MAX - 1);
        assert_eq!(ids.next_id(), Some(u64::MAX));
        assert!(ids.is_exhausted());
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn reserving_the_max_id_exhausts_the_allocator() {
        let mut ids = NoteIdAllocator::new();
        ids.reserve(u64::MAX);
        assert_eq!(ids.next_id(), None);

        ids.reserve(3);
        assert_eq!(ids.next_id(), None);
    }
}
