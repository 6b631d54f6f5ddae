//! Navigation state: one active slide, moves clamped to the deck bounds.
//!
//! The same rules run inside the embedded JS; this model drives the initial
//! button attributes at compile time and makes the behavior unit-testable.

/// Position within a deck of `count` slides. No wraparound: `prev` at the
/// first slide and `next` at the last are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    index: usize,
    count: usize,
}

impl NavState {
    /// Start at the first slide. `count` must be at least 1.
    pub fn new(count: usize) -> Self {
        assert!(count > 0, "a deck has at least one slide");
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }

    /// Advance by one slide. Returns `true` if the index changed.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Retreat by one slide. Returns `true` if the index changed.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }
}
