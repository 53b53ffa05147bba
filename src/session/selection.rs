//! Selection buffer - the picks awaiting resolution.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardIndex;

/// Capacity of the buffer: one pair.
pub const SELECTION_CAPACITY: usize = 2;

/// Ordered picks not yet matched or reverted. Never holds more than two.
///
/// SmallVec keeps the pair inline, no heap allocation per pick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBuffer {
    picks: SmallVec<[CardIndex; SELECTION_CAPACITY]>,
}

impl SelectionBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pick. Returns false (and leaves the buffer unchanged) when
    /// the buffer is full or already holds this index.
    pub fn push(&mut self, index: CardIndex) -> bool {
        if self.is_full() || self.picks.contains(&index) {
            return false;
        }
        self.picks.push(index);
        true
    }

    /// The two picks, once both are in.
    #[must_use]
    pub fn pair(&self) -> Option<(CardIndex, CardIndex)> {
        match self.picks.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Check if the buffer holds a full pair.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.picks.len() >= SELECTION_CAPACITY
    }

    /// Check if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Number of picks held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// The picks in order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardIndex] {
        &self.picks
    }

    /// Drop all picks.
    pub fn clear(&mut self) {
        self.picks.clear();
    }
}
