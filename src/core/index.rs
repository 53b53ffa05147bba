//! Card identification.
//!
//! Every card on the board has a `CardIndex`: its position in the deck,
//! fixed from the deal until the next reset.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::CardIndex;
//!
//! let deck_len = 16;
//!
//! let first = CardIndex::new(0);
//! let last = CardIndex::new(15);
//!
//! assert!(first.in_deck(deck_len));
//! assert!(last.in_deck(deck_len));
//! assert!(!CardIndex::new(16).in_deck(deck_len));
//! ```

use serde::{Deserialize, Serialize};

/// Position of a card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u16);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Check if this index addresses a card in a deck of `deck_len` cards.
    #[must_use]
    pub const fn in_deck(self, deck_len: usize) -> bool {
        (self.0 as usize) < deck_len
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the index as a `usize` for slice access.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every index of a deck with `deck_len` cards.
    pub fn all(deck_len: usize) -> impl Iterator<Item = CardIndex> {
        (0..deck_len as u16).map(CardIndex)
    }
}

impl From<u16> for CardIndex {
    fn from(index: u16) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
