//! Card instances - runtime card state.
//!
//! A `Card` is one position on the board. Its face is fixed at deal time;
//! only the two flags change during play:
//! - `revealed`: shown face-up because the player picked it
//! - `matched`: permanently resolved, always shown face-up

use serde::{Deserialize, Serialize};

use super::symbol::FaceId;
use crate::core::CardIndex;

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position in the deck.
    pub index: CardIndex,

    /// Face value, shared with exactly one other card.
    pub face: FaceId,

    /// Face-up due to a pick.
    pub revealed: bool,

    /// Permanently matched.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(index: CardIndex, face: FaceId) -> Self {
        Self {
            index,
            face,
            revealed: false,
            matched: false,
        }
    }

    /// Whether the face should be shown.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    /// Whether the player may pick this card.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    /// Whether this card forms a pair with `other`.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.index != other.index && self.face == other.face
    }
}
