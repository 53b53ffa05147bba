//! The deck: every card on the board, in board order.
//!
//! The deck is dealt once per game and replaced - never reshuffled in place -
//! on reset. Cards are mutated in place only through the flag helpers below.
//!
//! Storage is an `im::Vector`, so handing a copy of the deck to a view or a
//! test is O(1) regardless of board size.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::symbol::{FaceId, SymbolSet};
use crate::core::{CardIndex, GameRng};

/// Ordered sequence of cards. Each face appears exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Deal a freshly shuffled deck: two cards per symbol, all face-down.
    ///
    /// ```
    /// use memory_match::cards::{Deck, SymbolSet};
    /// use memory_match::core::{GameConfig, GameRng};
    ///
    /// let symbols = SymbolSet::from_config(&GameConfig::default()).unwrap();
    /// let deck = Deck::deal(&symbols, &mut GameRng::new(42));
    ///
    /// assert_eq!(deck.len(), 16);
    /// assert!(deck.is_well_formed());
    /// ```
    #[must_use]
    pub fn deal(symbols: &SymbolSet, rng: &mut GameRng) -> Self {
        let mut faces: Vec<FaceId> = symbols.faces().chain(symbols.faces()).collect();
        rng.shuffle(&mut faces);
        Self::from_faces(faces)
    }

    /// Lay out a deck with faces in the given order.
    ///
    /// Card indices follow the order of `faces`. Used by `deal` and by
    /// callers that need a fixed layout.
    #[must_use]
    pub fn from_faces(faces: impl IntoIterator<Item = FaceId>) -> Self {
        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(i, face)| Card::new(CardIndex(i as u16), face))
            .collect();
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.as_usize())
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Turn a card face-up. Returns false if the index is out of range.
    pub fn reveal(&mut self, index: CardIndex) -> bool {
        self.update(index, |card| card.revealed = true)
    }

    /// Turn a card face-down. Matched cards keep showing their face.
    pub fn conceal(&mut self, index: CardIndex) -> bool {
        self.update(index, |card| card.revealed = false)
    }

    /// Mark a card as permanently matched.
    pub fn mark_matched(&mut self, index: CardIndex) -> bool {
        self.update(index, |card| card.matched = true)
    }

    fn update(&mut self, index: CardIndex, f: impl FnOnce(&mut Card)) -> bool {
        match self.cards.get_mut(index.as_usize()) {
            Some(card) => {
                f(card);
                true
            }
            None => false,
        }
    }

    /// Whether every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count()
    }

    /// Number of pairs still to be found.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        (self.len() - self.matched_count()) / 2
    }

    /// The other card carrying the same face.
    #[must_use]
    pub fn partner_of(&self, index: CardIndex) -> Option<CardIndex> {
        let card = self.get(index)?;
        self.cards
            .iter()
            .find(|other| card.pairs_with(other))
            .map(|other| other.index)
    }

    /// Count of cards per face.
    #[must_use]
    pub fn face_counts(&self) -> FxHashMap<FaceId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.face).or_insert(0) += 1;
        }
        counts
    }

    /// Check the deck invariants: even length, every face exactly twice,
    /// card indices equal to board positions.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.len() % 2 == 0
            && self.face_counts().values().all(|&n| n == 2)
            && self
                .cards
                .iter()
                .enumerate()
                .all(|(i, card)| card.index.as_usize() == i)
    }
}
