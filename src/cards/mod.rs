//! Card data: the symbol table, card instances, and the deck.
//!
//! ## Architecture
//!
//! - `SymbolSet`: glyphs available to a game, addressed by `FaceId`
//! - `Card`: one board position with its face and flags
//! - `Deck`: every card of one game, in board order

pub mod symbol;
pub mod card;
pub mod deck;

pub use symbol::{FaceId, SymbolSet};
pub use card::Card;
pub use deck::Deck;
