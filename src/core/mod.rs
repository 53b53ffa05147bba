//! Core types: card indices, RNG, configuration, errors.
//!
//! Everything here is independent of the session state machine.

pub mod index;
pub mod rng;
pub mod config;
pub mod error;

pub use index::CardIndex;
pub use rng::GameRng;
pub use config::{
    GameConfig, DEFAULT_COLUMNS, DEFAULT_MATCH_POINTS, DEFAULT_REVERT_DELAY_MS, DEFAULT_SYMBOLS,
    MAX_PAIRS,
};
pub use error::{ConfigError, ReplayError};
