//! Game configuration.
//!
//! A `GameConfig` fixes everything about a session that does not change
//! between resets:
//! - the symbol set (one entry per pair on the board)
//! - the mismatch revert delay
//! - points awarded per match
//! - the board width used by views
//! - an optional seed for reproducible deals
//!
//! Configs are plain serde values, so hosts can load them from JSON or any
//! other serde format. Missing fields fall back to the defaults.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// The symbols dealt when no symbol set is configured.
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🌟", "🎨", "🌈", "🎭", "🎪", "🎯", "🎲", "🎮"];

/// Default delay before a mismatched pair is turned face-down again.
pub const DEFAULT_REVERT_DELAY_MS: u64 = 1000;

/// Default points awarded for each matched pair.
pub const DEFAULT_MATCH_POINTS: u32 = 100;

/// Default grid width.
pub const DEFAULT_COLUMNS: usize = 4;

/// Largest number of pairs a deck can hold (card indices are `u16`).
pub const MAX_PAIRS: usize = (u16::MAX / 2) as usize;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Symbols to deal. Each one appears on exactly two cards.
    pub symbols: Vec<String>,

    /// Milliseconds a mismatched pair stays face-up before reverting.
    pub revert_delay_ms: u64,

    /// Points added to the score for each match.
    pub match_points: u32,

    /// Number of columns in the rendered grid.
    pub columns: usize,

    /// Seed for the deal RNG. `None` draws a seed from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| (*s).to_string()).collect(),
            revert_delay_ms: DEFAULT_REVERT_DELAY_MS,
            match_points: DEFAULT_MATCH_POINTS,
            columns: DEFAULT_COLUMNS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default symbol set and timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the symbol set.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the mismatch revert delay in milliseconds.
    #[must_use]
    pub fn with_revert_delay_ms(mut self, millis: u64) -> Self {
        self.revert_delay_ms = millis;
        self
    }

    /// Set the points awarded per match.
    #[must_use]
    pub fn with_match_points(mut self, points: u32) -> Self {
        self.match_points = points;
        self
    }

    /// Set the grid width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The revert delay as a `Duration`.
    #[must_use]
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Check that a deck can be dealt from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        if self.symbols.len() > MAX_PAIRS {
            return Err(ConfigError::TooManySymbols(self.symbols.len()));
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }

        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol.as_str()) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(())
    }
}
