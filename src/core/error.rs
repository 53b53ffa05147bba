//! Error types.
//!
//! Gameplay itself never fails: illegal picks are ignored. Errors only come
//! from building a session out of a bad configuration or from decoding a
//! replay log.

use thiserror::Error;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("symbol set is empty; a deck needs at least one pair")]
    NoSymbols,

    #[error("symbol {0:?} appears more than once; each symbol forms exactly one pair")]
    DuplicateSymbol(String),

    #[error("symbol set has {0} entries; at most {} pairs are supported", super::config::MAX_PAIRS)]
    TooManySymbols(usize),

    #[error("board must have at least one column")]
    ZeroColumns,
}

/// Failure to encode, decode, or re-run a replay log.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("replay encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("replay config rejected: {0}")]
    Config(#[from] ConfigError),
}
