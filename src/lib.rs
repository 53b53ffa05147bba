//! # memory-match
//!
//! Engine for the memory-matching (concentration) card game.
//!
//! Cards are dealt face-down in pairs. The player turns up two at a time;
//! a matching pair stays face-up and scores, a mismatch turns back over
//! after a short delay. The game ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven Time**: The session owns no timers. The single delayed
//!    action (turning a mismatch back over) waits in a logical-time
//!    scheduler that the host advances.
//!
//! 2. **Silent Rejection**: Illegal picks are no-ops. The returned outcome
//!    says why, but the session is never left in an error state.
//!
//! 3. **Deterministic Deals**: Every shuffle comes from one seeded ChaCha8
//!    stream, so a seed plus an input log reproduces a session exactly.
//!
//! ## Modules
//!
//! - `core`: Card indices, RNG, configuration, errors
//! - `cards`: Symbol table, cards, deck
//! - `session`: The `GameSession` state machine, scheduler, replay log
//! - `view`: Render model for front ends

pub mod core;
pub mod cards;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{CardIndex, ConfigError, GameConfig, GameRng, ReplayError};

pub use crate::cards::{Card, Deck, FaceId, SymbolSet};

pub use crate::session::{
    Counters, GameSession, IgnoreReason, Input, Replay, RevertedPair,
    Scheduler, SelectOutcome, SelectionBuffer, SessionPhase, TaskHandle,
};

pub use crate::view::{BoardView, CardFace, CellView};
