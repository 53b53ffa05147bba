//! The game session and its supporting machinery.
//!
//! - [`GameSession`]: deck, picks, counters, lock; the two player actions
//! - [`SelectionBuffer`]: at most two pending picks
//! - [`Scheduler`]: logical-time queue holding the mismatch revert
//! - [`Replay`]: seed plus inputs, enough to rebuild a session
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::{CardIndex, GameConfig};
//! use memory_match::session::{GameSession, SessionPhase};
//!
//! let mut session = GameSession::new(GameConfig::default().with_seed(1)).unwrap();
//!
//! session.select_card(CardIndex::new(0));
//! assert_eq!(session.phase(), SessionPhase::AwaitingSecondPick);
//!
//! // The host's timer callback.
//! session.advance(Duration::from_millis(16));
//!
//! session.reset();
//! assert_eq!(session.phase(), SessionPhase::Idle);
//! ```

mod game;
mod replay;
mod scheduler;
mod selection;

pub use game::{Counters, GameSession, IgnoreReason, RevertedPair, SelectOutcome, SessionPhase};
pub use replay::{Input, Replay};
pub use scheduler::{Scheduler, TaskHandle};
pub use selection::{SelectionBuffer, SELECTION_CAPACITY};
