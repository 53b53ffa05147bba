//! Replay logs.
//!
//! A session is a pure function of its seed and its inputs, so recording
//! both is enough to rebuild it exactly. Logs are in-memory values; the
//! bincode encoding exists so a host can hand one across a boundary
//! (attach it to a bug report, post it to a worker).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::game::GameSession;
use crate::core::{CardIndex, GameConfig, ReplayError};

/// One host input to a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// `select_card(index)`.
    Select(CardIndex),
    /// `advance` by this many milliseconds.
    Advance(u64),
    /// `reset()`.
    Reset,
}

impl Input {
    /// Apply this input to a session.
    pub fn apply(self, session: &mut GameSession) {
        match self {
            Input::Select(index) => {
                session.select_card(index);
            }
            Input::Advance(millis) => {
                session.advance(Duration::from_millis(millis));
            }
            Input::Reset => session.reset(),
        }
    }
}

/// Seed plus the ordered inputs of one session.
///
/// ## Example
///
/// ```
/// use memory_match::core::{CardIndex, GameConfig};
/// use memory_match::session::{GameSession, Input, Replay};
///
/// let config = GameConfig::default();
/// let mut session = GameSession::new(config.clone()).unwrap();
/// let mut replay = Replay::new(session.seed());
///
/// replay.record(&mut session, Input::Select(CardIndex::new(0)));
/// replay.record(&mut session, Input::Select(CardIndex::new(1)));
/// replay.record(&mut session, Input::Advance(1000));
///
/// let rebuilt = replay.run(config).unwrap();
/// assert_eq!(rebuilt.deck(), session.deck());
/// assert_eq!(rebuilt.moves(), session.moves());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    /// Deal seed of the recorded session.
    pub seed: u64,
    /// Inputs in the order they were applied.
    pub inputs: Vec<Input>,
}

impl Replay {
    /// Start an empty log for a session dealt with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inputs: Vec::new(),
        }
    }

    /// Apply an input to `session` and append it to the log.
    pub fn record(&mut self, session: &mut GameSession, input: Input) {
        input.apply(session);
        self.inputs.push(input);
    }

    /// Append an input that was already applied elsewhere.
    pub fn push(&mut self, input: Input) {
        self.inputs.push(input);
    }

    /// Number of recorded inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Rebuild the session. The config's own seed is replaced by the log's.
    pub fn run(&self, config: GameConfig) -> Result<GameSession, ReplayError> {
        let mut session = GameSession::new(config.with_seed(self.seed))?;
        for &input in &self.inputs {
            input.apply(&mut session);
        }
        log::debug!("replayed {} inputs from seed {}", self.inputs.len(), self.seed);
        Ok(session)
    }

    /// Encode the log.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReplayError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a log produced by [`Replay::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReplayError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
