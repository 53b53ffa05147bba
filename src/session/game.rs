//! The game session state machine.
//!
//! ## Resolution protocol
//!
//! When the second card of a pair is picked:
//! 1. The resolution lock is taken.
//! 2. The two faces are compared.
//!    - Match: both cards are marked matched, the score grows by the
//!      configured match points, the selection clears, the lock is released.
//!    - Mismatch: a revert is scheduled after the configured delay. Until it
//!      fires both cards stay face-up and the lock stays held.
//! 3. The move counter grows by one, whatever the outcome.
//! 4. Completion is re-evaluated.
//!
//! ## Time
//!
//! The session has no timer of its own. The pending revert lives in a
//! [`Scheduler`] and fires when the host calls [`GameSession::advance`].
//! Each revert carries the generation it was scheduled in; [`GameSession::reset`]
//! cancels the task and bumps the generation, so a revert from a previous
//! deal can never touch the new one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::scheduler::{Scheduler, TaskHandle};
use super::selection::SelectionBuffer;
use crate::cards::{Card, Deck, SymbolSet};
use crate::core::{CardIndex, ConfigError, GameConfig, GameRng};

/// Why a pick was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card at this index.
    OutOfRange,
    /// A mismatched pair is waiting to revert.
    Locked,
    /// Two picks are already pending.
    SelectionFull,
    /// The card is already face-up.
    AlreadyRevealed,
    /// The card is already matched.
    AlreadyMatched,
}

/// What a call to [`GameSession::select_card`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),

    /// First card of a pair turned face-up.
    Revealed(CardIndex),

    /// Second card completed a matching pair.
    Matched {
        first: CardIndex,
        second: CardIndex,
        /// The last pair on the board was found.
        completed: bool,
    },

    /// Second card did not match; both revert after `revert_in`.
    Mismatched {
        first: CardIndex,
        second: CardIndex,
        revert_in: Duration,
    },
}

impl SelectOutcome {
    /// Whether the pick changed the session.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }
}

/// A mismatched pair turned face-down by [`GameSession::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevertedPair {
    pub first: CardIndex,
    pub second: CardIndex,
}

/// Session-level state.
///
/// Per pair the flow is `Idle → AwaitingSecondPick → Checking → Idle`;
/// a matched pair passes through `Checking` synchronously.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No picks pending.
    Idle,
    /// One card face-up, waiting for its partner.
    AwaitingSecondPick,
    /// A pair is being resolved or waiting to revert.
    Checking,
    /// Every card is matched.
    Complete,
}

/// Move and score counters. Replaced wholesale on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Completed pick-pairs.
    pub moves: u32,
    /// Points earned.
    pub score: u32,
}

/// Revert scheduled for a mismatched pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingRevert {
    generation: u64,
    first: CardIndex,
    second: CardIndex,
}

/// One game of memory: deck, picks, counters and the resolution lock.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::core::{CardIndex, GameConfig};
/// use memory_match::session::{GameSession, SelectOutcome};
///
/// let mut session = GameSession::new(GameConfig::default().with_seed(42)).unwrap();
///
/// let first = CardIndex::new(0);
/// let partner = session.deck().partner_of(first).unwrap();
///
/// session.select_card(first);
/// let outcome = session.select_card(partner);
///
/// assert!(matches!(outcome, SelectOutcome::Matched { .. }));
/// assert_eq!(session.score(), 100);
/// assert_eq!(session.moves(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    symbols: SymbolSet,
    rng: GameRng,

    deck: Deck,
    selection: SelectionBuffer,
    counters: Counters,
    complete: bool,
    locked: bool,

    generation: u64,
    scheduler: Scheduler<PendingRevert>,
    pending_revert: Option<TaskHandle>,
}

impl GameSession {
    /// Deal a new game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let symbols = SymbolSet::from_config(&config)?;
        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        let deck = Deck::deal(&symbols, &mut rng);

        log::info!(
            "dealt {} cards ({} pairs), seed {}",
            deck.len(),
            symbols.len(),
            rng.seed()
        );

        Ok(Self {
            config,
            symbols,
            rng,
            deck,
            selection: SelectionBuffer::new(),
            counters: Counters::default(),
            complete: false,
            locked: false,
            generation: 0,
            scheduler: Scheduler::new(),
            pending_revert: None,
        })
    }

    // === Player Actions ===

    /// Pick a card.
    ///
    /// Ignored without side effects when the lock is held, a pair is already
    /// pending, or the card is face-up or matched.
    pub fn select_card(&mut self, index: CardIndex) -> SelectOutcome {
        if let Some(reason) = self.check_pick(index) {
            log::debug!("ignored pick of {}: {:?}", index, reason);
            return SelectOutcome::Ignored(reason);
        }

        self.deck.reveal(index);
        self.selection.push(index);
        log::debug!("revealed {}", index);

        match self.resolve_selection() {
            Some(outcome) => outcome,
            None => SelectOutcome::Revealed(index),
        }
    }

    /// Start over with a freshly shuffled deck.
    ///
    /// Callable at any time. A pending revert is cancelled.
    pub fn reset(&mut self) {
        let cancelled = self
            .pending_revert
            .take()
            .is_some_and(|handle| self.scheduler.cancel(handle));
        self.generation += 1;

        self.deck = Deck::deal(&self.symbols, &mut self.rng);
        self.selection = SelectionBuffer::new();
        self.counters = Counters::default();
        self.complete = false;
        self.locked = false;

        log::info!(
            "reset to generation {} (pending revert cancelled: {})",
            self.generation,
            cancelled
        );
    }

    /// Let `elapsed` time pass, firing the pending revert if it came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<RevertedPair> {
        let mut reverted = Vec::new();

        for task in self.scheduler.advance(elapsed) {
            if task.generation != self.generation {
                log::trace!(
                    "dropping stale revert from generation {} (now {})",
                    task.generation,
                    self.generation
                );
                continue;
            }

            self.deck.conceal(task.first);
            self.deck.conceal(task.second);
            self.selection.clear();
            self.locked = false;
            self.pending_revert = None;
            self.refresh_completion();

            log::debug!("reverted {} and {}", task.first, task.second);
            reverted.push(RevertedPair {
                first: task.first,
                second: task.second,
            });
        }

        reverted
    }

    // === Resolution ===

    fn check_pick(&self, index: CardIndex) -> Option<IgnoreReason> {
        let Some(card) = self.deck.get(index) else {
            return Some(IgnoreReason::OutOfRange);
        };

        if self.locked {
            Some(IgnoreReason::Locked)
        } else if self.selection.is_full() {
            Some(IgnoreReason::SelectionFull)
        } else if card.matched {
            Some(IgnoreReason::AlreadyMatched)
        } else if card.revealed {
            Some(IgnoreReason::AlreadyRevealed)
        } else {
            None
        }
    }

    /// Resolve the pending pair, if there is one and no resolution is in flight.
    fn resolve_selection(&mut self) -> Option<SelectOutcome> {
        if self.locked {
            return None;
        }
        let (first, second) = self.selection.pair()?;
        let (a, b) = (*self.deck.get(first)?, *self.deck.get(second)?);

        self.locked = true;
        self.counters.moves = self.counters.moves.saturating_add(1);

        let outcome = if a.pairs_with(&b) {
            self.deck.mark_matched(first);
            self.deck.mark_matched(second);
            self.counters.score = self
                .counters
                .score
                .saturating_add(self.config.match_points);
            self.selection.clear();
            self.locked = false;
            self.refresh_completion();

            log::debug!("matched {} and {}, score {}", first, second, self.counters.score);
            SelectOutcome::Matched {
                first,
                second,
                completed: self.complete,
            }
        } else {
            let revert_in = self.config.revert_delay();
            let handle = self.scheduler.schedule_in(
                revert_in,
                PendingRevert {
                    generation: self.generation,
                    first,
                    second,
                },
            );
            self.pending_revert = Some(handle);

            log::debug!("mismatch {} and {}, reverting in {:?}", first, second, revert_in);
            SelectOutcome::Mismatched {
                first,
                second,
                revert_in,
            }
        };

        Some(outcome)
    }

    fn refresh_completion(&mut self) {
        if !self.complete && self.deck.all_matched() {
            self.complete = true;
            log::info!(
                "game complete in {} moves with a score of {}",
                self.counters.moves,
                self.counters.score
            );
        }
    }

    // === Queries ===

    /// The configuration this session was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The glyph table.
    #[must_use]
    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// The deal seed. Equal seeds give equal decks, including after resets.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// A card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Pending picks, in pick order.
    #[must_use]
    pub fn selection(&self) -> &[CardIndex] {
        self.selection.as_slice()
    }

    /// Completed pick-pairs since the last deal.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.counters.moves
    }

    /// Points since the last deal.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.counters.score
    }

    /// Both counters.
    #[must_use]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Whether every card is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the resolution lock is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Number of resets so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.complete {
            SessionPhase::Complete
        } else if self.locked {
            SessionPhase::Checking
        } else if self.selection.is_empty() {
            SessionPhase::Idle
        } else {
            SessionPhase::AwaitingSecondPick
        }
    }

    /// Time left before the pending revert fires.
    #[must_use]
    pub fn revert_due_in(&self) -> Option<Duration> {
        self.pending_revert
            .and_then(|handle| self.scheduler.time_until(handle))
    }

    /// Indices the player may pick right now.
    #[must_use]
    pub fn legal_picks(&self) -> Vec<CardIndex> {
        CardIndex::all(self.deck.len())
            .filter(|&index| self.check_pick(index).is_none())
            .collect()
    }
}
