//! Session integration tests.
//!
//! These drive a `GameSession` the way a front end does: picks, timer
//! callbacks, and resets, checking counters and card flags after each step.

use std::time::Duration;

use memory_match::cards::{Deck, FaceId, SymbolSet};
use memory_match::core::{CardIndex, GameConfig, GameRng};
use memory_match::session::{GameSession, IgnoreReason, RevertedPair, SelectOutcome, SessionPhase};
use memory_match::view::BoardView;

const DELAY: Duration = Duration::from_millis(1000);

fn new_session(seed: u64) -> GameSession {
    GameSession::new(GameConfig::default().with_seed(seed)).unwrap()
}

/// First pair of selectable cards with different faces.
fn find_mismatch(session: &GameSession) -> (CardIndex, CardIndex) {
    let picks = session.legal_picks();
    let first = picks[0];
    let face = session.card(first).unwrap().face;
    let second = picks
        .into_iter()
        .find(|&i| session.card(i).unwrap().face != face)
        .unwrap();
    (first, second)
}

/// A seed whose deal puts a pair at indices 0 and 1.
fn seed_with_leading_pair() -> u64 {
    (0..10_000u64)
        .find(|&seed| {
            let session = new_session(seed);
            let face = |i| session.card(CardIndex::new(i)).unwrap().face;
            face(0) == face(1)
        })
        .unwrap()
}

// =============================================================================
// Scenario
// =============================================================================

/// Eight symbols, sixteen cards: a match, a mismatch, then a reset.
#[test]
fn test_match_mismatch_reset_scenario() {
    let mut session = new_session(seed_with_leading_pair());
    assert_eq!(session.deck().len(), 16);

    // (0, 1) is a matching pair.
    session.select_card(CardIndex::new(0));
    let outcome = session.select_card(CardIndex::new(1));
    assert!(matches!(outcome, SelectOutcome::Matched { completed: false, .. }));
    assert!(session.card(CardIndex::new(0)).unwrap().matched);
    assert!(session.card(CardIndex::new(1)).unwrap().matched);
    assert_eq!(session.score(), 100);
    assert_eq!(session.moves(), 1);

    // A mismatching pair reverts after the delay.
    let (a, b) = find_mismatch(&session);
    session.select_card(a);
    session.select_card(b);
    assert_eq!(session.moves(), 2);
    assert!(session.card(a).unwrap().revealed);

    let reverted = session.advance(DELAY);
    assert_eq!(reverted, vec![RevertedPair { first: a, second: b }]);
    assert!(!session.card(a).unwrap().revealed);
    assert!(!session.card(b).unwrap().revealed);
    assert_eq!(session.score(), 100);
    assert_eq!(session.moves(), 2);

    // Reset deals a fresh deck with zeroed counters.
    let old_faces: Vec<FaceId> = session.deck().iter().map(|c| c.face).collect();
    session.reset();
    assert_eq!(session.moves(), 0);
    assert_eq!(session.score(), 0);
    assert!(!session.is_complete());
    assert!(session.deck().is_well_formed());
    assert!(session.deck().iter().all(|c| !c.revealed && !c.matched));
    let new_faces: Vec<FaceId> = session.deck().iter().map(|c| c.face).collect();
    assert_ne!(new_faces, old_faces);
}

// =============================================================================
// Lock and Timer
// =============================================================================

/// Rapid clicks during the revert delay change nothing.
#[test]
fn test_clicks_during_delay_are_ignored() {
    let mut session = new_session(11);
    let (a, b) = find_mismatch(&session);
    session.select_card(a);
    session.select_card(b);

    for index in CardIndex::all(16) {
        let outcome = session.select_card(index);
        assert!(!outcome.is_accepted());
    }

    assert_eq!(session.selection(), &[a, b]);
    assert_eq!(session.moves(), 1);
    assert_eq!(session.deck().iter().filter(|c| c.revealed).count(), 2);
}

/// The revert fires once, however the delay is split up.
#[test]
fn test_revert_fires_once_across_small_ticks() {
    let mut session = new_session(12);
    let (a, b) = find_mismatch(&session);
    session.select_card(a);
    session.select_card(b);

    let mut fired = 0;
    for _ in 0..100 {
        fired += session.advance(Duration::from_millis(16)).len();
    }

    assert_eq!(fired, 1);
    assert_eq!(session.phase(), SessionPhase::Idle);
}

/// After a revert the same cards can be picked again.
#[test]
fn test_reverted_cards_are_selectable_again() {
    let mut session = new_session(13);
    let (a, b) = find_mismatch(&session);
    session.select_card(a);
    session.select_card(b);
    session.advance(DELAY);

    assert_eq!(session.select_card(a), SelectOutcome::Revealed(a));
}

/// Reset during the delay: the old revert never touches the new deck.
#[test]
fn test_reset_mid_delay() {
    let mut session = new_session(14);
    let (a, b) = find_mismatch(&session);
    session.select_card(a);
    session.select_card(b);
    session.advance(Duration::from_millis(500));

    session.reset();
    assert!(!session.is_locked());
    assert_eq!(session.revert_due_in(), None);

    session.select_card(a);
    session.select_card(b);
    let new_pair_matched = session.card(a).unwrap().matched;

    // 500ms later the first revert would have fired. Only the new one
    // (if the new pair mismatched) may fire, and only after a full delay.
    let reverted = session.advance(Duration::from_millis(500));
    assert!(reverted.is_empty());
    if !new_pair_matched {
        assert!(session.card(a).unwrap().revealed);
        assert_eq!(session.advance(Duration::from_millis(500)).len(), 1);
    }
}

// =============================================================================
// Whole Games
// =============================================================================

/// A perfect game takes one move per pair.
#[test]
fn test_perfect_game() {
    let mut session = new_session(21);

    while !session.is_complete() {
        let first = session.legal_picks()[0];
        let partner = session.deck().partner_of(first).unwrap();
        session.select_card(first);
        session.select_card(partner);
    }

    assert_eq!(session.moves(), 8);
    assert_eq!(session.score(), 800);
    assert!(session.deck().all_matched());

    let view = BoardView::from_session(&session);
    assert_eq!(
        view.banner().as_deref(),
        Some("You completed the game in 8 moves with a score of 800!")
    );
}

/// Completed boards are inert until reset.
#[test]
fn test_completed_board_is_inert() {
    let config = GameConfig::default().with_symbols(["a", "b"]).with_seed(2);
    let mut session = GameSession::new(config).unwrap();

    while !session.is_complete() {
        let first = session.legal_picks()[0];
        let partner = session.deck().partner_of(first).unwrap();
        session.select_card(first);
        session.select_card(partner);
    }

    for index in CardIndex::all(4) {
        assert_eq!(
            session.select_card(index),
            SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
    }
    assert_eq!(session.moves(), 2);

    session.reset();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.legal_picks().len(), 4);
}

/// A game with mistakes still finishes, and mistakes cost moves only.
#[test]
fn test_game_with_mistakes() {
    let mut session = new_session(31);
    let mut mistakes = 0;

    while !session.is_complete() {
        let picks = session.legal_picks();
        let first = picks[0];
        let partner = session.deck().partner_of(first).unwrap();

        if let Some(&wrong) = picks.iter().find(|&&i| i != first && i != partner) {
            if mistakes < 5 {
                session.select_card(first);
                session.select_card(wrong);
                session.advance(DELAY);
                mistakes += 1;
                continue;
            }
        }

        session.select_card(first);
        session.select_card(partner);
    }

    assert_eq!(mistakes, 5);
    assert_eq!(session.moves(), 13);
    assert_eq!(session.score(), 800);
}

// =============================================================================
// Dealing
// =============================================================================

/// Same seed, same sequence of decks across resets.
#[test]
fn test_seeded_resets_are_reproducible() {
    let mut a = new_session(99);
    let mut b = new_session(99);

    for _ in 0..5 {
        assert_eq!(a.deck(), b.deck());
        a.reset();
        b.reset();
    }
}

/// Decks dealt outside a session follow the same rules.
#[test]
fn test_standalone_deck() {
    let config = GameConfig::default();
    let symbols = SymbolSet::from_config(&config).unwrap();
    let deck = Deck::deal(&symbols, &mut GameRng::new(5));

    let counts = deck.face_counts();
    for face in symbols.faces() {
        assert_eq!(counts[&face], 2);
    }
    assert!(!counts.contains_key(&FaceId::new(8)));
}
