//! Property tests over random decks and random input sequences.

use std::time::Duration;

use proptest::prelude::*;

use memory_match::core::{CardIndex, GameConfig};
use memory_match::session::{GameSession, Input, SelectOutcome};

/// Random host input against a 16-card board. Out-of-range picks included.
fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        8 => (0u16..18).prop_map(|i| Input::Select(CardIndex::new(i))),
        3 => (0u64..1500).prop_map(Input::Advance),
        1 => Just(Input::Reset),
    ]
}

fn session(seed: u64) -> GameSession {
    GameSession::new(GameConfig::default().with_seed(seed)).unwrap()
}

proptest! {
    /// Every deal holds each symbol exactly twice.
    #[test]
    fn prop_decks_are_well_formed(seed in any::<u64>(), pairs in 1usize..20, resets in 0usize..4) {
        let config = GameConfig::default()
            .with_symbols((0..pairs).map(|i| format!("s{}", i)))
            .with_seed(seed);
        let mut session = GameSession::new(config).unwrap();

        for _ in 0..=resets {
            let deck = session.deck();
            prop_assert_eq!(deck.len(), pairs * 2);
            prop_assert!(deck.is_well_formed());
            prop_assert_eq!(deck.face_counts().len(), pairs);
            session.reset();
        }
    }

    /// Session invariants hold after every input.
    #[test]
    fn prop_invariants_hold(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 0..200),
    ) {
        let mut session = session(seed);
        let mut last_score = 0;

        for input in inputs {
            if input == Input::Reset {
                last_score = 0;
            }
            input.apply(&mut session);

            prop_assert!(session.selection().len() <= 2);
            for &index in session.selection() {
                let card = session.card(index).unwrap();
                prop_assert!(card.revealed && !card.matched);
            }

            prop_assert!(session.score() >= last_score);
            prop_assert_eq!(session.score() % 100, 0);
            last_score = session.score();

            prop_assert_eq!(session.is_complete(), session.deck().all_matched());
            prop_assert_eq!(session.score() as usize / 100 * 2, session.deck().matched_count());
        }
    }

    /// Each resolved pair adds exactly one move; matches add exactly 100.
    #[test]
    fn prop_moves_and_score_per_pair(
        seed in any::<u64>(),
        picks in prop::collection::vec(0u16..16, 0..100),
    ) {
        let mut session = session(seed);

        for pick in picks {
            let (moves, score) = (session.moves(), session.score());

            match session.select_card(CardIndex::new(pick)) {
                SelectOutcome::Matched { first, second, .. } => {
                    prop_assert_eq!(session.moves(), moves + 1);
                    prop_assert_eq!(session.score(), score + 100);
                    prop_assert!(session.card(first).unwrap().matched);
                    prop_assert!(session.card(second).unwrap().matched);
                }
                SelectOutcome::Mismatched { first, second, revert_in } => {
                    prop_assert_eq!(session.moves(), moves + 1);
                    prop_assert_eq!(session.score(), score);

                    let reverted = session.advance(revert_in);
                    prop_assert_eq!(reverted.len(), 1);
                    prop_assert!(!session.card(first).unwrap().revealed);
                    prop_assert!(!session.card(second).unwrap().revealed);
                }
                SelectOutcome::Revealed(_) | SelectOutcome::Ignored(_) => {
                    prop_assert_eq!(session.moves(), moves);
                    prop_assert_eq!(session.score(), score);
                }
            }
        }
    }

    /// Matched cards never turn face-down, whatever happens next.
    #[test]
    fn prop_matched_cards_stay_up(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 0..200),
    ) {
        let mut session = session(seed);
        let mut matched: Vec<CardIndex> = Vec::new();

        for input in inputs {
            input.apply(&mut session);

            if input == Input::Reset {
                matched.clear();
                continue;
            }
            for &index in &matched {
                let card = session.card(index).unwrap();
                prop_assert!(card.matched && card.is_face_up());
            }
            matched = session.deck().iter().filter(|c| c.matched).map(|c| c.index).collect();
        }
    }

    /// Once the delay has passed, no mismatched card is left face-up.
    #[test]
    fn prop_mismatches_never_stick(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 0..200),
    ) {
        let mut session = session(seed);

        for input in inputs {
            input.apply(&mut session);
        }
        session.advance(Duration::from_millis(1000));

        prop_assert!(!session.is_locked());
        let stray = session
            .deck()
            .iter()
            .filter(|c| c.revealed && !c.matched)
            .count();
        prop_assert!(stray <= 1, "only an unpaired first pick may stay face-up");
    }
}
