//! Property-based tests for the relay state machine.
//!
//! Random tables play random command sequences; every transition is
//! checked against the session invariants.

use proptest::prelude::*;

use word_relay::{
    check_invariants, EliminationFollowup, EliminationReason, EngineError, GameRng, GameSession,
    Outcome, Phase, RelayEngine, StartGameRequest,
};

#[derive(Clone, Debug)]
enum Op {
    Submit(String),
    Followup(EliminationFollowup),
}

/// Words over a tiny alphabet so chains, breaks, and duplicates all happen.
fn word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['가', '나', '다', 'a', ' ']), 0..4)
        .prop_map(|chars| chars.into_iter().collect())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => word().prop_map(Op::Submit),
        1 => Just(Op::Followup(EliminationFollowup::Continue)),
        1 => Just(Op::Followup(EliminationFollowup::NewRound)),
    ]
}

fn table(min: usize) -> impl Strategy<Value = Vec<String>> {
    (min..7).prop_map(|n| (0..n).map(|i| format!("P{i}")).collect())
}

fn start(names: &[String], shuffle: bool, seed: u64) -> (RelayEngine, GameSession) {
    let mut engine = RelayEngine::new(GameRng::new(seed));
    let session = engine
        .start_game(&StartGameRequest::new(names.iter().cloned(), shuffle))
        .unwrap();
    (engine, session)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Invariants hold after every committed transition, and errors only
    /// come from commands that don't fit the current phase.
    #[test]
    fn prop_invariants_hold(
        names in table(2),
        shuffle in any::<bool>(),
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let (engine, mut session) = start(&names, shuffle, seed);
        prop_assert!(check_invariants(&session, engine.config()).is_empty());

        for op in ops {
            let phase = session.phase();
            let result = match &op {
                Op::Submit(w) => engine.submit_word(&session, w),
                Op::Followup(choice) => engine.followup(&session, *choice),
            };

            match result {
                Ok(t) => {
                    let violations = check_invariants(&t.session, engine.config());
                    prop_assert!(violations.is_empty(), "{:?} after {:?}", violations, op);
                    prop_assert_eq!(t.session.is_over(), t.session.active_count() == 1);
                    prop_assert_eq!(t.session.participants().len(), names.len());
                    session = t.session;
                }
                Err(e) => {
                    let expected = match (phase, &op) {
                        (Phase::GameOver, _) => EngineError::GameOver,
                        (Phase::RoundEnded, Op::Submit(_)) => EngineError::FollowupPending,
                        (_, Op::Followup(_)) => EngineError::NoPendingElimination,
                        (_, Op::Submit(_)) => {
                            return Err(TestCaseError::fail(format!("unexpected error {e:?} in {phase:?}")));
                        }
                    };
                    prop_assert_eq!(e, expected);
                }
            }
        }
    }

    /// Input under two characters never touches the session.
    #[test]
    fn prop_short_input_is_inert(
        names in table(2),
        opening in "[가-힣]{2,4}",
        pad in "[ \t]{0,3}",
        short in "[가-힣a-z]{0,1}",
    ) {
        let (engine, session) = start(&names, false, 0);
        let session = engine.submit_word(&session, &opening).unwrap().session;

        let input = format!("{pad}{short}{pad}");
        let t = engine.submit_word(&session, &input).unwrap();

        prop_assert!(t.outcome.is_rejected());
        prop_assert_eq!(t.session.current_word(), session.current_word());
        prop_assert_eq!(t.session.used_words(), session.used_words());
        prop_assert_eq!(t.session.current_player_index(), session.current_player_index());
        prop_assert_eq!(t.session.active_count(), session.active_count());
    }

    /// A used word always eliminates, whether or not it chains.
    #[test]
    fn prop_duplicate_always_eliminates(names in table(2), syllable in "[가-힣]") {
        // "XX" chains from itself, so only the duplicate rule can catch it
        let word = syllable.repeat(2);
        let (engine, session) = start(&names, false, 0);
        let session = engine.submit_word(&session, &word).unwrap().session;

        let t = engine.submit_word(&session, &word).unwrap();

        let reason = match t.outcome {
            Outcome::Eliminated { reason, .. } | Outcome::GameOver { reason, .. } => reason,
            other => return Err(TestCaseError::fail(format!("not eliminated: {other:?}"))),
        };
        prop_assert_eq!(reason, EliminationReason::DuplicateWord);
    }

    /// History never grows past five and always holds the newest words in order.
    #[test]
    fn prop_history_is_last_five(len in 1usize..20) {
        let (engine, mut session) = start(&["A".to_string(), "B".to_string()], false, 0);
        // Distinct words that all start and end on 가
        let words: Vec<String> = (0..len).map(|i| format!("가{i}가")).collect();

        for w in &words {
            let t = engine.submit_word(&session, w).unwrap();
            prop_assert_eq!(t.outcome, Outcome::Accepted { new_round: false });
            session = t.session;
        }

        let history: Vec<String> = session.word_history().iter().cloned().collect();
        let expected = &words[len.saturating_sub(5)..];
        prop_assert_eq!(history.as_slice(), expected);
    }

    /// A new round clears the words but never the seats.
    #[test]
    fn prop_new_round_resets_words_only(names in table(3)) {
        let (engine, session) = start(&names, false, 0);
        let session = engine.submit_word(&session, "사과").unwrap().session;
        let session = engine.submit_word(&session, "자두").unwrap().session;
        prop_assert_eq!(session.phase(), Phase::RoundEnded);

        let t = engine.start_new_round(&session).unwrap();

        prop_assert!(t.session.used_words().is_empty());
        prop_assert!(t.session.word_history().is_empty());
        prop_assert_eq!(t.session.participants(), session.participants());
        prop_assert_eq!(t.session.active_count(), session.active_count());
    }

    /// Shuffling seats keeps every name exactly once.
    #[test]
    fn prop_shuffle_preserves_names(
        names in prop::collection::vec("[a-z가-힣]{1,6}", 2..12),
        seed in any::<u64>(),
    ) {
        let (_, session) = start(&names, true, seed);

        let mut seated: Vec<String> = session.participants().names().map(String::from).collect();
        let mut original = names.clone();
        seated.sort();
        original.sort();
        prop_assert_eq!(seated, original);

        let ids: Vec<u16> = session.participants().iter().map(|p| p.id.0).collect();
        let expected: Vec<u16> = (1..=names.len() as u16).collect();
        prop_assert_eq!(ids, expected);
    }
}
