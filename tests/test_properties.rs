//! Property-based tests for rounds and statistics.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use guess_the_number::{Difficulty, GameRecord, GuessFeedback, Round, StatsState, StatsStore};

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

/// Text that never parses as an integer
fn junk_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z .,!?]{0,12}".prop_filter("must not parse", |s| s.trim().parse::<i64>().is_err())
}

fn record_strategy() -> impl Strategy<Value = GameRecord> {
    (difficulty_strategy(), any::<bool>(), 0u32..=10, 0u32..1_000_000).prop_map(
        |(difficulty, won, attempts, stamp)| {
            let attempts = attempts.min(difficulty.attempt_budget());
            GameRecord::new(difficulty, won, attempts, format!("2026-01-01 00:00:{stamp}"))
        },
    )
}

proptest! {
    // Secrets always land inside the difficulty's range
    #[test]
    fn secret_in_range(difficulty in difficulty_strategy(), seed in any::<u64>()) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let round = Round::new(difficulty, &mut rng);
        prop_assert!((1..=difficulty.range_max()).contains(&round.secret()));
    }

    // Junk input never costs an attempt
    #[test]
    fn junk_then_correct_is_one_attempt(
        difficulty in difficulty_strategy(),
        seed in any::<u64>(),
        junk in prop::collection::vec(junk_strategy(), 0..10),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut round = Round::new(difficulty, &mut rng);
        for text in &junk {
            prop_assert!(round.submit(text).is_err());
            prop_assert_eq!(round.attempts_used(), 0);
        }
        let secret = round.secret().to_string();
        prop_assert_eq!(round.submit(&secret).unwrap(), GuessFeedback::Correct);
        prop_assert_eq!(round.outcome().unwrap().attempts_used, 1);
    }

    // Rounds end within budget and never overspend
    #[test]
    fn attempts_bounded_by_budget(
        difficulty in difficulty_strategy(),
        seed in any::<u64>(),
        guesses in prop::collection::vec(-5i64..=105, 1..40),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut round = Round::new(difficulty, &mut rng);
        let budget = difficulty.attempt_budget();
        let mut counted = 0;
        for guess in guesses {
            if round.is_over() {
                prop_assert_eq!(round.guess(guess), GuessFeedback::RoundOver);
                continue;
            }
            round.guess(guess);
            counted += 1;
            prop_assert!(round.attempts_used() <= budget);
        }
        prop_assert!(counted <= budget);
        if counted == budget {
            prop_assert!(round.is_over());
        }
    }

    // Totals always agree with the history
    #[test]
    fn totals_match_history(records in prop::collection::vec(record_strategy(), 0..30)) {
        let mut state = StatsState::new();
        for record in records {
            state.push(record);
        }
        prop_assert!(state.validate().is_ok());

        let summary = state.summarize();
        prop_assert_eq!(&summary, &state.summarize());
        prop_assert!(summary.recent.len() <= 5);
        prop_assert!((0.0..=1.0).contains(&summary.win_rate));
        if state.total_games == 0 {
            prop_assert_eq!(summary.win_rate, 0.0);
        }
    }

    // Saving then loading preserves totals and order
    #[test]
    fn save_load_preserves_history(records in prop::collection::vec(record_strategy(), 0..20)) {
        let mut state = StatsState::new();
        for record in records {
            state.push(record);
        }
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("stats.json"));
        store.save(&state).unwrap();
        let loaded = store.load().unwrap();
        prop_assert_eq!(loaded.total_games, state.total_games);
        prop_assert_eq!(loaded.total_wins, state.total_wins);
        prop_assert_eq!(loaded.games, state.games);
    }
}
