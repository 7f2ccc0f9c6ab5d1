// Integration tests for the wordle-autoplay application
// These tests drive full games through the public library surface

use std::io::Write as _;

use wordle_autoplay::session::{MAX_ATTEMPTS, SolverSession, StepOutcome};
use wordle_autoplay::*;

fn w(s: &str) -> Word {
    s.parse().unwrap()
}

fn bank(words: &[&str]) -> Vec<Word> {
    words.iter().map(|s| w(s)).collect()
}

#[test]
fn test_crane_opening_finds_crate_in_two_steps() {
    // After "crane" vs "crate" the solver knows c-r-a-_-e and that 'n' is
    // nowhere, leaving "crate" as the only admissible survivor.
    let wordbank = bank(&["crane", "slate", "trace", "crate"]);
    let target = w("crate");
    let mut session = SolverSession::new(Some(w("crane")));

    assert_eq!(session.step(&target, &wordbank), StepOutcome::Miss(w("crane")));
    for j in [0usize, 1, 2, 4] {
        assert!(session.state().confirmed(j).is_some());
    }
    assert!(session.state().confirmed(3).is_none());
    assert!(session.state().is_excluded(3, b'n'));

    assert_eq!(session.step(&target, &wordbank), StepOutcome::Solved(w("crate")));

    let outcome = play_game(&target, &wordbank, Some(w("crane")));
    assert!(outcome.solved());
    assert_eq!(outcome.attempts, 2);
}

#[test]
fn test_opening_word_equal_to_target_wins_immediately() {
    let wordbank = bank(&["crane", "slate", "trace", "crate"]);
    let outcome = play_game(&w("slate"), &wordbank, Some(w("slate")));
    assert!(outcome.solved());
    assert_eq!(outcome.attempts, 1);
}

#[test]
fn test_full_bank_batch_solves_everything() {
    let wordbank = bank(&[
        "crane", "slate", "trace", "crate", "grace", "brace", "place", "plate", "irate", "stale",
    ]);
    let stats = run_batch(&wordbank, &wordbank, Some(w("crane")));

    assert_eq!(stats.games(), wordbank.len() as u32);
    assert_eq!(stats.anomalies(), 0);
    assert!(stats.average_attempts() >= 1.0);
    assert!(stats.average_attempts() <= MAX_ATTEMPTS as f64);
    assert!(stats.win_rate() > 0.0);
}

#[test]
fn test_batch_without_opening_word() {
    let wordbank = bank(&["crane", "slate", "trace", "crate"]);
    let stats = run_batch(&wordbank, &wordbank, None);
    assert_eq!(stats.games(), 4);
    assert_eq!(stats.anomalies(), 0);
}

#[test]
fn test_separate_answer_list_against_larger_bank() {
    // answers drawn from a different list than the guessing bank
    let wordbank = bank(&[
        "crane", "slate", "trace", "crate", "grace", "brace", "place", "plate",
    ]);
    let answers = bank(&["grace", "plate"]);
    let stats = run_batch(&answers, &wordbank, Some(w("crane")));
    assert_eq!(stats.games(), 2);
    assert_eq!(stats.anomalies(), 0);
}

#[test]
fn test_target_outside_bank_exhausts_candidates() {
    let wordbank = bank(&["aaaaa"]);
    let outcome = play_game(&w("bbbbb"), &wordbank, None);
    assert!(!outcome.solved());
    assert_eq!(outcome.result, GameResult::OutOfCandidates);
}

#[test]
fn test_admissible_pool_shrinks_across_a_real_game() {
    let wordbank = bank(&[
        "crane", "slate", "trace", "crate", "grace", "brace", "place", "plate", "irate", "stale",
    ]);
    let target = w("brace");
    let mut session = SolverSession::new(Some(w("slate")));

    let mut pool_sizes = Vec::new();
    loop {
        let admissible = wordbank
            .iter()
            .filter(|word| is_admissible(session.state(), word))
            .count();
        pool_sizes.push(admissible);
        match session.step(&target, &wordbank) {
            StepOutcome::Solved(_) | StepOutcome::AlreadySolved => break,
            StepOutcome::Miss(_) => {}
            StepOutcome::OutOfCandidates => panic!("pool exhausted"),
        }
        assert!(pool_sizes.len() <= MAX_ATTEMPTS, "game did not converge");
    }

    for pair in pool_sizes.windows(2) {
        assert!(pair[1] <= pair[0], "admissible pool grew: {pool_sizes:?}");
    }
}

#[test]
fn test_wordbank_file_to_game_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.txt");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "crane\nslate\ntrace\ncrate").unwrap();
    }

    let wordbank = load_wordbank_from_file(&path).unwrap();
    assert_eq!(wordbank.len(), 4);

    let outcome = play_game(&w("crate"), &wordbank, Some(w("crane")));
    assert!(outcome.solved());
    assert_eq!(outcome.attempts, 2);
}

#[test]
fn test_embedded_bank_solves_a_sample() {
    let wordbank = load_wordbank_from_str(EMBEDDED_WORDBANK);
    let opening = w("tromp");
    assert!(wordbank.contains(&opening));

    for target in ["crate", "slate", "world", "music"] {
        let outcome = play_game(&w(target), &wordbank, Some(opening));
        assert!(outcome.solved(), "failed to solve {target}");
        assert!(outcome.attempts <= MAX_ATTEMPTS);
    }
}

#[test]
fn test_opening_sweep_on_small_bank_is_consistent() {
    let wordbank = bank(&["crane", "slate", "trace", "crate", "grace"]);
    let evaluations = evaluate_opening_words(&wordbank);

    assert_eq!(evaluations.len(), wordbank.len());
    for evaluation in &evaluations {
        assert!(wordbank.contains(&evaluation.word));
        assert!(evaluation.average_attempts >= 1.0);
        assert!(evaluation.wins_within_six as usize <= wordbank.len());
    }
    for pair in evaluations.windows(2) {
        assert!(pair[0].average_attempts <= pair[1].average_attempts);
    }
}
