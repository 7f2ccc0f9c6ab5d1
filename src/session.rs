use log::{debug, warn};

use crate::solver::{ConstraintState, apply_feedback, select_guess};
use crate::stats::{GameStats, OpeningEvaluation};
use crate::wordbank::Word;

/// Driver-level ceiling: a game still unsolved after this many attempts is
/// abandoned and reported as an anomaly.
pub const MAX_ATTEMPTS: usize = 20;

/// Attempts at or below this count as a win in the aggregate stats.
pub const WINNING_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Every position was already confirmed by earlier feedback; no new
    /// guess was formed.
    AlreadySolved,
    /// This step's guess hit the target.
    Solved(Word),
    /// This step's guess missed; the constraint state has been updated.
    Miss(Word),
    /// No wordbank entry is consistent with the current constraints.
    OutOfCandidates,
}

/// One game's solver loop: owns the constraint state and makes one guess per
/// `step` call. The first step consumes the opening word when one was
/// configured; afterwards guesses come from the selector.
#[derive(Debug, Clone)]
pub struct SolverSession {
    state: ConstraintState,
}

impl SolverSession {
    pub fn new(opening_word: Option<Word>) -> Self {
        SolverSession {
            state: ConstraintState::new(opening_word),
        }
    }

    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// Makes one guess against `target` and folds the resulting feedback
    /// into the session state.
    pub fn step(&mut self, target: &Word, wordbank: &[Word]) -> StepOutcome {
        if let Some(known) = self.state.known_word() {
            if known == *target {
                return StepOutcome::AlreadySolved;
            }
        }

        let guess = match self.state.take_opening_word() {
            Some(opening) => opening,
            None => match select_guess(&self.state, wordbank) {
                Some(word) => word,
                None => return StepOutcome::OutOfCandidates,
            },
        };
        debug!("guessing {guess} (known so far: {})", self.state.pattern());

        if apply_feedback(&mut self.state, &guess, target) {
            StepOutcome::Solved(guess)
        } else {
            StepOutcome::Miss(guess)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Solved,
    OutOfCandidates,
    AttemptLimit,
}

#[derive(Debug, Clone, Copy)]
pub struct GameOutcome {
    pub target: Word,
    pub attempts: usize,
    pub result: GameResult,
}

impl GameOutcome {
    pub fn solved(&self) -> bool {
        self.result == GameResult::Solved
    }
}

/// Plays one full game against `target` with the default attempt ceiling.
pub fn play_game(target: &Word, wordbank: &[Word], opening_word: Option<Word>) -> GameOutcome {
    play_game_with_limit(target, wordbank, opening_word, MAX_ATTEMPTS)
}

/// Loops solver steps until the word is found, the candidate pool runs dry,
/// or `limit` attempts have been spent. Every step counts as one attempt.
pub fn play_game_with_limit(
    target: &Word,
    wordbank: &[Word],
    opening_word: Option<Word>,
    limit: usize,
) -> GameOutcome {
    let mut session = SolverSession::new(opening_word);
    let mut attempts = 0;

    loop {
        let outcome = session.step(target, wordbank);
        attempts += 1;
        match outcome {
            StepOutcome::AlreadySolved | StepOutcome::Solved(_) => {
                debug!("found {target} in {attempts} attempts");
                return GameOutcome {
                    target: *target,
                    attempts,
                    result: GameResult::Solved,
                };
            }
            StepOutcome::OutOfCandidates => {
                warn!("no candidates remain for {target} after {attempts} attempts");
                return GameOutcome {
                    target: *target,
                    attempts,
                    result: GameResult::OutOfCandidates,
                };
            }
            StepOutcome::Miss(_) => {
                if attempts >= limit {
                    warn!("giving up on {target} after {attempts} attempts");
                    return GameOutcome {
                        target: *target,
                        attempts,
                        result: GameResult::AttemptLimit,
                    };
                }
            }
        }
    }
}

/// Plays one game per target and folds the outcomes into aggregate stats.
pub fn run_batch(targets: &[Word], wordbank: &[Word], opening_word: Option<Word>) -> GameStats {
    let mut stats = GameStats::new();
    for target in targets {
        let outcome = play_game(target, wordbank, opening_word);
        stats.record(&outcome);
    }
    stats
}

/// Tries every wordbank entry as the opening word, playing the whole bank
/// against each, and returns the evaluations sorted best-average-first.
/// Running improvements are printed as they are found, since a full sweep
/// can take a long time.
pub fn evaluate_opening_words(wordbank: &[Word]) -> Vec<OpeningEvaluation> {
    let mut evaluations = Vec::with_capacity(wordbank.len());
    let mut best_average = f64::INFINITY;
    let mut best_wins = 0;

    for opening in wordbank {
        let stats = run_batch(wordbank, wordbank, Some(*opening));
        let evaluation = OpeningEvaluation {
            word: *opening,
            average_attempts: stats.average_attempts(),
            wins_within_six: stats.wins_within_six(),
        };
        debug!(
            "opening {opening}: average {:.3} attempts, {} within six",
            evaluation.average_attempts, evaluation.wins_within_six
        );
        if evaluation.average_attempts < best_average {
            best_average = evaluation.average_attempts;
            println!("new best average: {best_average:.3} attempts with {opening}");
        }
        if evaluation.wins_within_six > best_wins {
            best_wins = evaluation.wins_within_six;
            println!("new best win count: {best_wins} with {opening}");
        }
        evaluations.push(evaluation);
    }

    evaluations.sort_by(|a, b| a.average_attempts.total_cmp(&b.average_attempts));
    evaluations
}
