// Library interface for wordle-autoplay
// This allows integration tests to access internal modules

pub mod cli;
pub mod logging;
pub mod session;
pub mod solver;
pub mod stats;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use session::{
    GameOutcome, GameResult, SolverSession, StepOutcome, evaluate_opening_words, play_game,
    play_game_with_limit, run_batch,
};
pub use solver::{
    ConstraintState, MisplacedLetters, apply_feedback, is_admissible, position_letter_counts,
    select_guess,
};
pub use stats::{GameStats, OpeningEvaluation};
pub use wordbank::{EMBEDDED_WORDBANK, Word, load_wordbank_from_file, load_wordbank_from_str};
