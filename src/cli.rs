use clap::{Parser, Subcommand};

/// Automatic Wordle solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file (embedded bank if omitted)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Opening word seeded as the first guess of every game
    #[arg(long = "start-word", default_value = "tromp")]
    pub start_word: String,

    /// Trace eliminations and intermediate guesses
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Mode {
    /// Play a single game against one target word
    Single { target: String },
    /// Play every wordbank entry as the target
    FullDict,
    /// Play a number of games against randomly drawn targets
    Random { games: usize },
    /// Play targets from a separate answers file, guessing from the wordbank
    Check {
        /// Newline-delimited answers file
        answers: String,
    },
    /// Sweep every wordbank entry as the opening word and rank them
    OptimizeStart {
        /// Ignore any cached ranking and redo the sweep
        #[arg(long)]
        recompute: bool,
    },
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
