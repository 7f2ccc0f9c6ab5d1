use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordle_autoplay::cli::{Mode, parse_cli};
use wordle_autoplay::logging;
use wordle_autoplay::session::{evaluate_opening_words, play_game, run_batch};
use wordle_autoplay::wordbank::{
    EMBEDDED_WORDBANK, Word, load_wordbank_from_file, load_wordbank_from_str, opening_cache_path,
    read_opening_words, write_opening_words,
};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load wordbank from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    println!("Loaded {} words.", wordbank.len());

    let opening = match cli.start_word.parse::<Word>() {
        Ok(word) => word,
        Err(e) => {
            eprintln!("Invalid start word: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.mode {
        Mode::Single { target } => {
            let target = match target.parse::<Word>() {
                Ok(word) => word,
                Err(e) => {
                    eprintln!("Invalid target word: {e}");
                    return ExitCode::FAILURE;
                }
            };
            println!("searching for {target}");
            let outcome = play_game(&target, &wordbank, Some(opening));
            if outcome.solved() {
                println!("found {target} in {} attempts", outcome.attempts);
            } else {
                println!("gave up on {target} after {} attempts", outcome.attempts);
                return ExitCode::FAILURE;
            }
        }
        Mode::FullDict => {
            println!("playing every wordbank entry as the target");
            let targets = wordbank.clone();
            let stats = run_batch(&targets, &wordbank, Some(opening));
            stats.print_report();
        }
        Mode::Random { games } => {
            let mut rng = StdRng::from_os_rng();
            let targets: Vec<Word> = (0..games)
                .map(|_| wordbank[rng.random_range(0..wordbank.len())])
                .collect();
            println!("playing {games} games against random targets");
            let stats = run_batch(&targets, &wordbank, Some(opening));
            stats.print_report();
        }
        Mode::Check { answers } => {
            let targets = match load_wordbank_from_file(&answers) {
                Ok(words) => words,
                Err(e) => {
                    eprintln!("Failed to load answers from '{answers}': {e}");
                    return ExitCode::FAILURE;
                }
            };
            println!("playing {} answers against the wordbank", targets.len());
            let stats = run_batch(&targets, &wordbank, Some(opening));
            stats.print_report();
        }
        Mode::OptimizeStart { recompute } => {
            run_optimize_start(&wordbank, recompute);
        }
    }

    ExitCode::SUCCESS
}

fn run_optimize_start(wordbank: &[Word], recompute: bool) {
    let cache_path = opening_cache_path();

    if !recompute {
        if let Some(path) = cache_path.as_ref() {
            if let Some(words) = read_opening_words(path) {
                println!("Best opening words (cached in {}):", path.display());
                for (i, word) in words.iter().enumerate() {
                    println!("{}. {word}", i + 1);
                }
                println!("Rerun with --recompute to redo the sweep.");
                return;
            }
        }
    }

    println!("Evaluating every opening word, this will take a while...");
    let evaluations = evaluate_opening_words(wordbank);

    println!("Best opening words:");
    for (i, evaluation) in evaluations.iter().take(5).enumerate() {
        println!(
            "{}. {} (average {:.3} attempts, {} solved within six)",
            i + 1,
            evaluation.word,
            evaluation.average_attempts,
            evaluation.wins_within_six
        );
    }

    if let Some(path) = cache_path.as_ref() {
        let top: Vec<Word> = evaluations.iter().take(5).map(|e| e.word).collect();
        write_opening_words(path, &top);
        println!("(Cached to: {}.)", path.display());
    }
}
