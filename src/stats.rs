use crate::session::{GameOutcome, GameResult, MAX_ATTEMPTS, WINNING_ATTEMPTS};
use crate::wordbank::Word;

/// Aggregate statistics over a batch of games.
#[derive(Debug, Clone)]
pub struct GameStats {
    // index = attempts taken; bin 0 stays empty
    histogram: [u32; MAX_ATTEMPTS + 1],
    games: u32,
    total_attempts: u64,
    wins_within_six: u32,
    anomalies: u32,
    fewest: Option<(usize, Word)>,
    most: Option<(usize, Word)>,
}

impl GameStats {
    pub fn new() -> Self {
        GameStats {
            histogram: [0; MAX_ATTEMPTS + 1],
            games: 0,
            total_attempts: 0,
            wins_within_six: 0,
            anomalies: 0,
            fewest: None,
            most: None,
        }
    }

    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        self.total_attempts += outcome.attempts as u64;

        if outcome.attempts < self.histogram.len() {
            self.histogram[outcome.attempts] += 1;
        }

        match outcome.result {
            GameResult::Solved => {
                if outcome.attempts <= WINNING_ATTEMPTS {
                    self.wins_within_six += 1;
                }
            }
            GameResult::OutOfCandidates | GameResult::AttemptLimit => {
                self.anomalies += 1;
            }
        }

        if self.fewest.is_none_or(|(n, _)| outcome.attempts < n) {
            self.fewest = Some((outcome.attempts, outcome.target));
        }
        if self.most.is_none_or(|(n, _)| outcome.attempts > n) {
            self.most = Some((outcome.attempts, outcome.target));
        }
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn wins_within_six(&self) -> u32 {
        self.wins_within_six
    }

    pub fn anomalies(&self) -> u32 {
        self.anomalies
    }

    pub fn average_attempts(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_attempts as f64 / f64::from(self.games)
        }
    }

    /// Percentage of games solved within the winning attempt count.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            100.0 * f64::from(self.wins_within_six) / f64::from(self.games)
        }
    }

    pub fn print_report(&self) {
        for attempts in 1..self.histogram.len() {
            let count = self.histogram[attempts];
            if count > 0 {
                println!("{count} solved in {attempts} attempts");
            }
        }
        if let Some((attempts, word)) = self.most {
            println!("most attempts: {attempts} for {word}");
        }
        if let Some((attempts, word)) = self.fewest {
            println!("fewest attempts: {attempts} for {word}");
        }
        println!("average attempts: {:.3}", self.average_attempts());
        println!(
            "solved within {WINNING_ATTEMPTS} attempts: {:.2}%",
            self.win_rate()
        );
        if self.anomalies > 0 {
            println!("anomalous games (pool exhausted or attempt limit): {}", self.anomalies);
        }
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

/// How one opening word fared across a full-wordbank sweep.
#[derive(Debug, Clone, Copy)]
pub struct OpeningEvaluation {
    pub word: Word,
    pub average_attempts: f64,
    pub wins_within_six: u32,
}
