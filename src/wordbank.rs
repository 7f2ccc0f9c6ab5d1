use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

/// Number of letters in every word the solver handles.
pub const WORD_LENGTH: usize = 5;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

#[derive(Debug, thiserror::Error)]
pub enum WordError {
    #[error("'{0}' is not exactly five letters")]
    WrongLength(String),
    #[error("'{0}' contains characters outside a-z")]
    NotAlphabetic(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WordbankError {
    #[error("failed to read wordbank: {0}")]
    Io(#[from] std::io::Error),
    #[error("wordbank contains no usable words")]
    Empty,
}

/// A lowercase five-letter word.
///
/// Construction is the validation boundary: anything that parses is safe to
/// hand to the solver core, so the core itself never re-checks length or
/// character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub(crate) fn from_letters(letters: [u8; WORD_LENGTH]) -> Self {
        Word(letters)
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letter(&self, position: usize) -> u8 {
        self.0[position]
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != WORD_LENGTH {
            return Err(WordError::WrongLength(trimmed.to_string()));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(trimmed.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::NotAlphabetic(trimmed.to_string()));
            }
            *slot = c.to_ascii_lowercase() as u8;
        }
        Ok(Word(letters))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Parses a newline-delimited wordbank, dropping invalid lines and duplicates.
/// Order of first occurrence is preserved; it doubles as guess priority.
pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    let mut seen = HashSet::new();
    data.lines()
        .filter_map(|line| line.parse::<Word>().ok())
        .filter(|word| seen.insert(*word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordbankError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Ok(word) = line?.parse::<Word>() {
            if seen.insert(word) {
                words.push(word);
            }
        }
    }
    if words.is_empty() {
        return Err(WordbankError::Empty);
    }
    Ok(words)
}

/// Location of the cached opening-word ranking, if a home directory exists.
pub fn opening_cache_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".wordle_autoplay_openings"))
}

pub fn read_opening_words(path: &Path) -> Option<Vec<Word>> {
    let contents = std::fs::read_to_string(path).ok()?;
    let words: Vec<Word> = contents
        .lines()
        .filter_map(|line| line.parse().ok())
        .collect();
    if words.is_empty() { None } else { Some(words) }
}

pub fn write_opening_words(path: &Path, words: &[Word]) {
    let mut contents = String::new();
    for word in words {
        contents.push_str(&word.to_string());
        contents.push('\n');
    }
    if let Err(e) = std::fs::write(path, contents) {
        debug!("could not write opening cache {}: {e}", path.display());
    }
}
