use std::fmt;

use crate::{
    game::{search::PathFinder, validator::PathValidator, SearchPolicy},
    models::Grid,
};

/// Rules applied to every guess in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub min_word_length: usize,
    pub policy: SearchPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            min_word_length: 4,
            policy: SearchPolicy::default(),
        }
    }
}

/// Verdict on a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    AlreadyFound { word: String },
    TooShort { word: String, min: usize },
    Found { word: String },
    NotFound { word: String },
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFound { .. } => write!(f, "Word already found."),
            Self::TooShort { min, .. } => write!(f, "Word must be at least {} letters long.", min),
            Self::Found { word } => write!(f, "Yes - {} is on the board.", word),
            Self::NotFound { word } => write!(f, "No - {} is not on the board.", word),
        }
    }
}

/// One game: a fixed board and the words found on it so far
pub struct Session {
    grid: Grid,
    finder: PathFinder,
    min_word_length: usize,
    found: Vec<String>,
}

impl Session {
    pub fn new(grid: Grid, settings: SessionSettings) -> Self {
        Self {
            grid,
            finder: PathFinder::new(settings.policy),
            min_word_length: settings.min_word_length,
            found: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Accepted words, in the order they were found
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Judge a raw line of player input.
    ///
    /// Input is trimmed and uppercased. Repeats are rejected before length,
    /// and length before the board is searched.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let word = input.trim().to_uppercase();

        if self.found.contains(&word) {
            return GuessOutcome::AlreadyFound { word };
        }

        if word.chars().count() < self.min_word_length {
            return GuessOutcome::TooShort {
                word,
                min: self.min_word_length,
            };
        }

        match self.finder.trace(&self.grid, &word) {
            Some(path) => {
                debug_assert!(path.is_empty() || PathValidator::is_valid_path(&self.grid, &path));
                tracing::debug!("{} traced along {:?}", word, path);
                self.found.push(word.clone());
                GuessOutcome::Found { word }
            }
            None => GuessOutcome::NotFound { word },
        }
    }
}
