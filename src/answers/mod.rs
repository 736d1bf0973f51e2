//! Answer word tables
//!
//! Provides length-keyed answer lists (embedded at build time) and uniform
//! random answer selection with an injected RNG.

mod embedded;
pub mod loader;

pub use embedded::{
    ANSWERS_5, ANSWERS_5_COUNT, ANSWERS_6, ANSWERS_6_COUNT, ANSWERS_7, ANSWERS_7_COUNT,
};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// A supported answer length
///
/// The games run at 5, 6, or 7 letters; anything else is a configuration
/// error caught at this boundary rather than a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordLength {
    Five,
    Six,
    Seven,
}

impl WordLength {
    /// All supported lengths, in order
    pub const ALL: [Self; 3] = [Self::Five, Self::Six, Self::Seven];

    /// The numeric letter count
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
        }
    }
}

impl TryFrom<usize> for WordLength {
    type Error = TableError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            other => Err(TableError::UnsupportedLength(other)),
        }
    }
}

impl std::fmt::Display for WordLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// Answer table configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("unsupported word length {0}, expected 5, 6, or 7")]
    UnsupportedLength(usize),
    #[error("no answer words configured for length {0}")]
    EmptyList(WordLength),
    #[error("answer word '{word}' has length {actual}, expected {expected}")]
    LengthMismatch {
        word: String,
        actual: usize,
        expected: WordLength,
    },
}

/// Immutable answer lists keyed by word length
///
/// Built once at startup (or injected in tests) and passed to session
/// constructors; there is no ambient global table.
#[derive(Debug, Clone)]
pub struct AnswerTable {
    five: Vec<Word>,
    six: Vec<Word>,
    seven: Vec<Word>,
}

impl AnswerTable {
    /// Build a table from explicit per-length lists
    ///
    /// # Errors
    /// Returns `TableError` if any list is empty or contains a word of the
    /// wrong length.
    pub fn new(five: Vec<Word>, six: Vec<Word>, seven: Vec<Word>) -> Result<Self, TableError> {
        let table = Self { five, six, seven };
        for length in WordLength::ALL {
            let words = table.words(length);
            if words.is_empty() {
                return Err(TableError::EmptyList(length));
            }
            if let Some(bad) = words.iter().find(|w| w.len() != length.as_usize()) {
                return Err(TableError::LengthMismatch {
                    word: bad.text().to_string(),
                    actual: bad.len(),
                    expected: length,
                });
            }
        }
        Ok(table)
    }

    /// Build the table from the embedded word lists
    ///
    /// # Panics
    /// Panics only if the embedded lists are malformed, which the build
    /// script and wordlist tests rule out.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ANSWERS_5),
            loader::words_from_slice(ANSWERS_6),
            loader::words_from_slice(ANSWERS_7),
        )
        .expect("embedded answer lists are validated at build time")
    }

    /// Replace the candidate answers for one length, revalidating
    ///
    /// Supports custom wordlists loaded at startup; the other lengths keep
    /// their existing lists.
    ///
    /// # Errors
    /// Returns `TableError` if the replacement list is empty or contains a
    /// word of the wrong length.
    pub fn with_replaced(self, length: WordLength, words: Vec<Word>) -> Result<Self, TableError> {
        let Self { five, six, seven } = self;
        match length {
            WordLength::Five => Self::new(words, six, seven),
            WordLength::Six => Self::new(five, words, seven),
            WordLength::Seven => Self::new(five, six, words),
        }
    }

    /// The candidate answers for a length
    #[must_use]
    pub fn words(&self, length: WordLength) -> &[Word] {
        match length {
            WordLength::Five => &self.five,
            WordLength::Six => &self.six,
            WordLength::Seven => &self.seven,
        }
    }

    /// Pick one answer uniformly at random
    ///
    /// Randomness quality only needs statistical spread; the RNG is injected
    /// so tests can seed it.
    #[must_use]
    pub fn random_answer<R: Rng + ?Sized>(&self, length: WordLength, rng: &mut R) -> &Word {
        self.words(length)
            .choose(rng)
            .expect("answer lists are non-empty by construction")
    }
}
