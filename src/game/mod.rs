//! Game session state machine
//!
//! Wires answer selection, dictionary validation, feedback scoring, and (in
//! collection mode) the letter inventory into one play-through. All state is
//! private to the session and discarded when it ends; nothing persists.

use rand::Rng;
use thiserror::Error;
use tracing::warn;

use crate::answers::{AnswerTable, WordLength};
use crate::core::{LetterStatus, Word, WordError, score};
use crate::dictionary::Validator;
use crate::gacha::{LetterInventory, PullEngine, RarityTable};

/// Default maximum number of guesses
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Values an embedding UI supplies to the core
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub length: WordLength,
    pub max_guesses: usize,
    /// Selects the letter-collection variant
    pub collection: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new(length: WordLength) -> Self {
        Self {
            length,
            max_guesses: DEFAULT_MAX_GUESSES,
            collection: false,
        }
    }
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A scored guess in the session history
#[derive(Debug, Clone)]
pub struct GuessFeedback {
    pub guess: Word,
    pub statuses: Vec<LetterStatus>,
}

/// Reasons a guess submission is rejected
///
/// None of these consume a guess or mutate session state, except
/// `ScoringMismatch`, which forces the session into `Lost` as a fail-safe.
#[derive(Debug, Error)]
pub enum GuessError {
    #[error("Word must be {expected} letters.")]
    WrongLength { expected: usize, got: usize },
    #[error("Guess contains invalid input: {0}")]
    NotAWellFormedWord(#[from] WordError),
    #[error("You don't own the letter '{}' yet. Pull for more letters!", .0.to_ascii_uppercase())]
    UnownedLetter(char),
    #[error("'{0}' is not a valid English word.")]
    NotAWord(String),
    #[error("There was an error checking your guess. The answer was '{answer}'. Sorry for the bug!")]
    ScoringMismatch { answer: String },
}

/// One complete play-through
///
/// Holds the secret answer (drawn once at construction), the guess history,
/// and — in collection mode — the owned-letter inventory. `submit_guess`
/// takes `&mut self`, so at most one submission can be in flight; no separate
/// mutual-exclusion flag is needed.
pub struct GameSession {
    config: GameConfig,
    answer: Word,
    history: Vec<GuessFeedback>,
    status: GameStatus,
    inventory: Option<LetterInventory>,
    beginner_pull_used: bool,
}

impl GameSession {
    /// Start a session with an answer drawn uniformly from the table
    #[must_use]
    pub fn new<R: Rng + ?Sized>(config: GameConfig, table: &AnswerTable, rng: &mut R) -> Self {
        let answer = table.random_answer(config.length, rng).clone();
        Self::with_answer(config, answer)
    }

    /// Start a session with a fixed answer (tests, daily-word modes)
    #[must_use]
    pub fn with_answer(config: GameConfig, answer: Word) -> Self {
        let inventory = config.collection.then(LetterInventory::new);
        Self {
            config,
            answer,
            history: Vec::new(),
            status: GameStatus::Playing,
            inventory,
            beginner_pull_used: false,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }

    /// The answer, revealed at game end
    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    /// The collection-variant inventory, if this session has one
    #[must_use]
    pub fn inventory(&self) -> Option<&LetterInventory> {
        self.inventory.as_ref()
    }

    /// Whether the one-per-session beginner pull is still available
    #[must_use]
    pub fn beginner_pull_available(&self) -> bool {
        self.config.collection && !self.beginner_pull_used
    }

    /// Draw letters into the inventory
    ///
    /// The first call in a session uses the vowel-guaranteed ten-pull; later
    /// calls draw `n` plain pulls. Returns the drawn letters (repeats
    /// allowed), or `None` outside collection mode.
    pub fn pull_letters<R: Rng>(
        &mut self,
        table: &RarityTable,
        rng: &mut R,
        n: usize,
    ) -> Option<Vec<char>> {
        let inventory = self.inventory.as_mut()?;

        let mut engine = PullEngine::new(table, rng);
        let letters = if self.beginner_pull_used {
            engine.pull_many(n)
        } else {
            self.beginner_pull_used = true;
            engine.beginner_ten_pull()
        };

        inventory.add(&letters);
        Some(letters)
    }

    /// Submit a guess
    ///
    /// Checks, in order: length, letter ownership (collection mode only),
    /// dictionary validity, then scores against the answer. Rejections leave
    /// the session untouched and consume no guess; the player resubmits
    /// manually.
    ///
    /// If scoring ever returns its length-mismatch sentinel here — possible
    /// only when the answer table and the configured length disagree — the
    /// session is forced into `Lost` with the answer revealed rather than
    /// panicking.
    ///
    /// # Errors
    /// Returns `GuessError` describing the rejection.
    pub async fn submit_guess(
        &mut self,
        input: &str,
        validator: &dyn Validator,
    ) -> Result<GuessFeedback, GuessError> {
        let expected = self.config.length.as_usize();
        let got = input.chars().count();
        if got != expected {
            return Err(GuessError::WrongLength { expected, got });
        }

        let guess = Word::new(input)?;

        if let Some(inventory) = &self.inventory
            && let Some(letter) = inventory.first_unowned(guess.text())
        {
            return Err(GuessError::UnownedLetter(letter));
        }

        if !validator.is_valid_word(guess.text()).await {
            return Err(GuessError::NotAWord(guess.text().to_string()));
        }

        let statuses = score(&guess, &self.answer);
        if statuses.is_empty() {
            warn!(
                "scoring sentinel hit: guess length {} vs answer length {}",
                guess.len(),
                self.answer.len()
            );
            self.status = GameStatus::Lost;
            return Err(GuessError::ScoringMismatch {
                answer: self.answer.text().to_string(),
            });
        }

        let feedback = GuessFeedback { guess, statuses };
        self.history.push(feedback.clone());

        if feedback.guess == self.answer {
            self.status = GameStatus::Won;
        } else if self.history.len() >= self.config.max_guesses {
            self.status = GameStatus::Lost;
        }

        Ok(feedback)
    }
}
