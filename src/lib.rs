//! WordUp
//!
//! A small family of word-guessing games: a Wordle-style game and a
//! letter-collection ("gacha") variant where guesses are limited to letters
//! pulled from a tiered rarity deck.
//!
//! # Quick Start
//!
//! ```rust
//! use wordup::core::{LetterStatus, Word, score};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let feedback = score(&guess, &answer);
//! assert_eq!(feedback.len(), 5);
//! assert_eq!(feedback[2], LetterStatus::Correct); // 'a'
//! ```

// Core domain types
pub mod core;

// Answer word tables
pub mod answers;

// Dictionary word validation
pub mod dictionary;

// Weighted-random letter pulls and the owned-letter inventory
pub mod gacha;

// Game session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
