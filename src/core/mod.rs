//! Core domain types for the word games
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond fast hash maps. All types here are pure and directly testable.

mod feedback;
mod word;

pub use feedback::{LetterStatus, score};
pub use word::{Word, WordError};
