//! Owned-letter inventory
//!
//! Tracks which letters a session has pulled. Grows monotonically: pulls only
//! add. The pull counter exists purely for the end-of-game cost display.

use rustc_hash::FxHashSet;

/// The set of letters a player owns, plus a cosmetic pull counter
#[derive(Debug, Default, Clone)]
pub struct LetterInventory {
    owned: FxHashSet<char>,
    pulls_spent: usize,
}

impl LetterInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive ownership check
    #[must_use]
    pub fn owns(&self, letter: char) -> bool {
        self.owned.contains(&letter.to_ascii_uppercase())
    }

    /// Merge drawn letters into the owned set (idempotent per letter)
    ///
    /// Every drawn letter counts toward `pulls_spent`, owned or not.
    pub fn add(&mut self, letters: &[char]) {
        for &letter in letters {
            self.owned.insert(letter.to_ascii_uppercase());
        }
        self.pulls_spent += letters.len();
    }

    /// Number of distinct letters owned
    #[must_use]
    pub fn len(&self) -> usize {
        self.owned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    /// Total letters drawn this session, for the cost display
    #[must_use]
    pub fn pulls_spent(&self) -> usize {
        self.pulls_spent
    }

    /// Owned letters in alphabetical order, for keyboard rendering
    #[must_use]
    pub fn owned(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.owned.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// First letter of `word` not in the inventory, if any
    #[must_use]
    pub fn first_unowned(&self, word: &str) -> Option<char> {
        word.chars().find(|&c| !self.owns(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent_per_letter() {
        let mut inventory = LetterInventory::new();
        inventory.add(&['A', 'B']);
        assert_eq!(inventory.len(), 2);

        inventory.add(&['A']);
        assert_eq!(inventory.len(), 2); // No growth on re-add

        inventory.add(&['C']);
        assert_eq!(inventory.len(), 3); // Exactly one more
    }

    #[test]
    fn ownership_is_case_insensitive() {
        let mut inventory = LetterInventory::new();
        inventory.add(&['a', 'B']);

        assert!(inventory.owns('A'));
        assert!(inventory.owns('a'));
        assert!(inventory.owns('b'));
        assert!(!inventory.owns('c'));
    }

    #[test]
    fn pulls_spent_counts_every_draw() {
        let mut inventory = LetterInventory::new();
        inventory.add(&['A', 'A', 'A']);

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.pulls_spent(), 3);
    }

    #[test]
    fn owned_is_sorted() {
        let mut inventory = LetterInventory::new();
        inventory.add(&['z', 'm', 'a']);
        assert_eq!(inventory.owned(), vec!['A', 'M', 'Z']);
    }

    #[test]
    fn first_unowned_names_the_offender() {
        let mut inventory = LetterInventory::new();
        inventory.add(&['c', 'r', 'a', 'n']);

        assert_eq!(inventory.first_unowned("crane"), Some('e'));
        assert_eq!(inventory.first_unowned("narc"), None);
    }
}
