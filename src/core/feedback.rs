//! Guess feedback scoring
//!
//! Classifies each letter of a guess against the secret answer as
//! correct/present/absent, with proper handling of duplicate letters.

use super::Word;

/// Per-letter classification of a guess against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter, right position
    Correct,
    /// Letter exists elsewhere in the answer (after duplicate resolution)
    Present,
    /// Letter is not in the answer, or all its occurrences are spoken for
    Absent,
}

/// Score a guess against the answer
///
/// Returns one status per guess position. If the guess and answer lengths
/// differ, returns an empty vector — the "incomparable" sentinel callers use
/// to short-circuit, not an error.
///
/// # Algorithm
/// Two passes, so duplicate letters resolve the way Wordle players expect:
/// 1. Mark exact positional matches as `Correct` and consume the matched
///    answer letter from the available pool.
/// 2. Left to right, mark remaining positions `Present` while an unconsumed
///    occurrence of the letter exists in the pool (consuming one per match),
///    otherwise `Absent`.
///
/// Exact matches always take priority, and earlier guess positions claim
/// remaining occurrences first.
///
/// # Examples
/// ```
/// use wordup::core::{LetterStatus::*, Word, score};
///
/// let guess = Word::new("aplex").unwrap();
/// let answer = Word::new("apple").unwrap();
/// assert_eq!(score(&guess, &answer), vec![Correct, Correct, Present, Present, Absent]);
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> Vec<LetterStatus> {
    if guess.len() != answer.len() {
        return Vec::new();
    }

    let guess_bytes = guess.bytes();
    let answer_bytes = answer.bytes();
    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut answer_available = answer.char_counts();

    // First pass: exact positional matches
    for (i, status) in result.iter_mut().enumerate() {
        if guess_bytes[i] == answer_bytes[i] {
            *status = LetterStatus::Correct;

            // Remove from available pool
            if let Some(count) = answer_available.get_mut(&guess_bytes[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present-but-wrong-position from the remaining pool
    for (i, status) in result.iter_mut().enumerate() {
        if *status != LetterStatus::Correct
            && let Some(count) = answer_available.get_mut(&guess_bytes[i])
            && *count > 0
        {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn run(guess: &str, answer: &str) -> Vec<LetterStatus> {
        score(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(run("abcde", "fghij"), vec![Absent; 5]);
    }

    #[test]
    fn score_exact_match_all_correct() {
        for word in ["crane", "planet", "teacher", "aaaaa"] {
            let statuses = run(word, word);
            assert_eq!(statuses.len(), word.len());
            assert!(statuses.iter().all(|&s| s == Correct), "{word}");
        }
    }

    #[test]
    fn score_length_mismatch_is_empty_sentinel() {
        assert_eq!(run("crane", "planet"), Vec::new());
        assert_eq!(run("teacher", "crane"), Vec::new());
    }

    #[test]
    fn score_anagram_all_present() {
        // Permutation with no position matching its original
        assert_eq!(run("pleap", "apple"), vec![Present; 5]);
    }

    #[test]
    fn score_duplicate_tie_break() {
        // Second 'p' in the guess claims the answer's remaining 'p';
        // the guess 'e' claims the answer's 'e'; 'x' has nothing left.
        assert_eq!(
            run("aplex", "apple"),
            vec![Correct, Correct, Present, Present, Absent]
        );
    }

    #[test]
    fn score_duplicate_guess_letter_single_answer_occurrence() {
        // Answer has one 'e'; only the earliest unmatched guess 'e' is present
        assert_eq!(
            run("eexxx", "amble"),
            vec![Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn score_correct_consumes_before_present() {
        // SPEED vs ERASE: S present, P absent, both E's present, D absent
        assert_eq!(
            run("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn score_duplicate_with_exact_priority() {
        // ROBOT vs FLOOR: second O is exactly placed and claims its letter
        // first; the first O takes the remaining occurrence.
        assert_eq!(
            run("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn score_longer_lengths() {
        assert_eq!(
            run("dinner", "winner"),
            vec![Absent, Correct, Correct, Correct, Correct, Correct]
        );
        let statuses = run("teacher", "theater");
        assert_eq!(statuses.len(), 7);
        assert_eq!(statuses[0], Correct); // t
        assert_eq!(statuses[6], Correct); // r
    }

    #[test]
    fn score_statuses_are_exhaustive() {
        for status in run("crane", "slate") {
            assert!(matches!(status, Correct | Present | Absent));
        }
    }
}
