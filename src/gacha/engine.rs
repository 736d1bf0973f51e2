//! The pull engine
//!
//! Performs weighted-random letter draws against a rarity table. The engine
//! is stateless: policy like "one beginner pull per session" belongs to the
//! caller.

use rand::Rng;
use rand::prelude::IndexedRandom;

use super::tiers::RarityTable;

/// The fixed vowel set used by the beginner pull guarantee
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Weighted-random letter draws over a rarity table
///
/// Borrows the table and an injected RNG so deterministic tests can force
/// specific tiers and letters.
pub struct PullEngine<'a, R: Rng> {
    table: &'a RarityTable,
    rng: &'a mut R,
}

impl<'a, R: Rng> PullEngine<'a, R> {
    pub fn new(table: &'a RarityTable, rng: &'a mut R) -> Self {
        Self { table, rng }
    }

    /// Draw one letter
    ///
    /// A uniform roll in [0, 1) selects the tier via cumulative thresholds,
    /// then a letter is chosen uniformly within the tier.
    ///
    /// # Panics
    /// Never: tiers are non-empty by table construction.
    pub fn single_pull(&mut self) -> char {
        let roll: f64 = self.rng.random();
        let tier = self.table.tier_for_roll(roll);
        *tier
            .letters
            .choose(&mut *self.rng)
            .expect("tiers are non-empty by construction")
    }

    /// Draw `n` independent letters, repeats allowed
    ///
    /// Pulling a letter already owned is a valid outcome; it just will not
    /// grow the inventory when merged.
    pub fn pull_many(&mut self, n: usize) -> Vec<char> {
        (0..n).map(|_| self.single_pull()).collect()
    }

    /// The first-ten-pull with a vowel guarantee
    ///
    /// Draws 9 letters normally; if none of them is a vowel, the 10th is a
    /// uniformly random vowel, otherwise a normal pull. Always returns 10
    /// letters with at least one vowel.
    ///
    /// # Panics
    /// Never: the vowel set is non-empty.
    pub fn beginner_ten_pull(&mut self) -> Vec<char> {
        let mut letters = self.pull_many(9);

        let tenth = if letters.iter().any(|c| VOWELS.contains(c)) {
            self.single_pull()
        } else {
            *VOWELS.choose(&mut *self.rng).expect("vowel set is non-empty")
        };
        letters.push(tenth);

        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gacha::tiers::RarityTier;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_pull_comes_from_table() {
        let table = RarityTable::standard();
        let all = table.all_letters();
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = PullEngine::new(&table, &mut rng);

        for _ in 0..200 {
            assert!(all.contains(&engine.single_pull()));
        }
    }

    #[test]
    fn single_pull_respects_single_tier_table() {
        // One tier at probability 1.0 makes every pull land in it
        let table =
            RarityTable::new(vec![RarityTier::new("only", &['Q', 'Z'], 1.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let mut engine = PullEngine::new(&table, &mut rng);

        for _ in 0..50 {
            let letter = engine.single_pull();
            assert!(letter == 'Q' || letter == 'Z');
        }
    }

    #[test]
    fn pull_many_returns_exactly_n() {
        let table = RarityTable::standard();
        let all = table.all_letters();
        let mut rng = StdRng::seed_from_u64(3);
        let mut engine = PullEngine::new(&table, &mut rng);

        for n in [0, 1, 7, 40] {
            let letters = engine.pull_many(n);
            assert_eq!(letters.len(), n);
            assert!(letters.iter().all(|c| all.contains(c)));
        }
    }

    #[test]
    fn beginner_ten_pull_always_has_a_vowel() {
        let table = RarityTable::standard();
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..1000 {
            let mut engine = PullEngine::new(&table, &mut rng);
            let letters = engine.beginner_ten_pull();
            assert_eq!(letters.len(), 10);
            assert!(
                letters.iter().any(|c| VOWELS.contains(c)),
                "no vowel in {letters:?}"
            );
        }
    }

    #[test]
    fn beginner_ten_pull_forces_vowel_from_vowel_free_deck() {
        // A deck with no vowels at all: the guarantee must kick in every time
        let table = RarityTable::new(vec![RarityTier::new(
            "consonants",
            &['Q', 'Z', 'X', 'J'],
            1.0,
        )])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let mut engine = PullEngine::new(&table, &mut rng);
            let letters = engine.beginner_ten_pull();
            assert!(VOWELS.contains(&letters[9]), "10th pull must be the vowel");
        }
    }
}
