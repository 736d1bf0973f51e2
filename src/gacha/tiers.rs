//! Rarity tier configuration
//!
//! Letters are bucketed by inverse English frequency: the rarest letters sit
//! in the most probable tier, so a fresh deck skews toward hard-to-use
//! letters and the useful ones feel like jackpot pulls.

use thiserror::Error;

/// A named bucket of equiprobable letters with a tier-draw probability
#[derive(Debug, Clone, PartialEq)]
pub struct RarityTier {
    pub name: String,
    pub letters: Vec<char>,
    /// Probability of this tier being selected on a single pull
    pub probability: f64,
}

impl RarityTier {
    #[must_use]
    pub fn new(name: &str, letters: &[char], probability: f64) -> Self {
        Self {
            name: name.to_string(),
            letters: letters.to_vec(),
            probability,
        }
    }
}

/// Tier configuration errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TierError {
    #[error("rarity table has no tiers")]
    NoTiers,
    #[error("tier '{0}' has no letters")]
    EmptyTier(String),
    #[error("tier probabilities sum to {0}, expected 1.0")]
    ProbabilitiesDoNotSumToOne(f64),
}

/// A validated, ordered set of rarity tiers
///
/// Cumulative thresholds are computed once at construction; a pull draws a
/// uniform number in [0, 1) and walks the thresholds in tier order.
#[derive(Debug, Clone)]
pub struct RarityTable {
    tiers: Vec<RarityTier>,
    thresholds: Vec<f64>,
}

const PROBABILITY_EPSILON: f64 = 1e-9;

impl RarityTable {
    /// Build a table from tiers, validating the configuration
    ///
    /// # Errors
    /// Returns `TierError` if there are no tiers, any tier is empty, or the
    /// tier probabilities do not sum to 1.
    pub fn new(tiers: Vec<RarityTier>) -> Result<Self, TierError> {
        if tiers.is_empty() {
            return Err(TierError::NoTiers);
        }
        if let Some(empty) = tiers.iter().find(|t| t.letters.is_empty()) {
            return Err(TierError::EmptyTier(empty.name.clone()));
        }

        let total: f64 = tiers.iter().map(|t| t.probability).sum();
        if (total - 1.0).abs() > PROBABILITY_EPSILON {
            return Err(TierError::ProbabilitiesDoNotSumToOne(total));
        }

        let mut thresholds = Vec::with_capacity(tiers.len());
        let mut cumulative = 0.0;
        for tier in &tiers {
            cumulative += tier.probability;
            thresholds.push(cumulative);
        }

        Ok(Self { tiers, thresholds })
    }

    /// The classic deck: common/uncommon/rare/legendary at 50/40/8/2
    ///
    /// # Panics
    /// Never: the configuration is statically valid.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            RarityTier::new("common", &['Q', 'J', 'Z', 'X'], 0.50),
            RarityTier::new("uncommon", &['V', 'K', 'W', 'Y'], 0.40),
            RarityTier::new("rare", &['F', 'B', 'G', 'H', 'M', 'P', 'D', 'U', 'C'], 0.08),
            RarityTier::new(
                "legendary",
                &['L', 'S', 'N', 'T', 'O', 'I', 'R', 'A', 'E'],
                0.02,
            ),
        ])
        .expect("standard table is valid")
    }

    /// The alternate deck: useless/uncommon/epic/legendary at 40/50/8/2
    ///
    /// # Panics
    /// Never: the configuration is statically valid.
    #[must_use]
    pub fn frequency() -> Self {
        Self::new(vec![
            RarityTier::new("useless", &['Q', 'J', 'Z', 'X'], 0.40),
            RarityTier::new("uncommon", &['V', 'K', 'W', 'Y'], 0.50),
            RarityTier::new("epic", &['F', 'B', 'G', 'H', 'M', 'P', 'D', 'U', 'C'], 0.08),
            RarityTier::new(
                "legendary",
                &['L', 'S', 'N', 'T', 'O', 'I', 'R', 'A', 'E'],
                0.02,
            ),
        ])
        .expect("frequency table is valid")
    }

    /// The tiers in draw order
    #[must_use]
    pub fn tiers(&self) -> &[RarityTier] {
        &self.tiers
    }

    /// Select the tier whose cumulative threshold bracket contains `roll`
    ///
    /// `roll` must be in [0, 1); the last tier absorbs any floating-point
    /// shortfall at the top of the range.
    #[must_use]
    pub(crate) fn tier_for_roll(&self, roll: f64) -> &RarityTier {
        for (tier, &threshold) in self.tiers.iter().zip(&self.thresholds) {
            if roll < threshold {
                return tier;
            }
        }
        &self.tiers[self.tiers.len() - 1]
    }

    /// Every letter across all tiers
    #[must_use]
    pub fn all_letters(&self) -> Vec<char> {
        self.tiers.iter().flat_map(|t| t.letters.clone()).collect()
    }
}
