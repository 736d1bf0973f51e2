//! Weighted-random letter pulls
//!
//! The collection game variant hands out letters through a gacha-style pull:
//! a rarity tier is drawn by weight, then a letter uniformly within the tier.
//! Tier tables are configuration data validated at construction; the engine
//! itself is stateless.

mod engine;
mod inventory;
mod tiers;

pub use engine::{PullEngine, VOWELS};
pub use inventory::LetterInventory;
pub use tiers::{RarityTable, RarityTier, TierError};
