//! Ingredient co-use compatibility: the pairwise interaction checker and
//! the complementary-product finder built on top of it.

mod products;
mod rules;

pub use products::{
    find_compatible_products, CautionNote, CompatibleProduct, PairingLevel,
    DEFAULT_COMPATIBLE_LIMIT,
};
pub use rules::{check_compatibility, NO_KNOWN_CONFLICTS_REASON};

use serde::{Deserialize, Serialize};

/// Classification of an unordered ingredient pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityLevel {
    Safe,
    Caution,
    Avoid,
}

/// Outcome of checking one ingredient pair. Symmetric in the pair: both
/// orderings produce the same level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub level: CompatibilityLevel,
    pub reason: String,
    pub resolution: Option<String>,
}

impl CompatibilityResult {
    /// Whether the reason is the generic no-known-conflicts filler rather
    /// than a specific statement about the pair.
    pub fn is_generic(&self) -> bool {
        self.reason == NO_KNOWN_CONFLICTS_REASON
    }
}
