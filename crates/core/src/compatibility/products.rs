use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::matching::matches_concern;

use super::rules::check_compatibility;
use super::CompatibilityLevel;

/// Default number of compatible products returned.
pub const DEFAULT_COMPATIBLE_LIMIT: usize = 8;

/// Profile-fit boost per matched candidate concern, and for skin-type overlap.
const CONCERN_BOOST: f64 = 10.0;
const SKIN_TYPE_BOOST: f64 = 10.0;

/// Cap on collected reasons and cautions after deduplication.
const MAX_NOTES: usize = 2;

/// How a candidate pairs with the reference product. Ordering is the
/// primary, categorical sort key of the result list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingLevel {
    FullyCompatible,
    UseWithCare,
}

impl PairingLevel {
    fn rank(&self) -> u8 {
        match self {
            PairingLevel::FullyCompatible => 0,
            PairingLevel::UseWithCare => 1,
        }
    }
}

/// A soft-conflict note surfaced to the user, with the suggested workaround
/// when the rule table offers one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CautionNote {
    pub reason: String,
    pub resolution: Option<String>,
}

/// A candidate judged usable alongside the reference product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompatibleProduct {
    pub product: Product,
    pub level: PairingLevel,
    /// safe / (safe + caution) over the evaluated ingredient pairs, as a
    /// percentage. Avoid pairs never reach this ratio: any avoid excludes
    /// the candidate before it is computed.
    pub compatibility: f64,
    pub profile_boost: f64,
    pub reasons: Vec<String>,
    pub cautions: Vec<CautionNote>,
}

/// Find products usable alongside `reference`, ranked best pairing first.
///
/// Candidates share no category with the reference (the search is for
/// complementary products), must declare key ingredients, and are dropped
/// outright when any ingredient pair is classified avoid. Within each
/// pairing level, candidates rank by compatibility percentage plus
/// profile-fit boost.
pub fn find_compatible_products(
    catalog: &[Product],
    reference: &Product,
    user_concerns: &[String],
    user_skin_type: Option<&str>,
    limit: usize,
) -> Vec<CompatibleProduct> {
    if !reference.has_key_ingredients() {
        return Vec::new();
    }

    let mut results: Vec<CompatibleProduct> = Vec::new();

    for candidate in catalog {
        if candidate.id == reference.id
            || candidate.category.eq_ignore_ascii_case(&reference.category)
            || !candidate.has_key_ingredients()
        {
            continue;
        }

        let mut safe_count = 0u32;
        let mut caution_count = 0u32;
        let mut avoid_count = 0u32;
        let mut reasons: Vec<String> = Vec::new();
        let mut cautions: Vec<CautionNote> = Vec::new();

        for reference_ingredient in &reference.key_ingredients {
            for candidate_ingredient in &candidate.key_ingredients {
                if reference_ingredient.eq_ignore_ascii_case(candidate_ingredient) {
                    continue;
                }
                let outcome = check_compatibility(reference_ingredient, candidate_ingredient);
                match outcome.level {
                    CompatibilityLevel::Safe => {
                        safe_count += 1;
                        if !outcome.is_generic() && !reasons.contains(&outcome.reason) {
                            reasons.push(outcome.reason);
                        }
                    }
                    CompatibilityLevel::Caution => {
                        caution_count += 1;
                        if !cautions.iter().any(|note| note.reason == outcome.reason) {
                            cautions.push(CautionNote {
                                reason: outcome.reason,
                                resolution: outcome.resolution,
                            });
                        }
                    }
                    CompatibilityLevel::Avoid => avoid_count += 1,
                }
            }
        }

        if avoid_count > 0 {
            continue;
        }

        let evaluated = safe_count + caution_count;
        let compatibility = if evaluated == 0 {
            100.0
        } else {
            f64::from(safe_count) / f64::from(evaluated) * 100.0
        };

        let level = if caution_count == 0 {
            PairingLevel::FullyCompatible
        } else {
            PairingLevel::UseWithCare
        };

        let mut profile_boost = 0.0;
        for concern in &candidate.concerns {
            if matches_concern(concern, user_concerns) {
                profile_boost += CONCERN_BOOST;
            }
        }
        if let Some(skin_type) = user_skin_type {
            if candidate.suits_skin_type(skin_type) {
                profile_boost += SKIN_TYPE_BOOST;
            }
        }

        reasons.truncate(MAX_NOTES);
        cautions.truncate(MAX_NOTES);
        if reasons.is_empty() {
            reasons.push(generic_pairing_reason(reference, candidate));
        }

        results.push(CompatibleProduct {
            product: candidate.clone(),
            level,
            compatibility,
            profile_boost,
            reasons,
            cautions,
        });
    }

    results.sort_by(|left, right| {
        left.level.rank().cmp(&right.level.rank()).then(
            (right.compatibility + right.profile_boost)
                .partial_cmp(&(left.compatibility + left.profile_boost))
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
    results.truncate(limit);
    results
}

/// Fallback reason naming each product's leading key ingredients, used when
/// no specific safe reason survived deduplication.
fn generic_pairing_reason(reference: &Product, candidate: &Product) -> String {
    format!(
        "{} works alongside {}",
        leading_ingredients(reference),
        leading_ingredients(candidate)
    )
}

fn leading_ingredients(product: &Product) -> String {
    product.key_ingredients.iter().take(2).cloned().collect::<Vec<_>>().join(" and ")
}
