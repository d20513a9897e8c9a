//! "More like this" ranking: additive point system scoring every catalog
//! product against a reference product and the user's profile.

use serde::{Deserialize, Serialize};

use crate::domain::product::{PreferenceFlags, Product};
use crate::matching::{matches_concern, matches_ingredient};

use super::DEFAULT_SIMILARITY_WEIGHTS;

/// Rating thresholds for the mutually exclusive rating bonuses, checked
/// top tier first.
pub const TOP_RATING_THRESHOLD: f64 = 4.8;
pub const HIGH_RATING_THRESHOLD: f64 = 4.5;

/// Points per scoring signal. Points are additive, never normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    /// Same category as the reference.
    pub same_category: u32,
    /// Per concern shared with the reference (exact, case-insensitive).
    pub shared_concern: u32,
    /// Per candidate concern matching a user concern.
    pub user_concern_match: u32,
    /// Skin-type overlap with the user (exact or "all").
    pub skin_type_match: u32,
    /// Per key ingredient shared with the reference.
    pub shared_ingredient: u32,
    /// Per key ingredient beneficial for a user concern.
    pub beneficial_ingredient: u32,
    /// Per preference flag set on both product and user.
    pub shared_preference: u32,
    /// Rating at or above `TOP_RATING_THRESHOLD`.
    pub top_rating_bonus: u32,
    /// Rating at or above `HIGH_RATING_THRESHOLD` but below the top tier.
    pub high_rating_bonus: u32,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        DEFAULT_SIMILARITY_WEIGHTS
    }
}

/// A candidate product with its accumulated score and the user-facing
/// explanation strings generated alongside it.
///
/// The reason list is a best-effort explanation, not an audit trail: only
/// the category, shared-concern, user-concern and rating signals produce
/// reasons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    pub product: Product,
    pub score: u32,
    pub match_reasons: Vec<String>,
}

/// Scores catalog products against a reference product and user profile.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    weights: SimilarityWeights,
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self { weights: SimilarityWeights::default() }
    }

    pub fn with_weights(weights: SimilarityWeights) -> Self {
        Self { weights }
    }

    /// Rank every catalog product except the reference. Products scoring
    /// zero are excluded entirely; ties keep catalog encounter order.
    pub fn score_catalog(
        &self,
        catalog: &[Product],
        reference: &Product,
        user_concerns: &[String],
        user_skin_type: Option<&str>,
        user_preferences: &PreferenceFlags,
        limit: usize,
    ) -> Vec<ScoredProduct> {
        let mut scored: Vec<ScoredProduct> = catalog
            .iter()
            .filter(|candidate| candidate.id != reference.id)
            .filter_map(|candidate| {
                let (score, match_reasons) = self.score_candidate(
                    candidate,
                    reference,
                    user_concerns,
                    user_skin_type,
                    user_preferences,
                );
                (score > 0).then(|| ScoredProduct {
                    product: candidate.clone(),
                    score,
                    match_reasons,
                })
            })
            .collect();

        scored.sort_by(|left, right| right.score.cmp(&left.score));
        scored.truncate(limit);
        scored
    }

    fn score_candidate(
        &self,
        candidate: &Product,
        reference: &Product,
        user_concerns: &[String],
        user_skin_type: Option<&str>,
        user_preferences: &PreferenceFlags,
    ) -> (u32, Vec<String>) {
        let weights = &self.weights;
        let mut score = 0u32;
        let mut reasons: Vec<String> = Vec::new();

        if candidate.category.eq_ignore_ascii_case(&reference.category) {
            score += weights.same_category;
            reasons.push(format!("Same category: {}", reference.category));
        }

        for concern in &candidate.concerns {
            if reference.concerns.iter().any(|other| other.eq_ignore_ascii_case(concern)) {
                score += weights.shared_concern;
                reasons.push(format!("Also targets {concern}"));
            }
        }

        let user_concern_matches = candidate
            .concerns
            .iter()
            .filter(|concern| matches_concern(concern, user_concerns))
            .count() as u32;
        if user_concern_matches > 0 {
            score += weights.user_concern_match * user_concern_matches;
            reasons.push("Matches your concerns".to_string());
        }

        if let Some(skin_type) = user_skin_type {
            if candidate.suits_skin_type(skin_type) {
                score += weights.skin_type_match;
            }
        }

        for ingredient in &candidate.key_ingredients {
            if reference.key_ingredients.iter().any(|other| other.eq_ignore_ascii_case(ingredient))
            {
                score += weights.shared_ingredient;
            }
        }

        for ingredient in &candidate.key_ingredients {
            if matches_ingredient(ingredient, user_concerns) {
                score += weights.beneficial_ingredient;
            }
        }

        score += weights.shared_preference
            * candidate.preferences.shared_count(user_preferences) as u32;

        if candidate.rating >= TOP_RATING_THRESHOLD {
            score += weights.top_rating_bonus;
            reasons.push(format!("Highly rated: {:.1}/5", candidate.rating));
        } else if candidate.rating >= HIGH_RATING_THRESHOLD {
            score += weights.high_rating_bonus;
            reasons.push(format!("Highly rated: {:.1}/5", candidate.rating));
        }

        (score, reasons)
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank with the default weights. Convenience over [`SimilarityScorer`].
pub fn score_similar_products(
    catalog: &[Product],
    reference: &Product,
    user_concerns: &[String],
    user_skin_type: Option<&str>,
    user_preferences: &PreferenceFlags,
    limit: usize,
) -> Vec<ScoredProduct> {
    SimilarityScorer::new().score_catalog(
        catalog,
        reference,
        user_concerns,
        user_skin_type,
        user_preferences,
        limit,
    )
}
