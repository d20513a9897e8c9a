//! "Reviewers like you" weighting: six independently weighted profile
//! signals summed into a 0-100 similarity weight with a discrete tier.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{complexion_position, ReviewProfile, UserProfile};
use crate::domain::review::Review;
use crate::matching::matches_concern;

use super::{DEFAULT_REVIEW_WEIGHTS, MAX_SIMILARITY_SCORE};

/// Largest age gap, in years, still counted as a similar-age signal.
pub const AGE_WINDOW_YEARS: u8 = 5;

/// Points per profile signal. Concern points apply per matched concern;
/// every other signal is binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewSignalWeights {
    pub skin_type: u32,
    pub concern: u32,
    pub complexion: u32,
    pub sensitivity: u32,
    pub lifestyle: u32,
    pub age: u32,
}

impl Default for ReviewSignalWeights {
    fn default() -> Self {
        DEFAULT_REVIEW_WEIGHTS
    }
}

/// Discrete bucket derived from the clamped similarity score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Full,
    Strong,
    Partial,
    Related,
    None,
}

impl MatchTier {
    /// Bucket a clamped score: full >= 70, strong >= 50, partial >= 30,
    /// related >= 15, none below.
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            MatchTier::Full
        } else if score >= 50 {
            MatchTier::Strong
        } else if score >= 30 {
            MatchTier::Partial
        } else if score >= 15 {
            MatchTier::Related
        } else {
            MatchTier::None
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MatchTier::Full => "Profile just like yours",
            MatchTier::Strong => "Very similar profile",
            MatchTier::Partial => "Partly similar profile",
            MatchTier::Related => "Some profile overlap",
            MatchTier::None => "Different profile",
        }
    }
}

/// A reviewer's similarity to the current user: clamped 0-100 score, tier,
/// and one human-readable label per triggered signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityWeight {
    pub score: u32,
    pub tier: MatchTier,
    pub match_details: Vec<String>,
}

/// A review annotated with its similarity weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedReview {
    pub review: Review,
    pub weight: SimilarityWeight,
}

/// Weighs reviewer profiles against the current user profile.
#[derive(Debug, Clone)]
pub struct ReviewScorer {
    weights: ReviewSignalWeights,
}

impl ReviewScorer {
    pub fn new() -> Self {
        Self { weights: ReviewSignalWeights::default() }
    }

    pub fn with_weights(weights: ReviewSignalWeights) -> Self {
        Self { weights }
    }

    /// Annotate and order a review list for display: similarity score
    /// descending, newest first among equals.
    pub fn weigh_all(&self, reviews: &[Review], user: &UserProfile) -> Vec<WeightedReview> {
        let mut weighted: Vec<WeightedReview> = reviews
            .iter()
            .map(|review| WeightedReview {
                review: review.clone(),
                weight: self.weigh(&review.profile, user),
            })
            .collect();

        weighted.sort_by(|left, right| {
            right
                .weight
                .score
                .cmp(&left.weight.score)
                .then(right.review.posted_at.cmp(&left.review.posted_at))
        });
        weighted
    }

    pub fn weigh(&self, review: &ReviewProfile, user: &UserProfile) -> SimilarityWeight {
        let weights = &self.weights;
        let mut score = 0u32;
        let mut details: Vec<String> = Vec::new();

        if let (Some(review_skin), Some(user_skin)) = (&review.skin_type, &user.skin_type) {
            if review_skin.eq_ignore_ascii_case(user_skin) {
                score += weights.skin_type;
                details.push("Same skin type".to_string());
            }
        }

        let matched_concerns = review
            .skin_concerns
            .iter()
            .filter(|concern| matches_concern(concern, &user.concerns))
            .count() as u32;
        if matched_concerns > 0 {
            score += weights.concern * matched_concerns;
            let plural = if matched_concerns == 1 { "" } else { "s" };
            details.push(format!("{matched_concerns} shared concern{plural}"));
        }

        if let (Some(review_tier), Some(user_tier)) = (
            review.complexion.as_deref().and_then(complexion_position),
            user.complexion.as_deref().and_then(complexion_position),
        ) {
            let distance = review_tier.abs_diff(user_tier);
            if distance == 0 {
                score += weights.complexion;
                details.push("Same complexion".to_string());
            } else if distance == 1 {
                score += weights.complexion;
                details.push("Similar complexion".to_string());
            }
        }

        if let (Some(review_sensitivity), Some(user_sensitivity)) =
            (&review.sensitivity, &user.sensitivity)
        {
            if !review_sensitivity.is_empty()
                && review_sensitivity.eq_ignore_ascii_case(user_sensitivity)
            {
                score += weights.sensitivity;
                details.push("Same sensitivity level".to_string());
            }
        }

        let lifestyle_overlap = review.lifestyle.iter().any(|tag| {
            user.lifestyle.iter().any(|user_tag| user_tag.eq_ignore_ascii_case(tag))
        });
        if lifestyle_overlap {
            score += weights.lifestyle;
            details.push("Shared lifestyle".to_string());
        }

        if let (Some(review_age), Some(user_age)) = (review.age, user.age) {
            if review_age.abs_diff(user_age) <= AGE_WINDOW_YEARS {
                score += weights.age;
                details.push("Similar age".to_string());
            }
        }

        let score = score.min(MAX_SIMILARITY_SCORE);
        SimilarityWeight { score, tier: MatchTier::from_score(score), match_details: details }
    }
}

impl Default for ReviewScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Weigh one reviewer profile with the default signal weights.
pub fn calculate_similarity_weight(review: &ReviewProfile, user: &UserProfile) -> SimilarityWeight {
    ReviewScorer::new().weigh(review, user)
}

/// Annotate and order a review list with the default signal weights.
pub fn weight_reviews(reviews: &[Review], user: &UserProfile) -> Vec<WeightedReview> {
    ReviewScorer::new().weigh_all(reviews, user)
}
