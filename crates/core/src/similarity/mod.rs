//! Profile-driven similarity scoring: "more like this" product ranking and
//! "reviewers like you" weighting.

mod products;
mod reviews;

pub use products::{
    score_similar_products, ScoredProduct, SimilarityScorer, SimilarityWeights,
    HIGH_RATING_THRESHOLD, TOP_RATING_THRESHOLD,
};
pub use reviews::{
    calculate_similarity_weight, weight_reviews, MatchTier, ReviewScorer, ReviewSignalWeights,
    SimilarityWeight, WeightedReview, AGE_WINDOW_YEARS,
};

/// Default point table for product similarity.
pub const DEFAULT_SIMILARITY_WEIGHTS: SimilarityWeights = SimilarityWeights {
    same_category: 20,
    shared_concern: 10,
    user_concern_match: 12,
    skin_type_match: 15,
    shared_ingredient: 8,
    beneficial_ingredient: 6,
    shared_preference: 6,
    top_rating_bonus: 10,
    high_rating_bonus: 5,
};

/// Default signal weights for review similarity.
pub const DEFAULT_REVIEW_WEIGHTS: ReviewSignalWeights = ReviewSignalWeights {
    skin_type: 40,
    concern: 15,
    complexion: 10,
    sensitivity: 10,
    lifestyle: 5,
    age: 5,
};

/// Similar-product results returned by default.
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Ceiling for the review similarity score.
pub const MAX_SIMILARITY_SCORE: u32 = 100;
