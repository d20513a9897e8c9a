pub mod catalog;
pub mod comparison;
pub mod compatibility;
pub mod config;
pub mod domain;
pub mod engine;
pub mod matching;
pub mod routine;
pub mod similarity;

pub use catalog::{CatalogProvider, InMemoryCatalog};
pub use comparison::{
    compare_products, extreme_indices, ComparisonMetrics, IngredientConcentration, ProductMetrics,
};
pub use compatibility::{
    check_compatibility, find_compatible_products, CautionNote, CompatibilityLevel,
    CompatibilityResult, CompatibleProduct, PairingLevel,
};
pub use config::{ConfigError, EngineConfig};
pub use domain::product::{ActiveIngredient, PreferenceFlags, Product, ProductId, SizeUnit};
pub use domain::profile::{ReviewProfile, UserProfile};
pub use domain::review::{Review, ReviewId};
pub use engine::PersonalizationEngine;
pub use matching::{
    matches_concern, matches_ingredient, product_matches_user_concerns,
};
pub use routine::{classify_time_of_day, TimeOfDay, TimeOfDayClassifier, TimeOfDayRules};
pub use similarity::{
    calculate_similarity_weight, score_similar_products, weight_reviews, MatchTier, ScoredProduct,
    SimilarityWeight, WeightedReview,
};
