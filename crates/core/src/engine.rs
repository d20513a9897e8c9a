//! The engine facade the storefront calls. One method per scorer, wired to
//! a single [`EngineConfig`]; this is the only module that logs.

use tracing::debug;

use crate::compatibility::{find_compatible_products, CompatibleProduct};
use crate::comparison::{compare_products, ComparisonMetrics};
use crate::config::EngineConfig;
use crate::domain::product::Product;
use crate::domain::profile::{ReviewProfile, UserProfile};
use crate::domain::review::Review;
use crate::routine::{TimeOfDay, TimeOfDayClassifier};
use crate::similarity::{
    ReviewScorer, ScoredProduct, SimilarityScorer, SimilarityWeight, WeightedReview,
};

/// Stateless scoring facade. Every method is a pure function of its
/// arguments; the engine holds only configuration.
#[derive(Debug, Clone)]
pub struct PersonalizationEngine {
    similarity: SimilarityScorer,
    reviews: ReviewScorer,
    classifier: TimeOfDayClassifier,
    config: EngineConfig,
}

impl PersonalizationEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            similarity: SimilarityScorer::with_weights(config.similarity.weights),
            reviews: ReviewScorer::with_weights(config.reviews),
            classifier: TimeOfDayClassifier::new(config.routine.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Products similar to `reference`, best match first.
    pub fn similar_products(
        &self,
        catalog: &[Product],
        reference: &Product,
        user: &UserProfile,
    ) -> Vec<ScoredProduct> {
        let ranked = self.similarity.score_catalog(
            catalog,
            reference,
            &user.concerns,
            user.skin_type.as_deref(),
            &user.preferences,
            self.config.similarity.limit,
        );
        debug!(
            reference = %reference.id.0,
            candidates = catalog.len(),
            matched = ranked.len(),
            "ranked similar products"
        );
        ranked
    }

    /// Products usable alongside `reference`, best pairing first.
    pub fn compatible_products(
        &self,
        catalog: &[Product],
        reference: &Product,
        user: &UserProfile,
    ) -> Vec<CompatibleProduct> {
        let found = find_compatible_products(
            catalog,
            reference,
            &user.concerns,
            user.skin_type.as_deref(),
            self.config.compatibility.limit,
        );
        debug!(
            reference = %reference.id.0,
            candidates = catalog.len(),
            compatible = found.len(),
            "searched compatible products"
        );
        found
    }

    /// Similarity weight for one reviewer profile.
    pub fn review_similarity(
        &self,
        review: &ReviewProfile,
        user: &UserProfile,
    ) -> SimilarityWeight {
        self.reviews.weigh(review, user)
    }

    /// A review list annotated and ordered for display.
    pub fn weighted_reviews(&self, reviews: &[Review], user: &UserProfile) -> Vec<WeightedReview> {
        let weighted = self.reviews.weigh_all(reviews, user);
        debug!(reviews = weighted.len(), "weighted review list");
        weighted
    }

    /// Side-by-side metrics for a comparison selection.
    pub fn compare(&self, selection: &[Product]) -> ComparisonMetrics {
        let metrics = compare_products(selection);
        debug!(
            selected = selection.len(),
            with_size_info = metrics.ppml_count,
            "computed comparison metrics"
        );
        metrics
    }

    /// Routine slot for a product.
    pub fn classify_time_of_day(&self, product: &Product) -> TimeOfDay {
        self.classifier.classify(product)
    }
}

impl Default for PersonalizationEngine {
    fn default() -> Self {
        Self::new()
    }
}
