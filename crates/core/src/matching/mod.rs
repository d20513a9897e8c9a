//! Concern and ingredient matching against the static vocabulary tables.

mod concerns;
mod ingredients;
mod synonyms;

pub use concerns::{matches_concern, product_matches_user_concerns};
pub use ingredients::matches_ingredient;
pub use synonyms::{recommended_fragments_for, synonyms_for};
