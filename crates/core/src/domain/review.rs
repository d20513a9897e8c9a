use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::profile::ReviewProfile;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub String);

/// A published product review together with the reviewer's profile. The
/// review body and star rating are display data; only `profile` and
/// `posted_at` participate in similarity weighting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    pub rating: u8,
    pub body: String,
    pub posted_at: DateTime<Utc>,
    pub verified_purchase: bool,
    pub profile: ReviewProfile,
}
