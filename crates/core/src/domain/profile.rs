use serde::{Deserialize, Serialize};

use crate::domain::product::PreferenceFlags;

/// The fixed Fitzpatrick-style complexion scale, ordered light to dark.
/// Positions 0-5 feed the ±1-tier complexion match in review similarity.
pub const COMPLEXION_SCALE: &[&str] =
    &["Very Fair", "Fair", "Medium", "Olive", "Brown", "Dark Brown/Black"];

/// Position of a complexion label on the fixed scale. Case-insensitive;
/// labels off the scale have no position and contribute no signal.
pub fn complexion_position(label: &str) -> Option<usize> {
    COMPLEXION_SCALE.iter().position(|tier| tier.eq_ignore_ascii_case(label.trim()))
}

/// The current user's skin survey answers plus session-inferred concerns.
/// Assembled by the out-of-scope session layer and passed explicitly into
/// every scorer; the engine never reads ambient state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub skin_type: Option<String>,
    pub concerns: Vec<String>,
    pub preferences: PreferenceFlags,
    pub complexion: Option<String>,
    pub sensitivity: Option<String>,
    pub lifestyle: Vec<String>,
    pub age: Option<u8>,
}

/// The profile a reviewer attached to their review. Mirrors `UserProfile`
/// minus preferences, which reviewers do not publish.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProfile {
    pub skin_type: Option<String>,
    pub skin_concerns: Vec<String>,
    pub complexion: Option<String>,
    pub sensitivity: Option<String>,
    pub lifestyle: Vec<String>,
    pub age: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::{complexion_position, COMPLEXION_SCALE};

    #[test]
    fn scale_has_six_ordered_tiers() {
        assert_eq!(COMPLEXION_SCALE.len(), 6);
        assert_eq!(complexion_position("Very Fair"), Some(0));
        assert_eq!(complexion_position("Dark Brown/Black"), Some(5));
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(complexion_position("  olive "), Some(3));
        assert_eq!(complexion_position("FAIR"), Some(1));
    }

    #[test]
    fn off_scale_labels_have_no_position() {
        assert_eq!(complexion_position("porcelain"), None);
        assert_eq!(complexion_position(""), None);
    }
}
