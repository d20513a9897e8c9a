use super::{CompatibilityLevel, CompatibilityResult};

/// Reason attached to any pair the rule table does not cover. The table is
/// never treated as exhaustive.
pub const NO_KNOWN_CONFLICTS_REASON: &str = "No known conflicts between these ingredients";

const RETINOIDS: &[&str] = &["retinol", "retinal", "retinoid", "tretinoin", "adapalene"];
const AHAS: &[&str] = &["glycolic", "lactic", "mandelic", "aha"];
const BHAS: &[&str] = &["salicylic", "bha", "betaine salicylate"];
const BENZOYL_PEROXIDE: &[&str] = &["benzoyl peroxide"];
const VITAMIN_C: &[&str] = &["vitamin c", "ascorbic", "ascorbyl"];
const NIACINAMIDE: &[&str] = &["niacinamide"];
const VITAMIN_E: &[&str] = &["vitamin e", "tocopherol"];
const HYALURONIC_ACID: &[&str] = &["hyaluronic", "sodium hyaluronate"];

struct InteractionRule {
    first: &'static [&'static str],
    second: &'static [&'static str],
    level: CompatibilityLevel,
    reason: &'static str,
    resolution: Option<&'static str>,
}

/// Known interactions, scanned in order: hard conflicts, soft conflicts,
/// then documented synergies. First matching rule wins.
const INTERACTION_RULES: &[InteractionRule] = &[
    InteractionRule {
        first: RETINOIDS,
        second: AHAS,
        level: CompatibilityLevel::Avoid,
        reason: "Retinoids layered with AHA exfoliants can badly irritate skin and compromise the moisture barrier",
        resolution: None,
    },
    InteractionRule {
        first: RETINOIDS,
        second: BHAS,
        level: CompatibilityLevel::Avoid,
        reason: "Retinoids layered with BHA exfoliants can badly irritate skin and compromise the moisture barrier",
        resolution: None,
    },
    InteractionRule {
        first: RETINOIDS,
        second: BENZOYL_PEROXIDE,
        level: CompatibilityLevel::Avoid,
        reason: "Benzoyl peroxide can deactivate retinoids and the combination is severely drying",
        resolution: None,
    },
    InteractionRule {
        first: VITAMIN_C,
        second: BENZOYL_PEROXIDE,
        level: CompatibilityLevel::Avoid,
        reason: "Benzoyl peroxide oxidizes vitamin C and cancels its antioxidant benefit",
        resolution: None,
    },
    InteractionRule {
        first: VITAMIN_C,
        second: NIACINAMIDE,
        level: CompatibilityLevel::Caution,
        reason: "Strong vitamin C and niacinamide can destabilize each other on reactive skin",
        resolution: Some("Use vitamin C in the morning and niacinamide at night"),
    },
    InteractionRule {
        first: AHAS,
        second: BHAS,
        level: CompatibilityLevel::Caution,
        reason: "Layering multiple exfoliating acids raises the risk of over-exfoliation",
        resolution: Some("Alternate days, or keep one acid per routine"),
    },
    InteractionRule {
        first: VITAMIN_C,
        second: VITAMIN_E,
        level: CompatibilityLevel::Safe,
        reason: "Vitamin C and vitamin E reinforce each other's antioxidant protection",
        resolution: None,
    },
    InteractionRule {
        first: NIACINAMIDE,
        second: HYALURONIC_ACID,
        level: CompatibilityLevel::Safe,
        reason: "Niacinamide and hyaluronic acid hydrate and calm skin together",
        resolution: None,
    },
    InteractionRule {
        first: RETINOIDS,
        second: HYALURONIC_ACID,
        level: CompatibilityLevel::Safe,
        reason: "Hyaluronic acid buffers the dryness retinoids can cause",
        resolution: None,
    },
    InteractionRule {
        first: NIACINAMIDE,
        second: BHAS,
        level: CompatibilityLevel::Safe,
        reason: "Niacinamide soothes skin while salicylic acid clears pores",
        resolution: None,
    },
];

fn side_matches(keywords: &[&str], normalized_name: &str) -> bool {
    keywords.iter().any(|keyword| normalized_name.contains(keyword))
}

/// Classify an unordered ingredient pair as safe, caution, or avoid.
///
/// Names bind to a rule side by case-insensitive substring over that side's
/// keyword list, so label strings like "Encapsulated Retinol 0.3%" still
/// resolve. Pairs the table does not cover are safe with a generic reason.
pub fn check_compatibility(ingredient_a: &str, ingredient_b: &str) -> CompatibilityResult {
    let a = ingredient_a.trim().to_lowercase();
    let b = ingredient_b.trim().to_lowercase();

    if a == b {
        return CompatibilityResult {
            level: CompatibilityLevel::Safe,
            reason: NO_KNOWN_CONFLICTS_REASON.to_string(),
            resolution: None,
        };
    }

    for rule in INTERACTION_RULES {
        let forward = side_matches(rule.first, &a) && side_matches(rule.second, &b);
        let reverse = side_matches(rule.first, &b) && side_matches(rule.second, &a);
        if forward || reverse {
            return CompatibilityResult {
                level: rule.level,
                reason: rule.reason.to_string(),
                resolution: rule.resolution.map(str::to_string),
            };
        }
    }

    CompatibilityResult {
        level: CompatibilityLevel::Safe,
        reason: NO_KNOWN_CONFLICTS_REASON.to_string(),
        resolution: None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::CompatibilityLevel;
    use super::check_compatibility;

    #[test]
    fn retinoid_with_exfoliating_acid_is_avoid() {
        let result = check_compatibility("Retinol", "Glycolic Acid");
        assert_eq!(result.level, CompatibilityLevel::Avoid);
        assert!(result.resolution.is_none());
    }

    #[test]
    fn vitamin_c_with_benzoyl_peroxide_is_avoid() {
        let result = check_compatibility("Vitamin C", "Benzoyl Peroxide 2.5%");
        assert_eq!(result.level, CompatibilityLevel::Avoid);
    }

    #[test]
    fn soft_conflicts_carry_a_resolution() {
        let result = check_compatibility("Vitamin C", "Niacinamide");
        assert_eq!(result.level, CompatibilityLevel::Caution);
        let resolution = result.resolution.expect("caution should suggest a resolution");
        assert!(resolution.contains("morning") || resolution.contains("night"));
    }

    #[test]
    fn known_synergies_are_safe_with_a_specific_reason() {
        let result = check_compatibility("Niacinamide", "Hyaluronic Acid");
        assert_eq!(result.level, CompatibilityLevel::Safe);
        assert!(!result.is_generic());
    }

    #[test]
    fn unlisted_pairs_are_safe_with_the_generic_reason() {
        let result = check_compatibility("Squalane", "Ceramide NP");
        assert_eq!(result.level, CompatibilityLevel::Safe);
        assert!(result.is_generic());
    }

    #[test]
    fn classification_is_symmetric() {
        let pairs = [
            ("Retinol", "Salicylic Acid"),
            ("Vitamin C", "Niacinamide"),
            ("Glycolic Acid", "Salicylic Acid"),
            ("Niacinamide", "Hyaluronic Acid"),
            ("Squalane", "Panthenol"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                check_compatibility(a, b).level,
                check_compatibility(b, a).level,
                "asymmetric level for {a} / {b}"
            );
        }
    }

    #[test]
    fn an_ingredient_is_always_safe_with_itself() {
        // Both sides of the AHA/BHA rule would otherwise fire on acids.
        assert_eq!(
            check_compatibility("Glycolic Acid", "glycolic acid").level,
            CompatibilityLevel::Safe
        );
        assert_eq!(check_compatibility("Retinol", "Retinol").level, CompatibilityLevel::Safe);
    }

    #[test]
    fn label_decorations_do_not_hide_the_conflict() {
        let result = check_compatibility("Encapsulated Retinol 0.3%", "Lactic Acid 5%");
        assert_eq!(result.level, CompatibilityLevel::Avoid);
    }
}
