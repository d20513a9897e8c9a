//! Static concern vocabulary: synonym variants per canonical concern and
//! the ingredients known to address each concern.
//!
//! Both tables are deliberately data-driven string maps rather than a
//! closed enum: the storefront grows its concern vocabulary through data,
//! not code changes.

/// Synonym group for one canonical concern. The canonical key is always
/// the first variant, so membership checks cover it for free.
#[derive(Debug, Clone, Copy)]
struct ConcernSynonymSeed {
    canonical: &'static str,
    variants: &'static [&'static str],
}

const CONCERN_SYNONYM_SEEDS: &[ConcernSynonymSeed] = &[
    ConcernSynonymSeed {
        canonical: "acne",
        variants: &[
            "acne",
            "breakouts",
            "pimples",
            "blemishes",
            "blackheads",
            "whiteheads",
            "congested pores",
        ],
    },
    ConcernSynonymSeed {
        canonical: "aging",
        variants: &[
            "aging",
            "anti-aging",
            "fine lines",
            "wrinkles",
            "firmness",
            "loss of elasticity",
            "sagging",
        ],
    },
    ConcernSynonymSeed {
        canonical: "dryness",
        variants: &["dryness", "dry skin", "dehydration", "dehydrated skin", "flakiness"],
    },
    ConcernSynonymSeed {
        canonical: "oiliness",
        variants: &["oiliness", "oily skin", "excess oil", "shine", "excess sebum"],
    },
    ConcernSynonymSeed {
        canonical: "sensitivity",
        variants: &["sensitivity", "sensitive skin", "irritation", "reactive skin"],
    },
    ConcernSynonymSeed {
        canonical: "redness",
        variants: &["redness", "rosacea", "flushing", "red patches"],
    },
    ConcernSynonymSeed {
        canonical: "hyperpigmentation",
        variants: &[
            "hyperpigmentation",
            "dark spots",
            "sun spots",
            "age spots",
            "uneven tone",
            "melasma",
            "discoloration",
        ],
    },
    ConcernSynonymSeed {
        canonical: "dullness",
        variants: &["dullness", "dull skin", "lack of radiance", "tired skin"],
    },
    ConcernSynonymSeed {
        canonical: "texture",
        variants: &["texture", "uneven texture", "rough texture", "bumpy skin"],
    },
    ConcernSynonymSeed {
        canonical: "pores",
        variants: &["pores", "large pores", "enlarged pores", "visible pores"],
    },
    ConcernSynonymSeed {
        canonical: "dark circles",
        variants: &["dark circles", "under-eye circles", "eye bags", "puffy eyes"],
    },
];

/// Beneficial-ingredient fragments per concern. Keys are raw concern
/// strings, looked up directly, never through synonym resolution first.
#[derive(Debug, Clone, Copy)]
struct IngredientRecommendationSeed {
    concern: &'static str,
    fragments: &'static [&'static str],
}

const INGREDIENT_RECOMMENDATION_SEEDS: &[IngredientRecommendationSeed] = &[
    IngredientRecommendationSeed {
        concern: "acne",
        fragments: &[
            "salicylic acid",
            "benzoyl peroxide",
            "niacinamide",
            "tea tree",
            "azelaic acid",
            "zinc",
            "sulfur",
        ],
    },
    IngredientRecommendationSeed {
        concern: "aging",
        fragments: &["retinol", "retinal", "peptide", "vitamin c", "bakuchiol", "coenzyme q10"],
    },
    IngredientRecommendationSeed {
        concern: "dryness",
        fragments: &[
            "hyaluronic acid",
            "ceramide",
            "glycerin",
            "squalane",
            "shea butter",
            "panthenol",
        ],
    },
    IngredientRecommendationSeed {
        concern: "oiliness",
        fragments: &["niacinamide", "salicylic acid", "clay", "witch hazel", "zinc"],
    },
    IngredientRecommendationSeed {
        concern: "sensitivity",
        fragments: &["centella", "madecassoside", "aloe", "oat", "allantoin", "panthenol"],
    },
    IngredientRecommendationSeed {
        concern: "redness",
        fragments: &["centella", "azelaic acid", "green tea", "niacinamide", "aloe"],
    },
    IngredientRecommendationSeed {
        concern: "hyperpigmentation",
        fragments: &[
            "vitamin c",
            "niacinamide",
            "alpha arbutin",
            "kojic acid",
            "tranexamic acid",
            "licorice",
        ],
    },
    IngredientRecommendationSeed {
        concern: "dullness",
        fragments: &["vitamin c", "glycolic acid", "lactic acid", "papaya enzyme", "niacinamide"],
    },
    IngredientRecommendationSeed {
        concern: "texture",
        fragments: &["glycolic acid", "lactic acid", "polyhydroxy acid", "urea"],
    },
    IngredientRecommendationSeed {
        concern: "pores",
        fragments: &["niacinamide", "salicylic acid", "clay"],
    },
    IngredientRecommendationSeed {
        concern: "dark circles",
        fragments: &["caffeine", "vitamin k", "peptide"],
    },
];

/// Synonym variants for a concern. Case-insensitive key lookup; unknown
/// concerns resolve to an empty set, never an error.
pub fn synonyms_for(concern: &str) -> &'static [&'static str] {
    CONCERN_SYNONYM_SEEDS
        .iter()
        .find(|seed| seed.canonical.eq_ignore_ascii_case(concern.trim()))
        .map(|seed| seed.variants)
        .unwrap_or(&[])
}

/// Beneficial-ingredient fragments for a concern. Same empty-on-unknown
/// policy as [`synonyms_for`].
pub fn recommended_fragments_for(concern: &str) -> &'static [&'static str] {
    INGREDIENT_RECOMMENDATION_SEEDS
        .iter()
        .find(|seed| seed.concern.eq_ignore_ascii_case(concern.trim()))
        .map(|seed| seed.fragments)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::{recommended_fragments_for, synonyms_for, CONCERN_SYNONYM_SEEDS};

    #[test]
    fn every_canonical_key_is_a_member_of_its_own_variant_set() {
        for seed in CONCERN_SYNONYM_SEEDS {
            assert!(
                seed.variants.contains(&seed.canonical),
                "canonical {} missing from its variants",
                seed.canonical
            );
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(synonyms_for("ACNE"), synonyms_for("acne"));
        assert!(synonyms_for("Aging").contains(&"wrinkles"));
    }

    #[test]
    fn unknown_concerns_resolve_to_empty_sets() {
        assert!(synonyms_for("barnacles").is_empty());
        assert!(recommended_fragments_for("barnacles").is_empty());
    }

    #[test]
    fn fragment_keys_are_raw_concern_strings_not_synonyms() {
        assert!(!recommended_fragments_for("acne").is_empty());
        // "breakouts" is a synonym of acne, but fragments key off raw strings.
        assert!(recommended_fragments_for("breakouts").is_empty());
    }
}
