use super::synonyms::synonyms_for;

/// Whether a free-text concern label matches any of the user's concerns.
///
/// A candidate matches a user concern when it equals it case-insensitively
/// or appears verbatim in that concern's synonym set. Exact membership in a
/// closed variant list; no substring or fuzzy fallback.
pub fn matches_concern(candidate: &str, user_concerns: &[String]) -> bool {
    let candidate = candidate.trim().to_lowercase();
    if candidate.is_empty() {
        return false;
    }

    user_concerns.iter().any(|user_concern| {
        if user_concern.trim().eq_ignore_ascii_case(&candidate) {
            return true;
        }
        synonyms_for(user_concern).iter().any(|variant| variant.eq_ignore_ascii_case(&candidate))
    })
}

/// Whether ANY product concern matches ANY user concern. Short-circuits on
/// the first hit.
pub fn product_matches_user_concerns(product_concerns: &[String], user_concerns: &[String]) -> bool {
    product_concerns.iter().any(|concern| matches_concern(concern, user_concerns))
}

#[cfg(test)]
mod tests {
    use super::{matches_concern, product_matches_user_concerns};

    fn concerns(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn synonym_variants_match_their_canonical_concern() {
        assert!(matches_concern("breakouts", &concerns(&["acne"])));
        assert!(!matches_concern("breakouts", &concerns(&["aging"])));
    }

    #[test]
    fn direct_equality_matches_regardless_of_case() {
        assert!(matches_concern("Dryness", &concerns(&["dryness"])));
        assert!(matches_concern("dryness", &concerns(&["DRYNESS"])));
    }

    #[test]
    fn unknown_user_concerns_still_match_by_direct_equality_only() {
        // "glass skin" is not in the synonym table; only literal equality works.
        assert!(matches_concern("glass skin", &concerns(&["glass skin"])));
        assert!(!matches_concern("dewy finish", &concerns(&["glass skin"])));
    }

    #[test]
    fn no_substring_matching_against_variant_lists() {
        // "lines" is a fragment of the "fine lines" variant, not a member.
        assert!(!matches_concern("lines", &concerns(&["aging"])));
    }

    #[test]
    fn empty_user_concern_list_never_matches() {
        assert!(!matches_concern("acne", &[]));
    }

    #[test]
    fn product_level_match_is_any_cross_any() {
        let product = concerns(&["dullness", "fine lines"]);
        assert!(product_matches_user_concerns(&product, &concerns(&["aging"])));
        assert!(!product_matches_user_concerns(&product, &concerns(&["oiliness"])));
        assert!(!product_matches_user_concerns(&[], &concerns(&["aging"])));
    }
}
