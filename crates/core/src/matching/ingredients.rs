use super::synonyms::recommended_fragments_for;

/// Whether an ingredient is considered beneficial for any of the user's
/// concerns.
///
/// Fragment lists key off the raw concern strings, independent of synonym
/// resolution. Containment is bidirectional on purpose: it is looser than
/// concern matching so label strings like "Niacinamide 10%" still hit the
/// "niacinamide" fragment.
pub fn matches_ingredient(ingredient: &str, user_concerns: &[String]) -> bool {
    let ingredient = ingredient.trim().to_lowercase();
    if ingredient.is_empty() {
        return false;
    }

    user_concerns.iter().any(|concern| {
        recommended_fragments_for(concern)
            .iter()
            .any(|fragment| ingredient.contains(fragment) || fragment.contains(&*ingredient))
    })
}
