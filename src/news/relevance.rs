//! Topical relevance predicate applied to every collected article.

/// Returns `true` when the article mentions a tracked entity and a topic term.
///
/// Entities are searched in `title` and `description` joined together, while topic terms
/// are searched in each field on its own; either field alone satisfies the topic check.
/// All matching is case-insensitive substring matching.
pub fn is_relevant<E, T>(title: &str, description: &str, entities: &[E], topic_terms: &[T]) -> bool
where
    E: AsRef<str>,
    T: AsRef<str>,
{
    let title_lc = title.to_lowercase();
    let desc_lc = description.to_lowercase();
    let combined = format!("{title_lc}{desc_lc}");

    let mentions_entity = entities
        .iter()
        .any(|e| combined.contains(&e.as_ref().to_lowercase()));
    if !mentions_entity {
        return false;
    }

    topic_terms.iter().any(|t| {
        let term = t.as_ref().to_lowercase();
        title_lc.contains(&term) || desc_lc.contains(&term)
    })
}
