//! "Did you mean" suggestions for unknown translation keys.

use strsim::levenshtein;

/// Compute typo suggestions for `name` from the available keys.
///
/// - distance <= 1 for keys <= 3 chars
/// - distance <= 2 for longer keys
/// - exact matches are not suggested
/// - at most 3 suggestions, nearest first
///
/// ```
/// use locus::interpreter::compute_suggestions;
///
/// let keys = ["menu.open", "menu.close", "title"];
/// assert_eq!(compute_suggestions("menu.opne", keys), vec!["menu.open"]);
/// ```
pub fn compute_suggestions<I, S>(name: &str, available: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then(|| (dist, candidate.to_string()))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
