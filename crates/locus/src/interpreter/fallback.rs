//! Locale fallback chain computation.

use std::collections::HashSet;

/// The language part of a locale id: everything before the first `-`.
///
/// ```
/// use locus::interpreter::locale_root;
///
/// assert_eq!(locale_root("pt-BR"), "pt");
/// assert_eq!(locale_root("kab"), "kab");
/// ```
pub fn locale_root(locale: &str) -> &str {
    locale.split_once('-').map_or(locale, |(root, _)| root)
}

/// A locale followed by its progressively less specific ancestors.
///
/// ```
/// use locus::interpreter::ancestry;
///
/// assert_eq!(ancestry("en-US-NY"), vec!["en-US-NY", "en-US", "en"]);
/// assert_eq!(ancestry("en"), vec!["en"]);
/// ```
pub fn ancestry(locale: &str) -> Vec<&str> {
    let mut chain: Vec<&str> = locale
        .match_indices('-')
        .map(|(pos, _)| &locale[..pos])
        .collect();
    chain.push(locale);
    chain.reverse();
    chain
}

/// Build the ordered list of locales consulted by a lookup.
///
/// Every requested locale contributes its ancestry, most specific first.
/// Each id appears once, at its first position. The fallback locale goes
/// last unless it is empty or already present.
pub fn compute_fallbacks<S: AsRef<str>>(requested: &[S], fallback: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut chain = Vec::with_capacity(requested.len() * 2 + 1);

    for locale in requested {
        for ancestor in ancestry(locale.as_ref()) {
            if seen.insert(ancestor) {
                chain.push(ancestor.to_string());
            }
        }
    }

    if !fallback.is_empty() && !seen.contains(fallback) {
        chain.push(fallback.to_string());
    }

    chain
}
