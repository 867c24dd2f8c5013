//! Plural category resolution.
//!
//! Each language root maps onto one of a small, fixed set of rule families.
//! Unknown roots use the English rule. Counts are signed; `%` truncates
//! toward zero, so negative counts follow the same arithmetic as positive
//! ones with the sign carried through the remainders.

use crate::interpreter::fallback::locale_root;
use crate::types::PluralCategory;

/// A group of languages sharing one cardinal plural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleFamily {
    /// `one` for exactly 1, otherwise `other`.
    OneOther,
    /// `one` below 2, otherwise `other`.
    OneBelowTwo,
    /// East Slavic and Serbo-Croatian rules.
    Slavic,
    /// Polish.
    Polish,
    /// Czech and Slovak.
    CzechSlovak,
    /// Arabic: all six categories.
    Arabic,
}

fn family_for_root(root: &str) -> RuleFamily {
    match root {
        "ru" | "uk" | "be" | "hr" | "sr" | "bs" | "sh" => RuleFamily::Slavic,
        "pl" => RuleFamily::Polish,
        "cs" | "sk" => RuleFamily::CzechSlovak,
        "fr" | "ff" | "kab" => RuleFamily::OneBelowTwo,
        "ar" => RuleFamily::Arabic,
        _ => RuleFamily::OneOther,
    }
}

/// Get the plural category for a count in the given locale.
///
/// Only the locale's root (`"pt"` for `"pt-BR"`) is consulted.
///
/// # Examples
///
/// ```
/// use locus::interpreter::plural_category;
/// use locus::types::PluralCategory;
///
/// assert_eq!(plural_category("en", 1), PluralCategory::One);
/// assert_eq!(plural_category("en-GB", 2), PluralCategory::Other);
/// assert_eq!(plural_category("ru", 3), PluralCategory::Few);
/// assert_eq!(plural_category("ru", 11), PluralCategory::Many);
/// assert_eq!(plural_category("fr", 0), PluralCategory::One);
/// ```
pub fn plural_category(locale: &str, count: i64) -> PluralCategory {
    let n = count;
    let n10 = n % 10;
    let n100 = n % 100;

    match family_for_root(locale_root(locale)) {
        RuleFamily::OneOther => {
            if n == 1 {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }
        RuleFamily::OneBelowTwo => {
            if n < 2 {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }
        RuleFamily::Slavic => {
            if n10 == 1 && n100 != 11 {
                PluralCategory::One
            } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                PluralCategory::Few
            } else if n10 == 0 || (5..=9).contains(&n10) || (11..=14).contains(&n100) {
                PluralCategory::Many
            } else {
                PluralCategory::Other
            }
        }
        RuleFamily::Polish => {
            if n == 1 {
                PluralCategory::One
            } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                PluralCategory::Few
            } else {
                PluralCategory::Many
            }
        }
        RuleFamily::CzechSlovak => match n {
            1 => PluralCategory::One,
            2..=4 => PluralCategory::Few,
            _ => PluralCategory::Other,
        },
        RuleFamily::Arabic => match n {
            0 => PluralCategory::Zero,
            1 => PluralCategory::One,
            2 => PluralCategory::Two,
            _ if (3..=10).contains(&n100) => PluralCategory::Few,
            _ if (11..=99).contains(&n100) => PluralCategory::Many,
            _ => PluralCategory::Other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_table_covers_listed_roots() {
        for root in ["en", "de", "nl", "sv", "da", "no", "nb", "nn", "fo", "es", "pt"] {
            assert_eq!(family_for_root(root), RuleFamily::OneOther, "{root}");
        }
        for root in ["it", "bg", "el", "fi", "et", "he", "eo", "zz"] {
            assert_eq!(family_for_root(root), RuleFamily::OneOther, "{root}");
        }
        for root in ["ru", "uk", "be", "hr", "sr", "bs", "sh"] {
            assert_eq!(family_for_root(root), RuleFamily::Slavic, "{root}");
        }
        assert_eq!(family_for_root("kab"), RuleFamily::OneBelowTwo);
        assert_eq!(family_for_root("sk"), RuleFamily::CzechSlovak);
    }

    #[test]
    fn negative_counts_use_truncating_remainder() {
        // -1 % 10 == -1, which matches none of the Slavic ranges.
        assert_eq!(plural_category("ru", -1), PluralCategory::Other);
        assert_eq!(plural_category("en", -1), PluralCategory::Other);
        assert_eq!(plural_category("fr", -5), PluralCategory::One);
        // -10 % 10 == 0 lands in `many`.
        assert_eq!(plural_category("ru", -10), PluralCategory::Many);
    }
}
