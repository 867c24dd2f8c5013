//! Plural-form and variant selection on keyed translation nodes.
//!
//! Selection never fails. When a node has the wrong shape or no entry fits,
//! a bracketed sentinel text is returned in place of a translation.

use serde_json::Value;

use crate::Params;
use crate::interpreter::plural::plural_category;
use crate::template::interpolate_positional;
use crate::types::TranslationNode;

/// Returned when a plural lookup lands on a non-keyed node.
pub const PLURAL_NOT_OBJECT: &str = "[plural: data not object]";
/// Returned when no plural form fits the count.
pub const PLURAL_MISSING_FORM: &str = "[plural: missing form]";
/// Returned when a variant lookup lands on a non-keyed node.
pub const VARIANT_NOT_OBJECT: &str = "[variant: data not object]";
/// Returned when no variant matches and there is no `other` entry.
pub const VARIANT_NO_MATCH: &str = "[variant: no match]";

/// Pick the plural form for `params["count"]`.
///
/// A missing or non-numeric count is treated as 1. Fractional counts are
/// truncated toward zero. The returned text is not interpolated.
pub fn handle_plural(node: &TranslationNode, locale: &str, params: &Params) -> String {
    let count = params.get("count").and_then(count_value).unwrap_or(1);
    plural_form(node, locale, count)
}

/// Pick the plural form for `count` and fill it positionally.
///
/// The count is parameter `{0}`; `params` follow it from `{1}` on.
pub fn handle_plural_positional(
    node: &TranslationNode,
    locale: &str,
    count: i64,
    params: &[&str],
) -> String {
    let text = plural_form(node, locale, count);
    with_count(&text, count, params)
}

/// Pick the entry named by the first string parameter that matches a key.
///
/// Parameters are tried in insertion order, so when several match, the one
/// inserted first wins. Falls back to the `other` entry.
pub fn handle_variant(node: &TranslationNode, params: &Params) -> String {
    if node.as_keyed().is_none() {
        return VARIANT_NOT_OBJECT.to_string();
    }

    params
        .values()
        .filter_map(Value::as_str)
        .find_map(|wanted| node.literal_child(wanted))
        .or_else(|| node.literal_child("other"))
        .unwrap_or(VARIANT_NO_MATCH)
        .to_string()
}

/// Interpolate `text` positionally with `count` prepended to `params`.
pub(crate) fn with_count(text: &str, count: i64, params: &[&str]) -> String {
    let count_text = count.to_string();
    let mut all = Vec::with_capacity(params.len() + 1);
    all.push(count_text.as_str());
    all.extend_from_slice(params);
    interpolate_positional(text, &all)
}

fn plural_form(node: &TranslationNode, locale: &str, count: i64) -> String {
    if node.as_keyed().is_none() {
        return PLURAL_NOT_OBJECT.to_string();
    }

    let category = plural_category(locale, count);
    node.literal_child(category.as_str())
        .or_else(|| node.literal_child("other"))
        .or_else(|| node.literal_child(&count.to_string()))
        .unwrap_or(PLURAL_MISSING_FORM)
        .to_string()
}

fn count_value(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64()
        .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
        .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn node(value: Value) -> TranslationNode {
        TranslationNode::from_value(value).unwrap_or(TranslationNode::Literal(String::new()))
    }

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => Params::new(),
        }
    }

    #[test]
    fn plural_falls_back_to_other_then_exact_count() {
        let n = node(json!({ "other": "many", "1": "exactly one" }));
        assert_eq!(handle_plural(&n, "en", &params(json!({ "count": 1 }))), "many");

        let n = node(json!({ "3": "three" }));
        assert_eq!(handle_plural(&n, "en", &params(json!({ "count": 3 }))), "three");
        assert_eq!(
            handle_plural(&n, "en", &params(json!({ "count": 4 }))),
            PLURAL_MISSING_FORM
        );
    }

    #[test]
    fn plural_count_defaults_to_one() {
        let n = node(json!({ "one": "single", "other": "plural" }));
        assert_eq!(handle_plural(&n, "en", &Params::new()), "single");
        assert_eq!(handle_plural(&n, "en", &params(json!({ "count": "7" }))), "single");
        assert_eq!(handle_plural(&n, "en", &params(json!({ "count": 2.9 }))), "plural");
        assert_eq!(handle_plural(&n, "en", &params(json!({ "count": 1.5 }))), "single");
    }

    #[test]
    fn plural_ignores_non_literal_forms() {
        let n = node(json!({ "one": { "nested": "x" }, "other": "fallback" }));
        assert_eq!(handle_plural(&n, "en", &params(json!({ "count": 1 }))), "fallback");
    }

    #[test]
    fn non_keyed_nodes_yield_sentinels() {
        let n = node(json!("plain"));
        assert_eq!(handle_plural(&n, "en", &Params::new()), PLURAL_NOT_OBJECT);
        assert_eq!(handle_plural_positional(&n, "en", 2, &[]), PLURAL_NOT_OBJECT);
        assert_eq!(handle_variant(&n, &Params::new()), VARIANT_NOT_OBJECT);
    }

    #[test]
    fn positional_plural_prepends_count() {
        let n = node(json!({ "one": "{0} file in {1}", "other": "{0} files in {1}" }));
        assert_eq!(handle_plural_positional(&n, "en", 1, &["docs"]), "1 file in docs");
        assert_eq!(handle_plural_positional(&n, "en", 3, &["docs"]), "3 files in docs");
    }

    #[test]
    fn variant_first_inserted_parameter_wins() {
        let n = node(json!({ "male": "he", "female": "she", "other": "they" }));
        let p = params(json!({ "a": "female", "b": "male" }));
        assert_eq!(handle_variant(&n, &p), "she");
        let p = params(json!({ "b": "male", "a": "female" }));
        assert_eq!(handle_variant(&n, &p), "he");
    }

    #[test]
    fn variant_skips_non_string_parameters() {
        let n = node(json!({ "1": "one", "other": "they" }));
        assert_eq!(handle_variant(&n, &params(json!({ "x": 1 }))), "they");

        let n = node(json!({ "male": "he" }));
        assert_eq!(handle_variant(&n, &params(json!({ "x": "none" }))), VARIANT_NO_MATCH);
    }
}
