//! Integration tests for named and positional interpolation.

use locus::template::{interpolate, interpolate_positional};
use locus::{Params, params};
use serde_json::json;

// =========================================================================
// Named Placeholders
// =========================================================================

#[test]
fn named_placeholder_substitutes_string() {
    assert_eq!(interpolate("Hi %{name}!", &params! { "name" => "Ann" }), "Hi Ann!");
}

#[test]
fn missing_named_parameter_is_left_unchanged() {
    assert_eq!(interpolate("Hi %{x}!", &params! {}), "Hi %{x}!");
    assert_eq!(interpolate("Hi %{x}!", &params! { "y" => 1 }), "Hi %{x}!");
}

#[test]
fn doubled_percent_escapes_placeholder() {
    let p = params! { "x" => "value" };
    assert_eq!(interpolate("100%%{x}", &p), "100%%{x}");
    assert_eq!(interpolate("100%%{x}", &params! {}), "100%%{x}");
}

#[test]
fn dotted_names_are_plain_keys() {
    let p = params! { "user.name" => "Bo" };
    assert_eq!(interpolate("%{user.name}", &p), "Bo");
}

#[test]
fn field_renders_each_value_kind() {
    let mut p = Params::new();
    p.insert("n".to_string(), json!(42));
    p.insert("f".to_string(), json!(1.5));
    p.insert("b".to_string(), json!(false));
    p.insert("z".to_string(), json!(null));
    p.insert("a".to_string(), json!([1, "two"]));
    p.insert("o".to_string(), json!({ "k": 1 }));

    assert_eq!(
        interpolate("%{n} %{f} %{b} %{z} %{a} %{o}", &p),
        r#"42 1.5 false null [1,"two"] {"k":1}"#
    );
}

// =========================================================================
// Formatted Placeholders
// =========================================================================

#[test]
fn integer_codes_truncate_toward_zero() {
    let p = params! { "up" => 3.99, "down" => -3.99, "whole" => 7 };
    assert_eq!(interpolate("%<up>.d %<down>.i %<whole>.d", &p), "3 -3 7");
}

#[test]
fn integer_code_on_non_number_is_zero() {
    let p = params! { "s" => "12" };
    assert_eq!(interpolate("%<s>.d", &p), "0");
}

#[test]
fn float_code_uses_shortest_text() {
    let p = params! { "a" => 2, "b" => 2.25, "c" => "x" };
    assert_eq!(interpolate("%<a>.f %<b>.f %<c>.f", &p), "2 2.25 0");
}

#[test]
fn string_code_and_unknown_codes() {
    let p = params! { "s" => "text", "n" => 5, "b" => true };
    assert_eq!(interpolate("%<s>.s|%<n>.s", &p), "text|5");
    assert_eq!(interpolate("%<s>.x|%<b>.q", &p), r#""text"|true"#);
}

#[test]
fn formatted_placeholder_without_code_is_literal() {
    let p = params! { "n" => 5 };
    assert_eq!(interpolate("%<n> and %<n>.", &p), "%<n> and %<n>.");
}

#[test]
fn formatted_missing_parameter_is_left_unchanged() {
    assert_eq!(interpolate("%<n>.d", &params! { "m" => 1 }), "%<n>.d");
}

// =========================================================================
// Positional Placeholders
// =========================================================================

#[test]
fn indexed_placeholders() {
    assert_eq!(interpolate_positional("{1} then {0}", &["a", "b"]), "b then a");
    assert_eq!(interpolate_positional("{0}{0}", &["ab"]), "abab");
}

#[test]
fn sequential_placeholders() {
    assert_eq!(interpolate_positional("{} and {}", &["x", "y"]), "x and y");
}

#[test]
fn indexed_and_sequential_share_parameters() {
    // The bare pass restarts at the first parameter.
    assert_eq!(interpolate_positional("{0} {}", &["x"]), "x x");
    assert_eq!(interpolate_positional("{1}: {} {}", &["a", "b"]), "b: a b");
}

#[test]
fn positional_leaves_unknown_placeholders() {
    assert_eq!(interpolate_positional("{2} {}", &["a"]), "{2} a");
    assert_eq!(interpolate_positional("{-1} {x}", &["a"]), "{-1} {x}");
}

#[test]
fn syntaxes_are_independent() {
    let p = params! { "0" => "named" };
    assert_eq!(interpolate("{0}", &p), "{0}");
    assert_eq!(interpolate_positional("%{0}", &["pos"]), "%pos");
}
