//! Integration tests for number, price, and date formatting.

use chrono::{NaiveDate, NaiveDateTime};
use locus::format::{NumberConfig, format_number};
use locus::Translator;
use serde_json::json;

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .expect("valid date")
}

fn us_translator() -> Translator {
    let mut translator = Translator::new();
    translator.set_locale("en-US");
    translator.load_tree(
        "en-US",
        json!({
            "_formats": {
                "currency": {
                    "symbol": "$",
                    "positive_format": "%c%q",
                    "negative_format": "-%c%q",
                    "negative_symbol": "",
                    "thousand_separator": ","
                },
                "number": { "thousand_separator": "," },
            }
        }),
    );
    translator
}

// =========================================================================
// Numbers
// =========================================================================

#[test]
fn default_number_format() {
    let translator = Translator::new();
    assert_eq!(translator.format_number(1234567.891), "1 234 567.89");
    assert_eq!(translator.format_number(-42.0), "-42.00");
}

#[test]
fn configured_number_format() {
    let mut translator = Translator::new();
    translator.configure(&json!({
        "number": {
            "decimal_symbol": ",",
            "thousand_separator": ".",
            "fract_digits": 3,
            "positive_symbol": "+"
        }
    }));
    insta::assert_snapshot!(translator.format_number(9876.54321), @"+9.876,543");
    insta::assert_snapshot!(translator.format_number(-0.0006), @"-0,001");
}

#[test]
fn huge_fraction_digit_counts_are_clamped() {
    let config = NumberConfig {
        fract_digits: 40,
        ..NumberConfig::default()
    };
    assert_eq!(format_number(0.5, &config), "0.500000000000000000");
}

#[test]
fn formatted_number_reparses_to_rounded_value() {
    let config = NumberConfig {
        decimal_symbol: ",".to_string(),
        thousand_separator: "'".to_string(),
        fract_digits: 2,
        ..NumberConfig::default()
    };
    for value in [0.0, 1.005, 12.345, 999.995, 1234.5, 98765.4321, -4321.126] {
        let text = format_number(value, &config);
        let reparsed: f64 = text
            .replace('\'', "")
            .replace(',', ".")
            .parse()
            .expect("formatted number parses");
        let rounded = (value.abs() * 100.0).round() / 100.0;
        assert!(
            (reparsed.abs() - rounded).abs() < 1e-9,
            "{value} formatted as {text}"
        );
        assert_eq!(text.starts_with('-'), value < 0.0, "{text}");
    }
}

// =========================================================================
// Prices
// =========================================================================

#[test]
fn dollar_price() {
    let translator = us_translator();
    assert_eq!(translator.format_price(1234.5), "$1,234.50");
}

#[test]
fn negative_price_uses_negative_format() {
    let translator = us_translator();
    insta::assert_snapshot!(translator.format_price(-1234.5), @"-$1,234.50");
}

#[test]
fn default_price_format() {
    let translator = Translator::new();
    assert_eq!(translator.format_price(3.0), "XXX 3.00");
    assert_eq!(translator.format_price(-3.0), "XXX -3.00");
}

#[test]
fn configure_leaves_unmentioned_fields() {
    let mut translator = us_translator();
    translator.configure(&json!({ "currency": { "symbol": "US$" } }));
    assert_eq!(translator.format_price(5.0), "US$5.00");
    assert_eq!(translator.config().currency.thousand_separator, ",");
}

#[test]
fn malformed_section_is_skipped() {
    let mut translator = us_translator();
    translator.configure(&json!({
        "currency": { "symbol": 5 },
        "number": { "fract_digits": 0 },
    }));
    assert_eq!(translator.format_price(2.0), "$2.00");
    assert_eq!(translator.format_number(2.4), "2");
}

// =========================================================================
// Dates
// =========================================================================

#[test]
fn empty_pattern_is_iso_8601() {
    let translator = Translator::new();
    let when = at(2024, 3, 5, 14, 7, 9);
    assert_eq!(translator.format_date("", Some(&when)), "2024-03-05T14:07:09");
}

#[test]
fn pattern_aliases_use_configured_patterns() {
    let translator = Translator::new();
    let when = at(2024, 3, 5, 14, 7, 9);
    let rendered: Vec<String> = [
        "long_time",
        "short_time",
        "long_date",
        "short_date",
        "long_date_time",
        "short_date_time",
    ]
    .iter()
    .map(|alias| translator.format_date(alias, Some(&when)))
    .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    14:07:09
    14:07
    March 05, 2024
    03/05/2024
    March 05, 2024 14:07:09
    03/05/2024 14:07
    ");
}

#[test]
fn name_tokens() {
    let translator = Translator::new();
    let when = at(2023, 12, 31, 0, 0, 0);
    assert_eq!(translator.format_date("%l %a %F %b", Some(&when)), "Sunday Sun December Dec");
}

#[test]
fn minute_and_second_aliases() {
    let translator = Translator::new();
    let when = at(2024, 1, 2, 3, 4, 5);
    assert_eq!(translator.format_date("%H:%i:%s", Some(&when)), "03:04:05");
}

#[test]
fn year_is_padded_to_four_digits() {
    let translator = Translator::new();
    let when = at(99, 1, 1, 0, 0, 0);
    assert_eq!(translator.format_date("%Y", Some(&when)), "0099");
}

#[test]
fn unknown_tokens_and_trailing_percent_are_kept() {
    let translator = Translator::new();
    let when = at(2024, 3, 5, 14, 7, 9);
    assert_eq!(translator.format_date("%Q %d 100%", Some(&when)), "%Q 05 100%");
}

#[test]
fn localized_names_and_short_lists() {
    let mut translator = Translator::new();
    translator.configure(&json!({
        "long_month_names": ["janvier", "février", "mars"],
        "short_month_names": ["janv."],
        "date_time": { "long_date": "%d %F %Y" },
    }));
    let when = at(2024, 3, 5, 0, 0, 0);
    assert_eq!(translator.format_date("long_date", Some(&when)), "05 mars 2024");
    assert_eq!(translator.format_date("[%b]", Some(&when)), "[]");
}

#[test]
fn missing_date_uses_current_time() {
    let translator = Translator::new();
    let year = translator.format_date("%Y", None);
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}
