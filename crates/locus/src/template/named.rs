//! Named-parameter interpolation: `%{name}` and `%<name>.fmt`.
//!
//! A single forward scan over the text. A `%` only opens a placeholder when
//! the character before it is not another `%`, so `%%{x}` is kept verbatim.
//! Substituted values are written straight to the output and never scanned.

use serde_json::Value;
use winnow::combinator::{alt, delimited, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::Params;

/// A recognised placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder<'i> {
    /// `%{name}`
    Field(&'i str),
    /// `%<name>.code`
    Formatted { name: &'i str, code: char },
}

impl Placeholder<'_> {
    fn name(&self) -> &str {
        match self {
            Placeholder::Field(name) | Placeholder::Formatted { name, .. } => name,
        }
    }
}

/// Substitute named parameters into `text`.
///
/// `%{name}` inserts strings as-is, numbers as decimal text, booleans as
/// `true`/`false`, and anything else as JSON. `%<name>.fmt` applies a format
/// code: `d`/`i` integer (truncated), `f` float, `s` string, anything else
/// JSON. Placeholders whose name is not in `params` are left unchanged.
///
/// # Examples
///
/// ```
/// use locus::{params, template::interpolate};
///
/// let p = params! { "name" => "Ann", "total" => 12.75 };
/// assert_eq!(interpolate("Hi %{name}!", &p), "Hi Ann!");
/// assert_eq!(interpolate("%<total>.d items", &p), "12 items");
/// assert_eq!(interpolate("100%%{name}", &p), "100%%{name}");
/// ```
pub fn interpolate(text: &str, params: &Params) -> String {
    if params.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len() + text.len().div_euclid(2));
    let mut rest = text;
    let mut previous: Option<char> = None;

    while let Some(ch) = rest.chars().next() {
        if ch == '%' && previous != Some('%') {
            let mut input = rest;
            if let Ok(found) = placeholder.parse_next(&mut input) {
                let source = &rest[..rest.len() - input.len()];
                match params.get(found.name()) {
                    Some(value) => output.push_str(&render(found, value)),
                    None => output.push_str(source),
                }
                previous = source.chars().last();
                rest = input;
                continue;
            }
        }
        output.push(ch);
        previous = Some(ch);
        rest = &rest[ch.len_utf8()..];
    }

    output
}

fn render(found: Placeholder<'_>, value: &Value) -> String {
    match found {
        Placeholder::Field(_) => field_text(value),
        Placeholder::Formatted { code, .. } => formatted_text(value, code),
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn formatted_text(value: &Value, code: char) -> String {
    match code {
        'd' | 'i' => truncated(value).to_string(),
        'f' => value.as_f64().unwrap_or(0.0).to_string(),
        's' => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        _ => value.to_string(),
    }
}

/// Integer value of a number, truncated toward zero; 0 for non-numbers.
fn truncated(value: &Value) -> i64 {
    let Value::Number(n) = value else {
        return 0;
    };
    n.as_i64()
        .unwrap_or_else(|| n.as_f64().map_or(0, |f| f.trunc() as i64))
}

fn placeholder<'i>(input: &mut &'i str) -> ModalResult<Placeholder<'i>> {
    preceded('%', alt((field, formatted))).parse_next(input)
}

fn field<'i>(input: &mut &'i str) -> ModalResult<Placeholder<'i>> {
    delimited('{', name, '}')
        .map(Placeholder::Field)
        .parse_next(input)
}

fn formatted<'i>(input: &mut &'i str) -> ModalResult<Placeholder<'i>> {
    (delimited('<', name, '>'), preceded('.', one_of(is_word_char)))
        .map(|(name, code)| Placeholder::Formatted { name, code })
        .parse_next(input)
}

fn name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| is_word_char(c) || c == '.').parse_next(input)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => Params::new(),
        }
    }

    #[test]
    fn placeholder_parser_accepts_both_forms() {
        let mut input = "%{user.name} rest";
        assert_eq!(
            placeholder.parse_next(&mut input).ok(),
            Some(Placeholder::Field("user.name"))
        );
        assert_eq!(input, " rest");

        let mut input = "%<n>.d";
        assert_eq!(
            placeholder.parse_next(&mut input).ok(),
            Some(Placeholder::Formatted { name: "n", code: 'd' })
        );
    }

    #[test]
    fn placeholder_parser_rejects_malformed() {
        for text in ["%{}", "%{a", "%<a>d", "%<a>.", "%<a>.-", "% {a}"] {
            let mut input = text;
            assert!(placeholder.parse_next(&mut input).is_err(), "{text}");
        }
    }

    #[test]
    fn adjacent_placeholders() {
        let p = params(json!({ "a": "1", "b": "2" }));
        assert_eq!(interpolate("%{a}%{b}", &p), "12");
        assert_eq!(interpolate("%{a}%<b>.s", &p), "12");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let p = params(json!({ "a": "%{b}", "b": "x" }));
        assert_eq!(interpolate("%{a}", &p), "%{b}");
    }

    #[test]
    fn escape_only_applies_to_directly_preceding_percent() {
        let p = params(json!({ "x": "Q" }));
        assert_eq!(interpolate("%%{x} %{x}", &p), "%%{x} Q");
        assert_eq!(interpolate("%%%{x}", &p), "%%%{x}");
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        let p = params(json!({ "n": 3 }));
        assert_eq!(interpolate("Привет %{n} — ok", &p), "Привет 3 — ok");
    }
}
