//! Positional interpolation: `{N}` and `{}`.
//!
//! Two sequential passes. The first replaces indexed placeholders; the
//! second replaces bare `{}` placeholders in order, starting again at the
//! first parameter. A parameter can therefore fill both an indexed and a
//! bare placeholder.

use winnow::ascii::digit1;
use winnow::combinator::delimited;
use winnow::prelude::*;

/// Substitute positional parameters into `text`.
///
/// # Examples
///
/// ```
/// use locus::template::interpolate_positional;
///
/// assert_eq!(interpolate_positional("{1} then {0}", &["a", "b"]), "b then a");
/// assert_eq!(interpolate_positional("{} and {}", &["x", "y"]), "x and y");
/// assert_eq!(interpolate_positional("{0} {}", &["x"]), "x x");
/// ```
pub fn interpolate_positional(text: &str, params: &[&str]) -> String {
    if params.is_empty() || text.is_empty() {
        return text.to_string();
    }
    let indexed = replace_indexed(text, params);
    replace_sequential(&indexed, params)
}

/// Replace every `{N}` whose index is in range.
fn replace_indexed(text: &str, params: &[&str]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('{') {
        output.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let mut input = rest;
        match index.parse_next(&mut input) {
            Ok(digits) => {
                let replacement = digits
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| params.get(i).copied());
                match replacement {
                    Some(param) => output.push_str(param),
                    None => output.push_str(&rest[..rest.len() - input.len()]),
                }
                rest = input;
            }
            Err(_) => {
                output.push('{');
                rest = &rest[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Replace each `{}` with the next unused parameter.
fn replace_sequential(text: &str, params: &[&str]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut remaining = params.iter();
    let mut rest = text;

    while let Some(pos) = rest.find("{}") {
        output.push_str(&rest[..pos]);
        output.push_str(remaining.next().copied().unwrap_or("{}"));
        rest = &rest[pos + 2..];
    }

    output.push_str(rest);
    output
}

fn index<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('{', digit1, '}').parse_next(input)
}
