//! Implementation of the `locus translate` command.

use std::path::PathBuf;

use locus::{Params, Translator, Value};
use miette::{IntoDiagnostic, Result, miette};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::commands::load_locales;

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Dotted translation key (e.g., menu.file.open)
    pub key: String,

    /// Locale files to load (repeatable); the file name is the locale id
    #[arg(short, long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Active locales, most preferred first. Defaults to the first file's locale
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,

    /// Locale consulted after all active locales
    #[arg(long)]
    pub fallback: Option<String>,

    /// Named parameters in name=value format (repeatable); values are parsed as JSON when possible
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Positional parameters; switches to positional interpolation
    #[arg(long = "positional", num_args = 1..)]
    pub positional: Vec<String>,

    /// Count for plural selection with positional parameters
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
struct TranslateResult {
    key: String,
    result: String,
    found: bool,
    chain: Vec<String>,
    suggestions: Vec<String>,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    if name.is_empty() {
        return Err(format!("invalid parameter format '{s}': empty name"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Interpret a parameter value: JSON numbers, booleans, and the like, else plain text.
fn param_value(raw: String) -> Value {
    match serde_json::from_str::<Value>(&raw) {
        Ok(value @ (Value::Number(_) | Value::Bool(_) | Value::Null)) => value,
        _ => Value::String(raw),
    }
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> Result<i32> {
    let mut translator = Translator::new();
    let loaded = load_locales(&mut translator, &args.files)?;

    if let Some(fallback) = &args.fallback {
        translator.set_fallback_locale(fallback.as_str());
    }
    if args.locales.is_empty() {
        let first = loaded
            .first()
            .ok_or_else(|| miette!("no locale files given"))?;
        translator.set_locale(first.as_str());
    } else {
        translator.set_locales(args.locales.iter().map(String::as_str));
    }

    let positional: Vec<&str> = args.positional.iter().map(String::as_str).collect();
    let result = if let Some(count) = args.count {
        translator.tr_plural(&args.key, count, &positional)
    } else if !positional.is_empty() {
        translator.tr(&args.key, &positional)
    } else {
        let params: Params = args
            .params
            .into_iter()
            .map(|(name, value)| (name, param_value(value)))
            .collect();
        translator.translate(&args.key, &params)
    };

    let found = translator.key_exists(&args.key);
    let suggestions = if found {
        Vec::new()
    } else {
        translator.suggest_keys(&args.key)
    };

    if args.json {
        let output = TranslateResult {
            key: args.key,
            result,
            found,
            chain: translator.fallbacks(),
            suggestions,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{result}");
        if !found {
            eprintln!(
                "{} key '{}' not found in {}",
                "warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                args.key,
                translator.fallbacks().join(", ")
            );
            if !suggestions.is_empty() {
                eprintln!("  did you mean: {}", suggestions.join(", "));
            }
        }
    }

    if found {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("=x").is_err());
    }

    #[test]
    fn param_values_keep_scalars_and_text() {
        assert_eq!(param_value("3".to_string()), Value::from(3));
        assert_eq!(param_value("2.5".to_string()), Value::from(2.5));
        assert_eq!(param_value("true".to_string()), Value::Bool(true));
        assert_eq!(param_value("Ann".to_string()), Value::from("Ann"));
        assert_eq!(param_value("[1]".to_string()), Value::from("[1]"));
        assert_eq!(param_value("\"q\"".to_string()), Value::from("\"q\""));
    }
}
