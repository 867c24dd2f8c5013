//! Implementation of the `locus format` command.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Subcommand;
use locus::Translator;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::commands::load_locales;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Locale files to load (repeatable); `_formats` blocks supply the rules
    #[arg(short, long = "file", global = true)]
    pub files: Vec<PathBuf>,

    /// Locale whose rules apply. Defaults to the first file's locale
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub value: FormatValue,
}

/// The kind of value to format.
#[derive(Debug, Subcommand)]
pub enum FormatValue {
    /// Format a plain number
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Format an amount of money
    Price {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Format a date and time
    Date {
        /// Pattern or alias (long_date, short_time, ...); empty for ISO 8601
        #[arg(long, default_value = "")]
        pattern: String,

        /// Date and time to format (YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
}

/// JSON output for format results.
#[derive(Serialize)]
struct FormatResult {
    locale: Option<String>,
    result: String,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> Result<i32> {
    let mut translator = Translator::new();
    let loaded = load_locales(&mut translator, &args.files)?;

    if let Some(locale) = args.locale.as_ref().or(loaded.first()) {
        translator.set_locale(locale.as_str());
    }

    let result = match &args.value {
        FormatValue::Number { value } => translator.format_number(*value),
        FormatValue::Price { value } => translator.format_price(*value),
        FormatValue::Date { pattern, at } => translator.format_date(pattern, at.as_ref()),
    };

    if args.json {
        let output = FormatResult {
            locale: translator.locale().map(ToString::to_string),
            result,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{result}");
    }

    Ok(exitcode::OK)
}
