//! Implementation of the `locus check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use locus::interpreter::{locale_id_from_path, parse_locale_str};
use locus::{LoadError, TranslationTree};
use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::LocusDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Locale files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    locale: Option<String>,
    ok: bool,
    keys: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

impl From<&LoadError> for ErrorReport {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::Parse {
                line,
                column,
                message,
                ..
            } => ErrorReport {
                message: message.clone(),
                line: Some(*line),
                column: Some(*column),
            },
            other => ErrorReport {
                message: other.to_string(),
                line: None,
                column: None,
            },
        }
    }
}

impl FileReport {
    fn passed(path: &Path, locale: Option<String>, keys: usize) -> Self {
        FileReport {
            file: path.display().to_string(),
            locale,
            ok: true,
            keys,
            error: None,
        }
    }

    fn failed(path: &Path, locale: Option<String>, err: &LoadError) -> Self {
        FileReport {
            file: path.display().to_string(),
            locale,
            ok: false,
            keys: 0,
            error: Some(ErrorReport::from(err)),
        }
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failures = 0;

    for path in &args.files {
        let locale = locale_id_from_path(path).ok();

        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                let err = LoadError::Io {
                    path: path.clone(),
                    source,
                };
                if !args.json {
                    eprintln!("{err}");
                }
                failures += 1;
                reports.push(FileReport::failed(path, locale, &err));
                continue;
            }
        };

        match parse_locale_str(&content, path) {
            Ok(map) => {
                let (tree, _) = TranslationTree::from_map(map);
                reports.push(FileReport::passed(path, locale, tree.leaf_keys().len()));
            }
            Err(err) => {
                if !args.json {
                    match LocusDiagnostic::from_load_error(&content, &err) {
                        Some(diagnostic) => eprintln!("{:?}", Report::new(diagnostic)),
                        None => eprintln!("{err}"),
                    }
                }
                failures += 1;
                reports.push(FileReport::failed(path, locale, &err));
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).into_diagnostic()?
        );
    } else {
        for report in reports.iter().filter(|r| r.ok) {
            println!(
                "{} {} ({} keys)",
                "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                report.file,
                report.keys
            );
        }
        if failures > 0 {
            println!(
                "{} {failures} of {} files failed",
                "error".if_supports_color(Stream::Stdout, |t| t.red()),
                reports.len()
            );
        }
    }

    if failures > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
