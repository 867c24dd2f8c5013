//! Coverage command implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::Args;
use locus::TranslationTree;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::commands::read_locale;
use crate::output::table::{LocaleCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source locale file (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Locales to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    percent: f64,
    missing: Vec<String>,
    extra: usize,
}

fn leaf_keys(path: &Path) -> Result<Vec<String>> {
    let (tree, _) = TranslationTree::from_map(read_locale(path)?);
    Ok(tree.leaf_keys())
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source_keys = leaf_keys(&args.source)?;
    let source_set: HashSet<&str> = source_keys.iter().map(String::as_str).collect();
    let source_count = source_keys.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage_data: Vec<LocaleCoverage> = Vec::with_capacity(args.lang.len());

    for locale in &args.lang {
        let locale_file = base_dir.join(format!("{locale}.json"));

        let translated_keys = if locale_file.exists() {
            leaf_keys(&locale_file)?
        } else {
            // File doesn't exist - all keys are missing
            Vec::new()
        };
        let translated: HashSet<&str> = translated_keys.iter().map(String::as_str).collect();

        let missing: Vec<String> = source_keys
            .iter()
            .filter(|key| !translated.contains(key.as_str()))
            .cloned()
            .collect();
        let extra = translated_keys
            .iter()
            .filter(|key| !source_set.contains(key.as_str()))
            .count();

        coverage_data.push(LocaleCoverage {
            locale: locale.clone(),
            translated: source_count - missing.len(),
            missing,
            extra,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total: source_count,
                percent: c.percent(source_count),
                missing: c.missing.clone(),
                extra: c.extra,
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{table}");

        for entry in &coverage_data {
            if !entry.missing.is_empty() {
                println!("\nMissing in {}:", entry.locale);
                for key in &entry.missing {
                    println!("  - {key}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
