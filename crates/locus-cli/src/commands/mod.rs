//! CLI command implementations.

mod check;
mod coverage;
mod format;
mod translate;

use std::fs::read_to_string;
use std::path::Path;

use locus::interpreter::{locale_id_from_path, parse_locale_str};
use locus::{Map, Translator, Value};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use crate::output::LocusDiagnostic;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use format::{FormatArgs, run_format};
pub use translate::{TranslateArgs, run_translate};

/// Read and parse a locale file, turning syntax errors into diagnostics.
pub(crate) fn read_locale(path: &Path) -> Result<Map<String, Value>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read locale file {}", path.display()))?;

    parse_locale_str(&content, path).or_else(|e| {
        match LocusDiagnostic::from_load_error(&content, &e) {
            Some(diagnostic) => Err(diagnostic.into()),
            None => Err(e).into_diagnostic(),
        }
    })
}

/// Load every file into `translator`, each under the locale named by its file.
///
/// Returns the locale ids in file order.
pub(crate) fn load_locales(
    translator: &mut Translator,
    files: &[impl AsRef<Path>],
) -> Result<Vec<String>> {
    let mut locales = Vec::with_capacity(files.len());
    for file in files {
        let path = file.as_ref();
        let locale = locale_id_from_path(path).into_diagnostic()?;
        debug!(file = %path.display(), locale = %locale, "loading locale file");
        let map = read_locale(path)?;
        translator.load_tree(&locale, Value::Object(map));
        locales.push(locale);
    }
    Ok(locales)
}
