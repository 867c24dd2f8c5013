//! Miette diagnostic wrapper for locale file load errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use locus::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for locale file syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(locus::syntax))]
pub struct LocusDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LocusDiagnostic {
    /// Create a diagnostic pointing at a line and column of `content`.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        LocusDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help: None,
        }
    }

    /// Create a diagnostic from a load error, if it carries a position.
    ///
    /// A file that is valid JSON but not an object is reported at its start.
    pub fn from_load_error(content: &str, err: &LoadError) -> Option<Self> {
        match err {
            LoadError::Parse {
                path,
                line,
                column,
                message,
            } => Some(Self::at(path, content, *line, *column, message.clone())),
            LoadError::NotAnObject { path } => {
                let mut diagnostic =
                    Self::at(path, content, 1, 1, "top-level value is not an object".into());
                diagnostic.help = Some("locale files map keys to translations: { \"key\": \"text\" }".into());
                Some(diagnostic)
            }
            LoadError::Io { .. } | LoadError::InvalidLocaleName { .. } => None,
        }
    }
}
