//! Error types for locale loading.
//!
//! Loading is the only fallible operation. Translation lookups never fail;
//! they degrade to sentinel texts, the next fallback locale, or the key.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a locale file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the locale file.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON syntax error with file location context.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The file's top-level value is not a JSON object.
    #[error("'{}' does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    /// No locale id could be derived from the file name.
    #[error("cannot derive a locale from file name '{}'", path.display())]
    InvalidLocaleName { path: PathBuf },
}

impl LoadError {
    /// The path of the file that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::NotAnObject { path }
            | LoadError::InvalidLocaleName { path } => path,
        }
    }

    pub(crate) fn parse(path: PathBuf, error: &serde_json::Error) -> LoadError {
        LoadError::Parse {
            path,
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}
