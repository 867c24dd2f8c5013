//! Reading locale files from disk.
//!
//! A locale file is a JSON object. Its locale id is the file name without
//! directory or extension: `lang/pt-BR.json` holds `pt-BR`.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::interpreter::error::LoadError;

/// Read and parse a locale file into its top-level JSON object.
pub fn read_locale_file(path: impl AsRef<Path>) -> Result<Map<String, Value>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_locale_str(&content, path)
}

/// Parse locale file content, attributing errors to `path`.
pub fn parse_locale_str(content: &str, path: &Path) -> Result<Map<String, Value>, LoadError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| LoadError::parse(path.to_path_buf(), &e))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Derive a locale id from a file path.
///
/// Both `/` and `\` count as directory separators, whatever the platform.
/// Everything from the last `.` of the file name on is dropped.
///
/// ```
/// use locus::interpreter::locale_id_from_path;
///
/// assert_eq!(locale_id_from_path("lang/pt-BR.json").ok(), Some("pt-BR".to_string()));
/// assert_eq!(locale_id_from_path(r"C:\i18n\de.json").ok(), Some("de".to_string()));
/// assert!(locale_id_from_path("lang/.json").is_err());
/// ```
pub fn locale_id_from_path(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let full = path.to_string_lossy();
    let file_name = full.rsplit(['/', '\\']).next().unwrap_or_default();
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);

    if stem.is_empty() {
        return Err(LoadError::InvalidLocaleName {
            path: path.to_path_buf(),
        });
    }
    Ok(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_id_without_extension() {
        assert_eq!(locale_id_from_path("fr").ok(), Some("fr".to_string()));
        assert_eq!(locale_id_from_path("a/b/en-US").ok(), Some("en-US".to_string()));
    }

    #[test]
    fn locale_id_drops_only_last_extension() {
        assert_eq!(
            locale_id_from_path("lang/en.backup.json").ok(),
            Some("en.backup".to_string())
        );
    }

    #[test]
    fn empty_file_name_is_rejected() {
        assert!(matches!(
            locale_id_from_path("lang/"),
            Err(LoadError::InvalidLocaleName { .. })
        ));
    }

    #[test]
    fn parse_error_carries_position() {
        let err = parse_locale_str("{\n  \"a\": }", Path::new("x.json"));
        let Err(LoadError::Parse { line, column, .. }) = err else {
            panic!("expected parse error, got {err:?}");
        };
        assert_eq!(line, 2);
        assert!(column > 0);
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = parse_locale_str("[1, 2]", Path::new("x.json"));
        assert!(matches!(err, Err(LoadError::NotAnObject { .. })));
    }
}
