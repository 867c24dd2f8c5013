//! The translation engine façade.
//!
//! A [`Translator`] owns every locale's translation tree and formatting
//! rules, the ordered list of active locales, and the fallback locale. All
//! lookups walk the fallback chain computed from those and never fail.

use std::iter;
use std::path::Path;

use bon::Builder;
use chrono::NaiveDateTime;
use indexmap::IndexSet;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::Params;
use crate::format::{self, FormatConfig};
use crate::interpreter::error::LoadError;
use crate::interpreter::fallback::compute_fallbacks;
use crate::interpreter::loader::{locale_id_from_path, read_locale_file};
use crate::interpreter::registry::LocaleRegistry;
use crate::interpreter::select::{
    handle_plural, handle_plural_positional, handle_variant, with_count,
};
use crate::interpreter::suggest::compute_suggestions;
use crate::template::{interpolate, interpolate_positional};
use crate::types::{FORMATS_KEY, TranslationNode, TranslationTree};

/// Locale consulted last when nothing else is configured.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// Resolves translation keys and formats values for a set of locales.
///
/// # Example
///
/// ```
/// use locus::{Translator, params};
/// use serde_json::json;
///
/// let mut translator = Translator::builder()
///     .locales(vec!["en-GB".to_string()])
///     .build();
/// translator.load_tree("en", json!({
///     "greeting": "Hello, %{name}!",
///     "items": { "one": "{0} item", "other": "{0} items" },
/// }));
///
/// assert_eq!(translator.translate("greeting", &params! { "name" => "Ann" }), "Hello, Ann!");
/// assert_eq!(translator.tr_plural("items", 5, &[]), "5 items");
/// assert_eq!(translator.translate("missing", &params! {}), "missing");
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Active locales, most preferred first.
    #[builder(default)]
    locales: Vec<String>,

    /// Locale consulted after every active locale and its ancestors.
    #[builder(default = DEFAULT_FALLBACK_LOCALE.to_string())]
    fallback_locale: String,

    /// Formatting rules used by the `format_*` methods.
    ///
    /// Mirrors the first active locale's rules once those are loaded.
    #[builder(default)]
    config: FormatConfig,

    #[builder(skip)]
    registry: LocaleRegistry,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a translator with no active locale and `en` as fallback.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Locale Selection
    // =========================================================================

    /// The most preferred active locale, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locales.first().map(String::as_str)
    }

    /// All active locales, most preferred first.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// The locale consulted after all active locales.
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Make `locale` the only active locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.set_locales(iter::once(locale.into()));
    }

    /// Replace the active locales.
    ///
    /// When the first locale has formatting rules loaded, they become the
    /// current rules. Otherwise the current rules are kept.
    pub fn set_locales<I, S>(&mut self, locales: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        let primary = self
            .locales
            .first()
            .and_then(|l| self.registry.formats(l))
            .cloned();
        if let Some(config) = primary {
            self.config = config;
        }
    }

    /// Set the locale consulted after all active locales.
    ///
    /// An empty id disables the fallback.
    pub fn set_fallback_locale(&mut self, locale: impl Into<String>) {
        self.fallback_locale = locale.into();
    }

    /// The ordered, deduplicated list of locales every lookup walks.
    pub fn fallbacks(&self) -> Vec<String> {
        compute_fallbacks(&self.locales, &self.fallback_locale)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Store the translations of one locale, replacing any earlier ones.
    ///
    /// A top-level `_formats` object is removed from the tree and layered
    /// onto the current formatting rules for this locale. A non-object
    /// `data` leaves the locale with an empty tree.
    pub fn load_tree(&mut self, locale: &str, data: Value) {
        let map = match data {
            Value::Object(map) => map,
            other => {
                warn!(locale, kind = json_kind(&other), "locale data is not an object");
                Map::new()
            }
        };

        let (tree, formats) = TranslationTree::from_map(map);
        debug!(
            locale,
            keys = tree.len(),
            formats = formats.is_some(),
            "loaded locale"
        );
        self.registry.insert_tree(locale, tree);
        if let Some(formats) = formats {
            self.apply_formats(locale, &formats);
        }
    }

    /// Merge translations for several locales at once.
    ///
    /// Top-level keys are locale ids. Nested objects merge into the existing
    /// tree of that locale along their dotted path, so entries loaded earlier
    /// survive unless overwritten. A `_formats` object is layered onto the
    /// current rules and stored under the dotted context it appears in:
    /// `en` for a block directly under `en`, `en.money` for one inside
    /// `en.money`. A `_formats` key at the top level names no context and
    /// is skipped.
    ///
    /// ```
    /// use locus::{Translator, params};
    /// use serde_json::json;
    ///
    /// let mut translator = Translator::new();
    /// translator.set_locale("en");
    /// translator.load(json!({ "en": { "menu": { "open": "Open" } } }));
    /// translator.load(json!({ "en": { "menu": { "close": "Close" } } }));
    ///
    /// assert_eq!(translator.translate("menu.open", &params! {}), "Open");
    /// assert_eq!(translator.translate("menu.close", &params! {}), "Close");
    /// ```
    pub fn load(&mut self, data: Value) {
        let locales = match data {
            Value::Object(locales) => locales,
            other => {
                warn!(kind = json_kind(&other), "translation data is not an object");
                return;
            }
        };

        for (locale, entries) in locales {
            if locale == FORMATS_KEY {
                debug!("ignoring formats block outside any locale");
                continue;
            }
            let Value::Object(entries) = entries else {
                warn!(locale = %locale, "ignoring non-object translations");
                continue;
            };
            let merged = self.merge_entries(&locale, &mut Vec::new(), entries);
            debug!(locale = %locale, merged, "merged locale");
        }
    }

    /// Load a locale file, deriving the locale id from its name.
    ///
    /// Returns the locale id the translations were stored under.
    ///
    /// ```ignore
    /// let locale = translator.load_file("assets/i18n/pt-BR.json")?;
    /// assert_eq!(locale, "pt-BR");
    /// ```
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<String, LoadError> {
        let path = path.as_ref();
        let locale = locale_id_from_path(path)?;
        self.load_file_as(&locale, path)?;
        Ok(locale)
    }

    /// Load a locale file under an explicit locale id.
    pub fn load_file_as(&mut self, locale: &str, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let map = read_locale_file(path)?;
        self.load_tree(locale, Value::Object(map));
        Ok(())
    }

    /// Drop every loaded locale and restore the default settings.
    pub fn reset(&mut self) {
        self.locales.clear();
        self.fallback_locale = DEFAULT_FALLBACK_LOCALE.to_string();
        self.config = FormatConfig::default();
        self.registry.clear();
    }

    /// The translations loaded for a locale.
    pub fn tree(&self, locale: &str) -> Option<&TranslationTree> {
        self.registry.tree(locale)
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate `key` with named parameters.
    ///
    /// A string `locale` parameter is tried before the active locales. The
    /// first locale producing non-empty text wins. Keyed entries act as
    /// plural forms when a `count` parameter is present, and as variants
    /// otherwise. When nothing resolves, a string `default` parameter is
    /// interpolated and returned, or else the key itself.
    pub fn translate(&self, key: &str, params: &Params) -> String {
        if key.is_empty() {
            return String::new();
        }

        let mut requested: Vec<&str> = Vec::with_capacity(self.locales.len() + 1);
        if let Some(Value::String(locale)) = params.get("locale") {
            requested.push(locale);
        }
        requested.extend(self.locales.iter().map(String::as_str));

        let chain = compute_fallbacks(&requested, &self.fallback_locale);
        trace!(key, ?chain, "translating");

        for locale in &chain {
            let text = self.translate_in(key, locale, params);
            if !text.is_empty() {
                trace!(key, locale = %locale, "resolved");
                return text;
            }
        }

        match params.get("default") {
            Some(Value::String(default)) => interpolate(default, params),
            _ => key.to_string(),
        }
    }

    /// Translate `key` with positional parameters.
    ///
    /// Keyed entries render their `other` form, or their first form when
    /// there is no `other`.
    pub fn tr(&self, key: &str, params: &[&str]) -> String {
        if key.is_empty() {
            return String::new();
        }

        for locale in self.fallbacks() {
            let Some(node) = self.lookup(&locale, key) else {
                continue;
            };
            let text = match node {
                TranslationNode::Literal(text) => Some(text.as_str()),
                TranslationNode::Keyed(children) => node.literal_child("other").or_else(|| {
                    children
                        .values()
                        .next()
                        .and_then(TranslationNode::as_literal)
                }),
                TranslationNode::List(_) => None,
            };
            let Some(text) = text else {
                continue;
            };
            trace!(key, locale = %locale, "resolved");
            return interpolate_positional(text, params);
        }

        key.to_string()
    }

    /// Translate `key` for a count, with positional parameters.
    ///
    /// The count is `{0}` in the chosen text and `params` follow from `{1}`.
    ///
    /// ```
    /// use locus::Translator;
    /// use serde_json::json;
    ///
    /// let mut translator = Translator::new();
    /// translator.set_locale("ru");
    /// translator.load_tree("ru", json!({
    ///     "files": { "one": "{0} файл", "few": "{0} файла", "many": "{0} файлов" },
    /// }));
    ///
    /// assert_eq!(translator.tr_plural("files", 21, &[]), "21 файл");
    /// assert_eq!(translator.tr_plural("files", 3, &[]), "3 файла");
    /// assert_eq!(translator.tr_plural("files", 12, &[]), "12 файлов");
    /// ```
    pub fn tr_plural(&self, key: &str, count: i64, params: &[&str]) -> String {
        if key.is_empty() {
            return String::new();
        }

        for locale in self.fallbacks() {
            let Some(node) = self.lookup(&locale, key) else {
                continue;
            };
            match node {
                TranslationNode::Keyed(_) => {
                    return handle_plural_positional(node, &locale, count, params);
                }
                TranslationNode::Literal(text) => return with_count(text, count, params),
                TranslationNode::List(_) => {}
            }
        }

        key.to_string()
    }

    /// Whether any locale of the fallback chain has an entry for `key`.
    ///
    /// Always `false` when no locale is active.
    pub fn key_exists(&self, key: &str) -> bool {
        if self.locales.is_empty() || key.is_empty() {
            return false;
        }
        self.fallbacks()
            .iter()
            .any(|locale| self.lookup(locale, key).is_some())
    }

    /// Keys of the fallback chain that are a likely typo away from `key`.
    pub fn suggest_keys(&self, key: &str) -> Vec<String> {
        let known: IndexSet<String> = self
            .fallbacks()
            .iter()
            .filter_map(|locale| self.registry.tree(locale))
            .flat_map(TranslationTree::leaf_keys)
            .collect();
        compute_suggestions(key, &known)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&TranslationNode> {
        self.registry.tree(locale)?.resolve(key)
    }

    /// Render `key` from a single locale, or return an empty string.
    fn translate_in(&self, key: &str, locale: &str, params: &Params) -> String {
        let Some(node) = self.lookup(locale, key) else {
            return String::new();
        };

        match node {
            TranslationNode::Literal(text) => interpolate(text, params),
            TranslationNode::Keyed(_) => {
                let text = if params.contains_key("count") {
                    handle_plural(node, locale, params)
                } else {
                    handle_variant(node, params)
                };
                interpolate(&text, params)
            }
            TranslationNode::List(items) => TranslationNode::serialize_list(items),
        }
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// The current formatting rules.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Merge a `_formats`-shaped object into the current formatting rules.
    ///
    /// Only fields present in `formats` change. Stored per-locale rules are
    /// left alone.
    pub fn configure(&mut self, formats: &Value) {
        self.config.merge(formats);
    }

    /// Format a number with the current number rules.
    pub fn format_number(&self, value: f64) -> String {
        format::format_number(value, &self.config.number)
    }

    /// Format an amount of money with the current currency rules.
    pub fn format_price(&self, value: f64) -> String {
        format::format_price(value, &self.config.currency)
    }

    /// Format a date and time with the current rules.
    ///
    /// `pattern` is either a strftime-like pattern or one of the aliases
    /// `long_time`, `short_time`, `long_date`, `short_date`,
    /// `long_date_time` and `short_date_time`. `None` formats the current
    /// local time.
    pub fn format_date(&self, pattern: &str, date_time: Option<&NaiveDateTime>) -> String {
        format::format_date(pattern, date_time, &self.config)
    }

    fn apply_formats(&mut self, locale: &str, formats: &Value) {
        let config = self.config.layered(formats);
        if self.locale() == Some(locale) {
            self.config = config.clone();
        }
        self.registry.insert_formats(locale, config);
    }

    /// Merge `entries` below `path` into the tree of `locale`, returning the
    /// number of leaves written.
    fn merge_entries(
        &mut self,
        locale: &str,
        path: &mut Vec<String>,
        mut entries: Map<String, Value>,
    ) -> usize {
        if let Some(formats) = entries.shift_remove(FORMATS_KEY) {
            let context = iter::once(locale)
                .chain(path.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(".");
            if formats.is_object() {
                debug!(context = %context, "applying formats block");
                self.apply_formats(&context, &formats);
            } else {
                warn!(
                    context = %context,
                    kind = json_kind(&formats),
                    "formats block is not an object"
                );
            }
        }

        let mut merged = 0;
        for (key, value) in entries {
            match value {
                Value::Object(nested) => {
                    path.push(key);
                    merged += self.merge_entries(locale, path, nested);
                    path.pop();
                }
                other => {
                    let Some(node) = TranslationNode::from_value(other) else {
                        continue;
                    };
                    let segments: Vec<&str> = path
                        .iter()
                        .map(String::as_str)
                        .chain(iter::once(key.as_str()))
                        .collect();
                    self.registry.tree_mut(locale).insert_path(&segments, node);
                    merged += 1;
                }
            }
        }
        merged
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
