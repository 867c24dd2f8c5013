//! Per-locale storage of translation trees and formatting rules.

use std::collections::HashMap;

use crate::format::FormatConfig;
use crate::types::TranslationTree;

/// Translation trees and format configs indexed by locale id.
///
/// Trees and configs are stored independently: a locale can have formatting
/// rules without translations and the other way around.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    trees: HashMap<String, TranslationTree>,
    formats: HashMap<String, FormatConfig>,
}

impl LocaleRegistry {
    /// Get the translation tree of a locale.
    pub fn tree(&self, locale: &str) -> Option<&TranslationTree> {
        self.trees.get(locale)
    }

    /// Get or create the translation tree of a locale.
    pub fn tree_mut(&mut self, locale: &str) -> &mut TranslationTree {
        self.trees.entry(locale.to_string()).or_default()
    }

    /// Store a locale's tree, replacing any previous one.
    pub fn insert_tree(&mut self, locale: &str, tree: TranslationTree) {
        self.trees.insert(locale.to_string(), tree);
    }

    /// Get the format config registered for a locale.
    pub fn formats(&self, locale: &str) -> Option<&FormatConfig> {
        self.formats.get(locale)
    }

    /// Register a locale's format config, replacing any previous one.
    pub fn insert_formats(&mut self, locale: &str, config: FormatConfig) {
        self.formats.insert(locale.to_string(), config);
    }

    /// Drop all trees and configs.
    pub fn clear(&mut self) {
        self.trees.clear();
        self.formats.clear();
    }
}
