//! Locus interpreter: locale resolution and translation lookup.
//!
//! This module ties the pieces of a lookup together. It computes the locale
//! fallback chain, resolves plural categories, selects plural forms and
//! variants from keyed entries, and exposes the [`Translator`] façade that
//! owns all loaded locales.

mod error;
mod fallback;
mod loader;
mod plural;
mod registry;
mod select;
mod suggest;
mod translator;

pub use error::LoadError;
pub use fallback::{ancestry, compute_fallbacks, locale_root};
pub use loader::{locale_id_from_path, parse_locale_str, read_locale_file};
pub use plural::plural_category;
pub use registry::LocaleRegistry;
pub use select::{
    PLURAL_MISSING_FORM, PLURAL_NOT_OBJECT, VARIANT_NO_MATCH, VARIANT_NOT_OBJECT, handle_plural,
    handle_plural_positional, handle_variant,
};
pub use suggest::compute_suggestions;
pub use translator::{DEFAULT_FALLBACK_LOCALE, Translator};
