pub mod format;
pub mod interpreter;
pub mod template;
pub mod types;

pub use format::{CurrencyConfig, DateTimeConfig, FormatConfig, NumberConfig};
pub use interpreter::{LoadError, Translator, compute_fallbacks, plural_category};
pub use serde_json::{Map, Value};
pub use types::{PluralCategory, TranslationNode, TranslationTree};

/// Named parameters for [`Translator::translate`] and [`template::interpolate`].
///
/// Iteration follows insertion order.
pub type Params = Map<String, Value>;

/// Creates a [`Params`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so you can pass integers, floats,
/// booleans, or strings directly.
///
/// # Example
///
/// ```
/// use locus::params;
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_i64(), Some(3));
/// assert_eq!(p["name"].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Params::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Params::new();
            $(
                map.insert(
                    ::std::string::ToString::to_string(&$key),
                    ::std::convert::Into::<$crate::Value>::into($value),
                );
            )+
            map
        }
    };
}
