//! Locale-specific rendering of numbers, currency amounts, and dates.
//!
//! Formatting is independent of translation lookup: every function takes the
//! relevant part of a [`FormatConfig`] explicitly. The `Translator` keeps the
//! config of the first active locale and forwards to these functions.

mod config;
mod currency;
mod date;
mod number;

pub use config::{CurrencyConfig, DateTimeConfig, FormatConfig, NumberConfig};
pub use currency::format_price;
pub use date::{ISO_8601_PATTERN, format_date, resolve_pattern};
pub use number::{MAX_FRACT_DIGITS, format_number, group_thousands};
