//! Currency amount rendering.

use crate::format::config::CurrencyConfig;
use crate::format::number::format_number;

/// Format a currency amount according to `config`.
///
/// The amount is formatted as a number with the currency's own separators,
/// digits, and sign symbols, then substituted into `positive_format` or
/// `negative_format`. Unknown `%X` tokens are kept literally.
///
/// # Examples
///
/// ```
/// use locus::format::{format_price, CurrencyConfig};
///
/// let config = CurrencyConfig {
///     symbol: "$".to_string(),
///     thousand_separator: ",".to_string(),
///     positive_format: "%c%q".to_string(),
///     ..CurrencyConfig::default()
/// };
/// assert_eq!(format_price(1234.5, &config), "$1,234.50");
/// ```
pub fn format_price(value: f64, config: &CurrencyConfig) -> String {
    let number = format_number(value, &config.number_config());
    let pattern = if value < 0.0 {
        &config.negative_format
    } else {
        &config.positive_format
    };

    let mut result = String::with_capacity(pattern.len() + number.len() + config.symbol.len());
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('q') => result.push_str(&number),
            Some('c') => result.push_str(&config.symbol),
            Some('p') => {}
            Some(other) => {
                result.push('%');
                result.push(other);
            }
            None => result.push('%'),
        }
    }
    result
}
