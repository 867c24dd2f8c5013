//! Number rendering with grouping, fixed fraction digits, and sign symbols.

use crate::format::config::NumberConfig;

/// Largest fraction digit count honored; the scaled value must fit a `u128`.
pub const MAX_FRACT_DIGITS: u32 = 18;

/// Format a number according to `config`.
///
/// The magnitude is rounded half away from zero at `fract_digits` places,
/// the integer part is grouped in threes with `thousand_separator`, and the
/// fraction is zero-padded to exactly `fract_digits` digits. The sign symbol
/// is chosen from the unrounded value.
///
/// # Examples
///
/// ```
/// use locus::format::{format_number, NumberConfig};
///
/// let config = NumberConfig {
///     thousand_separator: ",".to_string(),
///     ..NumberConfig::default()
/// };
/// assert_eq!(format_number(1234567.891, &config), "1,234,567.89");
/// assert_eq!(format_number(-0.5, &config), "-0.50");
/// ```
pub fn format_number(value: f64, config: &NumberConfig) -> String {
    let digits = config.fract_digits.min(MAX_FRACT_DIGITS);
    let factor = 10_u128.pow(digits);

    // Casting saturates, so huge or non-finite magnitudes clamp instead of wrapping.
    let scaled = (value.abs() * factor as f64).round() as u128;
    let integer = scaled.div_euclid(factor);
    let fraction = scaled.rem_euclid(factor);

    let mut result = String::with_capacity(32);
    result.push_str(if value < 0.0 {
        &config.negative_symbol
    } else {
        &config.positive_symbol
    });
    result.push_str(&group_thousands(&integer.to_string(), &config.thousand_separator));
    if digits > 0 {
        result.push_str(&config.decimal_symbol);
        result.push_str(&format!("{fraction:0width$}", width = digits as usize));
    }
    result
}

/// Insert `separator` between every group of three digits, counting from the right.
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + separator.len() * len.div_euclid(3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i).rem_euclid(3) == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
