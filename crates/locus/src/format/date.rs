//! Date/time rendering with `%`-token patterns.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use crate::format::config::FormatConfig;

/// Pattern used when `format_date` is given an empty pattern.
pub const ISO_8601_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Resolve a pattern alias (`long_date`, `short_time`, ...) to a pattern.
///
/// An empty name yields the ISO 8601 pattern; anything that is not an alias
/// is returned unchanged as a literal pattern.
pub fn resolve_pattern<'a>(name: &'a str, config: &'a FormatConfig) -> &'a str {
    if name.is_empty() {
        return ISO_8601_PATTERN;
    }
    config.date_time.pattern(name).unwrap_or(name)
}

/// Format a date/time with a pattern name or literal pattern.
///
/// Supported tokens: `%H` hour, `%M`/`%i` minute, `%S`/`%s` second, `%d`
/// day, `%m` month, `%Y` year, `%l`/`%a` long/short weekday name, and
/// `%F`/`%b` long/short month name. Names come from `config`; an index past
/// the end of a name list renders nothing. Without `date_time`, the current
/// local time is used.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use locus::format::{format_date, FormatConfig};
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .and_then(|d| d.and_hms_opt(14, 7, 9))
///     .unwrap();
/// let config = FormatConfig::default();
/// assert_eq!(format_date("", Some(&at), &config), "2024-03-05T14:07:09");
/// assert_eq!(format_date("%a %d %b", Some(&at), &config), "Tue 05 Mar");
/// ```
pub fn format_date(pattern: &str, date_time: Option<&NaiveDateTime>, config: &FormatConfig) -> String {
    let now;
    let date_time = match date_time {
        Some(dt) => dt,
        None => {
            now = Local::now().naive_local();
            &now
        }
    };
    let pattern = resolve_pattern(pattern, config);

    let weekday = date_time.weekday().num_days_from_sunday() as usize;
    let month = date_time.month0() as usize;

    let mut result = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('H') => push_two_digits(&mut result, date_time.hour()),
            Some('M' | 'i') => push_two_digits(&mut result, date_time.minute()),
            Some('S' | 's') => push_two_digits(&mut result, date_time.second()),
            Some('d') => push_two_digits(&mut result, date_time.day()),
            Some('m') => push_two_digits(&mut result, date_time.month()),
            Some('Y') => result.push_str(&format!("{:04}", date_time.year())),
            Some('l') => push_name(&mut result, &config.long_day_names, weekday),
            Some('F') => push_name(&mut result, &config.long_month_names, month),
            Some('a') => push_name(&mut result, &config.short_day_names, weekday),
            Some('b') => push_name(&mut result, &config.short_month_names, month),
            Some(other) => {
                result.push('%');
                result.push(other);
            }
            None => result.push('%'),
        }
    }
    result
}

fn push_two_digits(out: &mut String, value: u32) {
    out.push_str(&format!("{value:02}"));
}

fn push_name(out: &mut String, names: &[String], index: usize) {
    if let Some(name) = names.get(index) {
        out.push_str(name);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid test date")
    }

    #[test]
    fn aliases_resolve_to_configured_patterns() {
        let config = FormatConfig::default();
        let dt = at(2023, 12, 31, 23, 59, 1);
        assert_eq!(format_date("short_date", Some(&dt), &config), "12/31/2023");
        assert_eq!(format_date("long_time", Some(&dt), &config), "23:59:01");
        assert_eq!(format_date("long_date", Some(&dt), &config), "December 31, 2023");
        assert_eq!(format_date("short_date_time", Some(&dt), &config), "12/31/2023 23:59");
    }

    #[test]
    fn minute_and_second_aliases() {
        let config = FormatConfig::default();
        let dt = at(2024, 1, 2, 3, 4, 5);
        assert_eq!(format_date("%i:%s", Some(&dt), &config), "04:05");
    }

    #[test]
    fn weekday_names_start_at_sunday() {
        let config = FormatConfig::default();
        // 2024-03-03 is a Sunday.
        let dt = at(2024, 3, 3, 0, 0, 0);
        assert_eq!(format_date("%l/%a", Some(&dt), &config), "Sunday/Sun");
    }

    #[test]
    fn short_name_list_renders_nothing_out_of_range() {
        let mut config = FormatConfig::default();
        config.long_month_names = vec!["Janvier".to_string()];
        let dt = at(2024, 6, 1, 0, 0, 0);
        assert_eq!(format_date("[%F]", Some(&dt), &config), "[]");
    }

    #[test]
    fn unknown_tokens_and_trailing_percent_are_literal() {
        let config = FormatConfig::default();
        let dt = at(2024, 6, 1, 0, 0, 0);
        assert_eq!(format_date("%Q %Y%", Some(&dt), &config), "%Q 2024%");
    }

    #[test]
    fn missing_date_uses_current_time() {
        let config = FormatConfig::default();
        let rendered = format_date("%Y", None, &config);
        assert_eq!(rendered.len(), 4);
        assert!(rendered.chars().all(|c| c.is_ascii_digit()));
    }
}
