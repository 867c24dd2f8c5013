//! Per-locale formatting rules and `_formats` block merging.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Currency amount formatting rules.
///
/// `positive_format` and `negative_format` are patterns over the tokens
/// `%q` (formatted number), `%c` (currency symbol), and `%p` (sign position,
/// which renders nothing because the sign is part of the number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub name: String,
    pub short_name: String,
    pub decimal_symbol: String,
    pub thousand_separator: String,
    pub fract_digits: u32,
    pub positive_symbol: String,
    pub negative_symbol: String,
    pub positive_format: String,
    pub negative_format: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "XXX".to_string(),
            name: "Currency".to_string(),
            short_name: "XXX".to_string(),
            decimal_symbol: ".".to_string(),
            thousand_separator: " ".to_string(),
            fract_digits: 2,
            positive_symbol: String::new(),
            negative_symbol: "-".to_string(),
            positive_format: "%c %p%q".to_string(),
            negative_format: "%c %p%q".to_string(),
        }
    }
}

impl CurrencyConfig {
    /// The number rules used to render the amount part of a price.
    pub fn number_config(&self) -> NumberConfig {
        NumberConfig {
            decimal_symbol: self.decimal_symbol.clone(),
            thousand_separator: self.thousand_separator.clone(),
            fract_digits: self.fract_digits,
            positive_symbol: self.positive_symbol.clone(),
            negative_symbol: self.negative_symbol.clone(),
        }
    }
}

/// Plain number formatting rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConfig {
    pub decimal_symbol: String,
    pub thousand_separator: String,
    pub fract_digits: u32,
    pub positive_symbol: String,
    pub negative_symbol: String,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            decimal_symbol: ".".to_string(),
            thousand_separator: " ".to_string(),
            fract_digits: 2,
            positive_symbol: String::new(),
            negative_symbol: "-".to_string(),
        }
    }
}

/// Named date/time patterns, selectable by alias in `format_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeConfig {
    pub long_time: String,
    pub short_time: String,
    pub long_date: String,
    pub short_date: String,
    pub long_date_time: String,
    pub short_date_time: String,
}

impl Default for DateTimeConfig {
    fn default() -> Self {
        Self {
            long_time: "%H:%M:%S".to_string(),
            short_time: "%H:%M".to_string(),
            long_date: "%F %d, %Y".to_string(),
            short_date: "%m/%d/%Y".to_string(),
            long_date_time: "%F %d, %Y %H:%M:%S".to_string(),
            short_date_time: "%m/%d/%Y %H:%M".to_string(),
        }
    }
}

impl DateTimeConfig {
    /// Look up a pattern by its alias name.
    pub fn pattern(&self, alias: &str) -> Option<&str> {
        let pattern = match alias {
            "long_time" => &self.long_time,
            "short_time" => &self.short_time,
            "long_date" => &self.long_date,
            "short_date" => &self.short_date,
            "long_date_time" => &self.long_date_time,
            "short_date_time" => &self.short_date_time,
            _ => return None,
        };
        Some(pattern)
    }
}

/// All formatting rules of one locale.
///
/// Defaults are English. Day name lists start at Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    pub currency: CurrencyConfig,
    pub number: NumberConfig,
    pub date_time: DateTimeConfig,
    pub short_month_names: Vec<String>,
    pub long_month_names: Vec<String>,
    pub short_day_names: Vec<String>,
    pub long_day_names: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyConfig::default(),
            number: NumberConfig::default(),
            date_time: DateTimeConfig::default(),
            short_month_names: names(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            long_month_names: names(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            short_day_names: names(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            long_day_names: names(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
        }
    }
}

impl FormatConfig {
    /// Merge a `_formats` block into this config.
    ///
    /// Only the fields present in `formats` are overwritten. A section with
    /// a field of the wrong type is skipped as a whole. Non-object input is
    /// ignored.
    pub fn merge(&mut self, formats: &Value) {
        let Value::Object(sections) = formats else {
            tracing::warn!("ignoring formats block that is not an object");
            return;
        };

        if let Some(patch) = section::<CurrencyPatch>(sections.get("currency"), "currency") {
            patch.apply(&mut self.currency);
        }
        if let Some(patch) = section::<NumberPatch>(sections.get("number"), "number") {
            patch.apply(&mut self.number);
        }
        if let Some(patch) = section::<DateTimePatch>(sections.get("date_time"), "date_time") {
            patch.apply(&mut self.date_time);
        }

        for (key, target) in [
            ("short_month_names", &mut self.short_month_names),
            ("long_month_names", &mut self.long_month_names),
            ("short_day_names", &mut self.short_day_names),
            ("long_day_names", &mut self.long_day_names),
        ] {
            let value = sections.get(key).filter(|v| v.is_array());
            if let Some(list) = section::<Vec<String>>(value, key) {
                *target = list;
            }
        }
    }

    /// Return a copy of this config with `formats` merged on top.
    pub fn layered(&self, formats: &Value) -> FormatConfig {
        let mut config = self.clone();
        config.merge(formats);
        config
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// Deserialize one `_formats` section, logging and skipping it on a type error.
fn section<T: DeserializeOwned>(value: Option<&Value>, name: &str) -> Option<T> {
    let value = value?;
    if !value.is_object() && !value.is_array() {
        return None;
    }
    match T::deserialize(value) {
        Ok(patch) => Some(patch),
        Err(error) => {
            tracing::warn!(section = name, %error, "ignoring malformed formats section");
            None
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurrencyPatch {
    symbol: Option<String>,
    name: Option<String>,
    short_name: Option<String>,
    decimal_symbol: Option<String>,
    thousand_separator: Option<String>,
    fract_digits: Option<u32>,
    positive_symbol: Option<String>,
    negative_symbol: Option<String>,
    positive_format: Option<String>,
    negative_format: Option<String>,
}

impl CurrencyPatch {
    fn apply(self, target: &mut CurrencyConfig) {
        set(&mut target.symbol, self.symbol);
        set(&mut target.name, self.name);
        set(&mut target.short_name, self.short_name);
        set(&mut target.decimal_symbol, self.decimal_symbol);
        set(&mut target.thousand_separator, self.thousand_separator);
        set(&mut target.fract_digits, self.fract_digits);
        set(&mut target.positive_symbol, self.positive_symbol);
        set(&mut target.negative_symbol, self.negative_symbol);
        set(&mut target.positive_format, self.positive_format);
        set(&mut target.negative_format, self.negative_format);
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NumberPatch {
    decimal_symbol: Option<String>,
    thousand_separator: Option<String>,
    fract_digits: Option<u32>,
    positive_symbol: Option<String>,
    negative_symbol: Option<String>,
}

impl NumberPatch {
    fn apply(self, target: &mut NumberConfig) {
        set(&mut target.decimal_symbol, self.decimal_symbol);
        set(&mut target.thousand_separator, self.thousand_separator);
        set(&mut target.fract_digits, self.fract_digits);
        set(&mut target.positive_symbol, self.positive_symbol);
        set(&mut target.negative_symbol, self.negative_symbol);
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DateTimePatch {
    long_time: Option<String>,
    short_time: Option<String>,
    long_date: Option<String>,
    short_date: Option<String>,
    long_date_time: Option<String>,
    short_date_time: Option<String>,
}

impl DateTimePatch {
    fn apply(self, target: &mut DateTimeConfig) {
        set(&mut target.long_time, self.long_time);
        set(&mut target.short_time, self.short_time);
        set(&mut target.long_date, self.long_date);
        set(&mut target.short_date, self.short_date);
        set(&mut target.long_date_time, self.long_date_time);
        set(&mut target.short_date_time, self.short_date_time);
    }
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
