//! Runtime values that flow through the resolver: plain text, locale-aware
//! numbers and dates, escaped opaque values, and the `FluentNone` sentinel
//! used as a best-effort substitute when resolution fails.

use std::fmt;

use chrono::NaiveDateTime;

use crate::errors::FluentError;
use crate::locale::FluentLocale;

/// Given a numeric string matching `-?[0-9]+('.'[0-9]+)?`, returns the
/// native value, tracking whether it carried a fractional part (floats and
/// integers format slightly differently under `NUMBER()`'s defaults).
pub fn numeric_to_native(val: &str) -> f64 {
    val.parse::<f64>().unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    Decimal,
    Percent,
    Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberOptions {
    pub style: NumberStyle,
    pub currency: Option<String>,
    pub use_grouping: bool,
    pub minimum_fraction_digits: Option<usize>,
    pub maximum_fraction_digits: Option<usize>,
    pub minimum_integer_digits: Option<usize>,
}

impl Default for NumberOptions {
    fn default() -> Self {
        NumberOptions {
            style: NumberStyle::Decimal,
            currency: None,
            use_grouping: true,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            minimum_integer_digits: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FluentNumber {
    pub value: f64,
    pub options: NumberOptions,
}

impl FluentNumber {
    pub fn new(value: f64) -> Self {
        FluentNumber {
            value,
            options: NumberOptions::default(),
        }
    }

    pub fn format(&self, locale: &FluentLocale) -> String {
        locale.format_number(self.value, &self.options)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Full,
    Long,
    Medium,
    Short,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateOptions {
    pub date_style: DateStyle,
    pub time_style: DateStyle,
}

impl Default for DateOptions {
    fn default() -> Self {
        DateOptions {
            date_style: DateStyle::Medium,
            time_style: DateStyle::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FluentDate {
    pub value: NaiveDateTime,
    pub options: DateOptions,
}

impl FluentDate {
    pub fn new(value: NaiveDateTime) -> Self {
        FluentDate {
            value,
            options: DateOptions::default(),
        }
    }

    pub fn format(&self, locale: &FluentLocale) -> String {
        locale.format_date(self.value, &self.options)
    }
}

/// Sentinel carrying an identifier, used as a best-effort substitute when
/// resolution fails. Formats to `"id"` (or `"???"` with no identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluentNone {
    pub id: Option<String>,
}

impl FluentNone {
    pub fn new() -> Self {
        FluentNone { id: None }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        FluentNone {
            id: Some(id.into()),
        }
    }

    pub fn format(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => "???".to_string(),
        }
    }
}

/// A runtime value produced while resolving a pattern.
///
/// `Escaped` is how this port represents "the active escaper's output
/// type": escapers in Rust cannot each carry a genuinely distinct Rust type
/// in one heterogeneous registry, so escaped output is a plain string
/// tagged with the escaper's stable name. Compatibility and "is this the
/// escaper's output type" checks compare that tag, which reproduces every
/// externally observable behavior without `dyn Any`.
#[derive(Debug, Clone, PartialEq)]
pub enum FluentValue {
    String(String),
    Number(FluentNumber),
    Date(FluentDate),
    Escaped { escaper: &'static str, value: String },
    None(FluentNone),
}

impl FluentValue {
    pub fn is_none(&self) -> bool {
        matches!(self, FluentValue::None(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FluentValue::Number(n) => Some(n.value),
            _ => None,
        }
    }

    pub fn as_name_str(&self) -> Option<&str> {
        match self {
            FluentValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for FluentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluentValue::String(s) => write!(f, "{}", s),
            FluentValue::Escaped { value, .. } => write!(f, "{}", value),
            FluentValue::None(n) => write!(f, "{}", n.format()),
            FluentValue::Number(_) | FluentValue::Date(_) => {
                write!(f, "<unformatted {:?}>", self)
            }
        }
    }
}

/// An argument supplied by the host application for a `format` call.
#[derive(Debug, Clone, PartialEq)]
pub enum FluentArgument {
    String(String),
    Number(f64),
    Date(NaiveDateTime),
    /// A value already produced by one of this context's escapers (e.g. a
    /// pre-escaped HTML fragment), passed straight through on use.
    Escaped { escaper: &'static str, value: String },
}

impl From<&str> for FluentArgument {
    fn from(s: &str) -> Self {
        FluentArgument::String(s.to_string())
    }
}
impl From<String> for FluentArgument {
    fn from(s: String) -> Self {
        FluentArgument::String(s)
    }
}
impl From<f64> for FluentArgument {
    fn from(n: f64) -> Self {
        FluentArgument::Number(n)
    }
}
impl From<i64> for FluentArgument {
    fn from(n: i64) -> Self {
        FluentArgument::Number(n as f64)
    }
}
impl From<NaiveDateTime> for FluentArgument {
    fn from(d: NaiveDateTime) -> Self {
        FluentArgument::Date(d)
    }
}

/// Sanitizes an external argument into a `FluentValue`, per the rules of
/// `handle_argument`: pass strings and already-escaped values straight
/// through, wrap numbers/dates as locale-aware values, and record a
/// `TypeError` for anything else (there is no "anything else" case left in
/// Rust's closed `FluentArgument` enum, but the active escaper's tag is
/// still checked for compatibility).
pub fn handle_argument(
    arg: &FluentArgument,
    name: &str,
    current_escaper: &'static str,
    errors: &mut Vec<FluentError>,
) -> FluentValue {
    match arg {
        FluentArgument::String(s) => FluentValue::String(s.clone()),
        FluentArgument::Number(n) => FluentValue::Number(FluentNumber::new(*n)),
        FluentArgument::Date(d) => FluentValue::Date(FluentDate::new(*d)),
        FluentArgument::Escaped { escaper, value } => {
            if *escaper == current_escaper {
                FluentValue::Escaped {
                    escaper,
                    value: value.clone(),
                }
            } else {
                errors.push(FluentError::TypeError(format!(
                    "Unsupported external type: {}, escaped value for {}",
                    name, escaper
                )));
                FluentValue::None(FluentNone::with_id(name.to_string()))
            }
        }
    }
}
