//! Typed parsing of individual record tokens
//!
//! Classifies one whitespace/quote-delimited token as a null marker, quoted
//! string, calendar date, status token, or number. Recognition order is
//! load-bearing: later rules are supersets of earlier ones (a date is also
//! a run of digits and dots), so reordering would misclassify tokens.

use crate::app::models::AssignmentStatus;
use crate::constants::{DATE_FORMAT, NULL_TOKEN};
use crate::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A single parsed field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value, written as `""` (used only for a missing grade)
    Null,
    /// Quoted free-text string with the quotes stripped
    Text(String),
    /// Calendar date in `YYYY.MM.DD` form
    Date(NaiveDate),
    /// Assignment status token
    Status(AssignmentStatus),
    /// Floating point number
    Number(f64),
}

impl FieldValue {
    /// Human-readable name of the value's type, for validation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "string",
            FieldValue::Date(_) => "date",
            FieldValue::Status(_) => "status",
            FieldValue::Number(_) => "number",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("\"\""),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            FieldValue::Status(status) => f.write_str(status.as_str()),
            FieldValue::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Exact `YYYY.MM.DD` shape; calendar validity is checked by chrono
fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}\.\d{2}\.\d{2}$").expect("valid date pattern"))
}

/// Parse one token into a typed field value
///
/// Recognition order (first match wins):
/// 1. the empty-quote marker `""` is null
/// 2. a token wrapped in double quotes is a string (quotes stripped)
/// 3. a `YYYY.MM.DD` shape is a date; an invalid calendar date is an error
/// 4. an exact status token (`Pending`, `Submitted`, `Graded`)
/// 5. digits with at most one dot parse as a number
/// 6. anything else is an unrecognized value
pub fn parse_field(token: &str) -> Result<FieldValue> {
    if token == NULL_TOKEN {
        return Ok(FieldValue::Null);
    }

    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        let interior = &token[1..token.len() - 1];
        return Ok(FieldValue::Text(interior.to_string()));
    }

    if date_pattern().is_match(token) {
        let date = NaiveDate::parse_from_str(token, DATE_FORMAT)
            .map_err(|_| Error::field_parse(token, "invalid calendar date"))?;
        return Ok(FieldValue::Date(date));
    }

    if let Some(status) = AssignmentStatus::from_token(token) {
        return Ok(FieldValue::Status(status));
    }

    if has_numeric_shape(token) {
        let value = token
            .parse::<f64>()
            .map_err(|_| Error::field_parse(token, "invalid number"))?;
        return Ok(FieldValue::Number(value));
    }

    Err(Error::field_parse(token, "unrecognized value"))
}

/// Whether a token consists of ASCII digits and at most one dot,
/// with at least one digit
fn has_numeric_shape(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.matches('.').count() <= 1
        && token.chars().any(|c| c.is_ascii_digit())
}
