//! Line-level decoding and encoding of assignment records
//!
//! Decoding tokenizes a line in a single regex pass, parses each token into
//! a typed field, validates field types and ranges, and assembles an
//! [`Assignment`]. Encoding is the structural inverse: it produces the
//! canonical line so that decoding an encoded record reproduces an equal
//! record (modulo numeric formatting of the grade).

use super::field_parser::{FieldValue, parse_field};
use crate::app::models::{Assignment, AssignmentStatus};
use crate::constants::{DATE_FORMAT, FIELD_NAMES, NULL_TOKEN, RECORD_FIELD_COUNT};
use crate::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Codec between assignment records and canonical record lines
#[derive(Debug)]
pub struct RecordCodec;

/// Token extraction: quoted spans (quotes retained), bare dates, or any
/// other maximal run of non-whitespace characters, in that order
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""[^"]*"|\d{4}\.\d{2}\.\d{2}|\S+"#).expect("valid token pattern")
    })
}

impl RecordCodec {
    /// Split a raw line into record tokens
    ///
    /// Quoted spans keep their quotes so the field parser's quote rule
    /// applies. Internal spaces inside quotes do not split a token.
    pub fn tokenize(line: &str) -> Vec<&str> {
        token_pattern()
            .find_iter(line)
            .map(|m| m.as_str())
            .collect()
    }

    /// Decode one record line into a validated assignment
    pub fn decode(line: &str) -> Result<Assignment> {
        let tokens = Self::tokenize(line);
        if tokens.len() != RECORD_FIELD_COUNT {
            return Err(Error::decode(format!(
                "expected {} fields, got {}",
                RECORD_FIELD_COUNT,
                tokens.len()
            )));
        }

        let mut values = Vec::with_capacity(RECORD_FIELD_COUNT);
        for (field_name, token) in FIELD_NAMES.iter().zip(&tokens) {
            let value = parse_field(token)
                .map_err(|e| Error::decode(format!("{}: {}", field_name, e)))?;
            values.push(value);
        }

        // Token count was checked above, so the conversion cannot fail
        let [student, theme, date, status, grade] = <[FieldValue; RECORD_FIELD_COUNT]>::try_from(
            values,
        )
        .map_err(|_| Error::decode("expected 5 fields"))?;

        let student_name = require_name(student, "student_name")?;
        let theme_name = require_name(theme, "theme_name")?;
        let issue_date = require_date(date)?;
        let status = require_status(status)?;
        let grade = require_grade(grade)?;

        Assignment::with_state(student_name, theme_name, issue_date, status, grade)
    }

    /// Encode an assignment into its canonical record line
    pub fn encode(assignment: &Assignment) -> String {
        let grade = match assignment.grade() {
            Some(value) => format!("\"{}\"", value),
            None => NULL_TOKEN.to_string(),
        };
        format!(
            "\"{}\" \"{}\" {} {} {}",
            assignment.student_name(),
            assignment.theme_name(),
            assignment.issue_date().format(DATE_FORMAT),
            assignment.status(),
            grade
        )
    }
}

fn require_name(value: FieldValue, field_name: &str) -> Result<String> {
    match value {
        FieldValue::Text(text) if !text.is_empty() => Ok(text),
        FieldValue::Text(_) => Err(Error::decode(format!(
            "{} must be a non-empty quoted string",
            field_name
        ))),
        other => Err(Error::decode(format!(
            "{} must be a quoted string, got {} '{}'",
            field_name,
            other.type_name(),
            other
        ))),
    }
}

fn require_date(value: FieldValue) -> Result<NaiveDate> {
    match value {
        FieldValue::Date(date) => Ok(date),
        other => Err(Error::decode(format!(
            "issue_date must be a YYYY.MM.DD date, got {} '{}'",
            other.type_name(),
            other
        ))),
    }
}

fn require_status(value: FieldValue) -> Result<AssignmentStatus> {
    match value {
        FieldValue::Status(status) => Ok(status),
        other => Err(Error::decode(format!("invalid status: '{}'", other))),
    }
}

fn require_grade(value: FieldValue) -> Result<Option<f64>> {
    match value {
        FieldValue::Null => Ok(None),
        FieldValue::Number(grade) => Ok(Some(grade)),
        // Canonical lines carry the grade quoted, so it first parses as
        // text; accept it when the interior is itself a number
        FieldValue::Text(text) => match parse_field(&text) {
            Ok(FieldValue::Number(grade)) => Ok(Some(grade)),
            _ => Err(Error::decode(format!(
                "grade must be a number or \"\", got string '{}'",
                text
            ))),
        },
        other => Err(Error::decode(format!(
            "grade must be a number or \"\", got {} '{}'",
            other.type_name(),
            other
        ))),
    }
}
