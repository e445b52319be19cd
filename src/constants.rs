//! Constants for the gradebook record format and defaults.
//!
//! Centralizes the fixed five-field record layout, date formatting,
//! grade bounds, and default file locations used across the crate.

/// Number of fields in a serialized assignment record
pub const RECORD_FIELD_COUNT: usize = 5;

/// Field names in serialized order, used to annotate decode errors
pub const FIELD_NAMES: [&str; RECORD_FIELD_COUNT] =
    ["student_name", "theme_name", "issue_date", "status", "grade"];

/// Date format used for issue dates in serialized records (`2025.01.15`)
pub const DATE_FORMAT: &str = "%Y.%m.%d";

/// Two-character empty-quote marker for an absent grade
pub const NULL_TOKEN: &str = "\"\"";

/// Minimum accepted grade
pub const GRADE_MIN: f64 = 0.0;

/// Maximum accepted grade
pub const GRADE_MAX: f64 = 100.0;

/// Timestamp format for error log entries
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default records file used by CLI commands
pub const DEFAULT_RECORDS_FILE: &str = "assignments.txt";

/// Default error log file for skipped import lines
pub const DEFAULT_ERROR_LOG: &str = "error.log";

/// Default course name when none is configured
pub const DEFAULT_COURSE_NAME: &str = "Programming Fundamentals";

/// Default instructor name when none is configured
pub const DEFAULT_INSTRUCTOR: &str = "Unassigned";
