//! Configuration for gradebook operations.
//!
//! Holds the file locations and course identity used by CLI commands.
//! Values come from CLI arguments layered over the built-in defaults.

use crate::constants::{
    DEFAULT_COURSE_NAME, DEFAULT_ERROR_LOG, DEFAULT_INSTRUCTOR, DEFAULT_RECORDS_FILE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for gradebook commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the line-oriented records file
    pub records_path: PathBuf,

    /// Path to the error log receiving skipped-line messages
    pub error_log_path: PathBuf,

    /// Course name (immutable for the lifetime of a course)
    pub course_name: String,

    /// Instructor name
    pub instructor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(DEFAULT_RECORDS_FILE),
            error_log_path: PathBuf::from(DEFAULT_ERROR_LOG),
            course_name: DEFAULT_COURSE_NAME.to_string(),
            instructor: DEFAULT_INSTRUCTOR.to_string(),
        }
    }
}

impl Config {
    /// Set the records file path
    pub fn with_records_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.records_path = path.into();
        self
    }

    /// Set the error log path
    pub fn with_error_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log_path = path.into();
        self
    }

    /// Set the course name
    pub fn with_course_name(mut self, name: impl Into<String>) -> Self {
        self.course_name = name.into();
        self
    }

    /// Set the instructor name
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.records_path, PathBuf::from(DEFAULT_RECORDS_FILE));
        assert_eq!(config.error_log_path, PathBuf::from(DEFAULT_ERROR_LOG));
        assert_eq!(config.course_name, DEFAULT_COURSE_NAME);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_records_path("custom.txt")
            .with_error_log_path("custom.log")
            .with_course_name("Rust 101")
            .with_instructor("R. Smith");

        assert_eq!(config.records_path, PathBuf::from("custom.txt"));
        assert_eq!(config.error_log_path, PathBuf::from("custom.log"));
        assert_eq!(config.course_name, "Rust 101");
        assert_eq!(config.instructor, "R. Smith");
    }
}
