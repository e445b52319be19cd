//! Gradebook Library
//!
//! A Rust library for tracking academic assignments for a single course,
//! stored in a line-oriented text record format.
//!
//! This library provides tools for:
//! - Parsing loosely-formatted record lines into typed fields
//!   (quoted strings, `YYYY.MM.DD` dates, status tokens, optional grades)
//! - Encoding assignments back into the canonical line format
//! - Batch-importing record files with per-line failure isolation
//! - Managing the assignment lifecycle (status updates, grading)
//! - Routing per-line failures to a timestamped error log

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod batch_loader;
        pub mod error_log;
        pub mod record_codec;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Assignment, AssignmentStatus, Course};
pub use config::Config;

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gradebook operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// A single token could not be classified or parsed
    #[error("{reason}: '{token}'")]
    FieldParse { token: String, reason: String },

    /// A record line failed structural or semantic validation
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Grade outside the accepted range
    #[error("grade {grade} is out of range (expected 0 to 100)")]
    GradeRange { grade: f64 },

    /// Position-based lookup or removal with an invalid index
    #[error("index {index} is out of range for {len} assignment(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration or argument validation error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a field parse error for a single token
    pub fn field_parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FieldParse {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a record decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a grade range error
    pub fn grade_range(grade: f64) -> Self {
        Self::GradeRange { grade }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error is recoverable at the line level during batch import
    pub fn is_line_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FieldParse { .. } | Self::Decode { .. } | Self::GradeRange { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
