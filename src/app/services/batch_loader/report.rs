//! Load statistics and per-line error reporting for batch import

use crate::app::models::Assignment;
use serde::{Deserialize, Serialize};

/// One skipped line with its 1-indexed position and failure reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineError {
    /// Physical line number in the source (1-indexed)
    pub line: usize,

    /// Decode failure message for that line
    pub message: String,
}

/// Result of one batch load: what was added and what was skipped
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// Assignments successfully decoded and added, in file order
    pub added: Vec<Assignment>,

    /// Skipped lines with reasons, in processing order
    pub errors: Vec<LineError>,

    /// Number of non-blank lines encountered
    pub lines_seen: usize,
}

impl LoadReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Success rate over non-blank lines, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_seen == 0 {
            0.0
        } else {
            (self.added.len() as f64 / self.lines_seen as f64) * 100.0
        }
    }

    /// Whether every non-blank line decoded successfully
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
