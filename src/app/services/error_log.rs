//! Error sink for skipped-line messages
//!
//! Batch import routes per-line failures to an injected [`ErrorSink`]
//! rather than a global logger, so tests can substitute an in-memory sink
//! and assert on the captured messages. The file-backed sink appends one
//! timestamped line per message and is best-effort: a failed write warns
//! and never fails the caller.

use crate::constants::LOG_TIMESTAMP_FORMAT;
use chrono::Local;
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Destination for formatted error messages
pub trait ErrorSink {
    /// Record one error message; must not fail the caller
    fn log(&self, message: &str);
}

/// File-backed sink appending `[YYYY-MM-DD HH:MM:SS] <message>` lines
#[derive(Debug, Clone)]
pub struct FileErrorSink {
    path: PathBuf,
}

impl FileErrorSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrorSink for FileErrorSink {
    fn log(&self, message: &str) {
        let entry = format!(
            "[{}] {}\n",
            Local::now().format(LOG_TIMESTAMP_FORMAT),
            message
        );
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(entry.as_bytes()));

        if let Err(e) = result {
            warn!("failed to append to error log {}: {}", self.path.display(), e);
        }
    }
}

/// In-memory sink capturing messages for test assertions
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured messages in logging order
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl ErrorSink for MemorySink {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_sink_captures_in_order() {
        let sink = MemorySink::new();
        sink.log("first");
        sink.log("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_file_sink_appends_timestamped_lines() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("error.log");
        let sink = FileErrorSink::new(&log_path);

        sink.log("skipped line 3: decode error");
        sink.log("skipped line 7: decode error");

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            // "[2025-08-24 10:15:00] message"
            assert!(line.starts_with('['), "line: {}", line);
            assert!(line.contains("] skipped line"), "line: {}", line);
        }
    }

    #[test]
    fn test_file_sink_write_failure_is_swallowed() {
        // A directory path cannot be opened for appending
        let temp_dir = TempDir::new().unwrap();
        let sink = FileErrorSink::new(temp_dir.path());
        sink.log("message"); // must not panic or return an error
    }
}
