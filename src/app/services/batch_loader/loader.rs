//! Line-by-line loading of record files with failure isolation
//!
//! Each non-blank line is decoded independently: a malformed line is
//! logged to the error sink and recorded in the report, and the batch
//! continues. Only an unreadable source fails the whole call, and course
//! state populated by earlier lines is preserved even then.

use super::report::{LineError, LoadReport};
use crate::app::models::Course;
use crate::app::services::error_log::ErrorSink;
use crate::app::services::record_codec::RecordCodec;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Batch loader with an injected error sink for skipped lines
pub struct BatchLoader<'a> {
    sink: &'a dyn ErrorSink,
}

impl<'a> BatchLoader<'a> {
    /// Create a loader routing skipped-line messages to the given sink
    pub fn new(sink: &'a dyn ErrorSink) -> Self {
        Self { sink }
    }

    /// Load records from a line source into the course
    ///
    /// Line numbers are physical (1-indexed); blank lines are skipped
    /// silently and do not count as errors. The report's `added` list
    /// mirrors the assignments appended to the course, in file order.
    pub fn load<R: BufRead>(&self, reader: R, course: &mut Course) -> Result<LoadReport> {
        let mut report = LoadReport::new();

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|e| Error::io(format!("failed to read line {}", number), e))?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            report.lines_seen += 1;

            match RecordCodec::decode(trimmed) {
                Ok(assignment) => {
                    debug!("line {}: added {}", number, assignment);
                    course.add(assignment.clone());
                    report.added.push(assignment);
                }
                Err(e) if e.is_line_recoverable() => {
                    self.sink
                        .log(&format!("skipped line {}: {}", number, e));
                    report.errors.push(LineError {
                        line: number,
                        message: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "batch load: {} added, {} skipped of {} line(s)",
            report.added.len(),
            report.errors.len(),
            report.lines_seen
        );
        Ok(report)
    }

    /// Load records from a file path
    ///
    /// A missing file is fatal for the whole call and is also reported to
    /// the error sink.
    pub fn load_path(&self, path: &Path, course: &mut Course) -> Result<LoadReport> {
        if !path.exists() {
            self.sink
                .log(&format!("file not found: {}", path.display()));
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open {}", path.display()), e))?;
        self.load(BufReader::new(file), course)
    }

    /// Encode all assignments of the course into record lines, in order
    pub fn save(course: &Course) -> Vec<String> {
        course.assignments().iter().map(RecordCodec::encode).collect()
    }

    /// Write the course's records to a file, one line per assignment
    pub fn save_path(path: &Path, course: &Course) -> Result<()> {
        let mut content = Self::save(course).join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        std::fs::write(path, content)
            .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))?;
        debug!("saved {} record(s) to {}", course.len(), path.display());
        Ok(())
    }
}
