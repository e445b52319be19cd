//! Command-line argument definitions for the gradebook CLI
//!
//! Defines the complete CLI interface using the clap derive API. Every
//! subcommand operates on a records file: it is loaded into a course,
//! possibly mutated, and written back.

use crate::app::models::AssignmentStatus;
use crate::constants::{
    DEFAULT_COURSE_NAME, DEFAULT_ERROR_LOG, DEFAULT_INSTRUCTOR, DEFAULT_RECORDS_FILE,
};
use crate::{Config, Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the gradebook assignment tracker
///
/// Tracks assignments for a single course in a line-oriented text file,
/// with batch import that skips malformed lines instead of aborting.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Track course assignments stored in a line-oriented text record format",
    long_about = "Tracks academic assignments (student, theme, issue date, status, grade) for a \
                  single course. Records live in a plain text file, one per line:\n\n  \
                  \"<student>\" \"<theme>\" <YYYY.MM.DD> <Pending|Submitted|Graded> <\"grade\"|\"\">\n\n\
                  Batch import isolates malformed lines: they are skipped, reported, and appended \
                  to an error log, and the rest of the file still loads."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the gradebook CLI
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import assignments from a record file, skipping malformed lines
    Import(ImportArgs),
    /// Export the course's assignments to a record file
    Export(ExportArgs),
    /// List all assignments in display order
    List(ListArgs),
    /// Add a single assignment from a record-format description
    Add(AddArgs),
    /// Change the status of an assignment by its displayed number
    SetStatus(SetStatusArgs),
    /// Set the grade of an assignment by its displayed number
    SetGrade(SetGradeArgs),
    /// Remove an assignment by its displayed number
    Remove(RemoveArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct CommonArgs {
    /// Records file holding the course's assignments
    #[arg(
        short = 'f',
        long = "records",
        value_name = "FILE",
        default_value = DEFAULT_RECORDS_FILE,
        help = "Records file holding the course's assignments"
    )]
    pub records_path: PathBuf,

    /// Error log receiving one timestamped line per skipped record
    #[arg(
        long = "error-log",
        value_name = "FILE",
        default_value = DEFAULT_ERROR_LOG,
        help = "Error log file for skipped import lines"
    )]
    pub error_log_path: PathBuf,

    /// Course name shown in listings
    #[arg(long = "course", value_name = "NAME", default_value = DEFAULT_COURSE_NAME)]
    pub course_name: String,

    /// Instructor name shown in listings
    #[arg(long = "instructor", value_name = "NAME", default_value = DEFAULT_INSTRUCTOR)]
    pub instructor: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the runtime configuration from these arguments
    pub fn to_config(&self) -> Config {
        Config::default()
            .with_records_path(&self.records_path)
            .with_error_log_path(&self.error_log_path)
            .with_course_name(&self.course_name)
            .with_instructor(&self.instructor)
    }
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Input record file to import
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ImportArgs {
    /// Validate the import arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "input file does not exist: {}",
                self.input.display()
            )));
        }
        if self.input.is_dir() {
            return Err(Error::configuration(format!(
                "input path is a directory: {}",
                self.input.display()
            )));
        }
        Ok(())
    }
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Output file for the exported records
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the add command
#[derive(Debug, Clone, Parser)]
pub struct AddArgs {
    /// Record-format description, e.g.
    /// `"Ivanov Ivan" "Intro" 2025.01.15 Pending ""`
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the set-status command
#[derive(Debug, Clone, Parser)]
pub struct SetStatusArgs {
    /// Assignment number as shown by `list` (1-based)
    #[arg(short = 'n', long = "index", value_name = "N")]
    pub index: usize,

    /// New status
    #[arg(short = 's', long = "status", value_enum)]
    pub status: StatusArg,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the set-grade command
#[derive(Debug, Clone, Parser)]
pub struct SetGradeArgs {
    /// Assignment number as shown by `list` (1-based)
    #[arg(short = 'n', long = "index", value_name = "N")]
    pub index: usize,

    /// Grade between 0 and 100
    #[arg(short = 'g', long = "grade", value_name = "VALUE")]
    pub grade: f64,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the remove command
#[derive(Debug, Clone, Parser)]
pub struct RemoveArgs {
    /// Assignment number as shown by `list` (1-based)
    #[arg(short = 'n', long = "index", value_name = "N")]
    pub index: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Status values accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    /// Issued but not yet handed in
    Pending,
    /// Handed in, awaiting grading
    Submitted,
    /// Graded
    Graded,
}

impl From<StatusArg> for AssignmentStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Pending => AssignmentStatus::Pending,
            StatusArg::Submitted => AssignmentStatus::Submitted,
            StatusArg::Graded => AssignmentStatus::Graded,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn common() -> CommonArgs {
        CommonArgs {
            records_path: PathBuf::from("assignments.txt"),
            error_log_path: PathBuf::from("error.log"),
            course_name: "Rust 101".to_string(),
            instructor: "R. Smith".to_string(),
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_log_level() {
        let mut args = common();
        assert_eq!(args.log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn test_to_config() {
        let config = common().to_config();
        assert_eq!(config.course_name, "Rust 101");
        assert_eq!(config.instructor, "R. Smith");
        assert_eq!(config.records_path, PathBuf::from("assignments.txt"));
    }

    #[test]
    fn test_import_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        std::fs::write(&input, "").unwrap();

        let args = ImportArgs {
            input: input.clone(),
            common: common(),
        };
        assert!(args.validate().is_ok());

        let missing = ImportArgs {
            input: temp_dir.path().join("nope.txt"),
            common: common(),
        };
        assert!(missing.validate().is_err());

        let directory = ImportArgs {
            input: temp_dir.path().to_path_buf(),
            common: common(),
        };
        assert!(directory.validate().is_err());
    }

    #[test]
    fn test_status_arg_conversion() {
        assert_eq!(
            AssignmentStatus::from(StatusArg::Pending),
            AssignmentStatus::Pending
        );
        assert_eq!(
            AssignmentStatus::from(StatusArg::Submitted),
            AssignmentStatus::Submitted
        );
        assert_eq!(
            AssignmentStatus::from(StatusArg::Graded),
            AssignmentStatus::Graded
        );
    }

    #[test]
    fn test_parse_set_grade_command() {
        let args = Args::parse_from([
            "gradebook",
            "set-grade",
            "--index",
            "2",
            "--grade",
            "87.5",
        ]);
        match args.get_command() {
            Commands::SetGrade(grade_args) => {
                assert_eq!(grade_args.index, 2);
                assert_eq!(grade_args.grade, 87.5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
