//! Import command: batch-load a record file into the course
//!
//! Malformed lines are skipped, reported on the console, and appended to
//! the error log; the rest of the file still imports. The command prints
//! both what succeeded and what failed, never an opaque failure.

use super::shared::{open_course, persist_course, setup_logging};
use crate::Result;
use crate::app::services::batch_loader::BatchLoader;
use crate::app::services::error_log::FileErrorSink;
use crate::cli::args::ImportArgs;
use colored::Colorize;
use tracing::info;

/// Import command runner
pub fn run_import(args: ImportArgs) -> Result<()> {
    setup_logging(&args.common)?;
    args.validate()?;

    let config = args.common.to_config();
    let sink = FileErrorSink::new(&config.error_log_path);
    let (mut course, _) = open_course(&config, &sink)?;
    let before = course.len();

    info!(
        "importing {} into course '{}'",
        args.input.display(),
        course.name()
    );

    let loader = BatchLoader::new(&sink);
    let report = loader.load_path(&args.input, &mut course)?;

    persist_course(&config, &course)?;

    if !args.common.quiet {
        println!(
            "{} {} assignment(s) imported from {} ({:.0}% of {} line(s))",
            "OK".green().bold(),
            report.added.len(),
            args.input.display(),
            report.success_rate(),
            report.lines_seen
        );
        for assignment in &report.added {
            println!("  {} {}", "+".green(), assignment);
        }
        if !report.is_clean() {
            println!(
                "{} {} line(s) skipped (see {}):",
                "WARN".yellow().bold(),
                report.errors.len(),
                config.error_log_path.display()
            );
            for error in &report.errors {
                println!("  {} line {}: {}", "-".red(), error.line, error.message);
            }
        }
        println!(
            "Course now holds {} assignment(s) (was {}).",
            course.len(),
            before
        );
    }

    Ok(())
}
