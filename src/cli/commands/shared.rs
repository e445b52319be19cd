//! Shared components for CLI commands
//!
//! Common helpers used across the subcommand implementations: logging
//! setup, loading and persisting the records file, index translation,
//! and listing output.

use crate::app::models::Course;
use crate::app::services::batch_loader::{BatchLoader, LoadReport};
use crate::app::services::error_log::ErrorSink;
use crate::cli::args::CommonArgs;
use crate::{Config, Error, Result};
use colored::Colorize;
use tracing::{debug, warn};

/// Set up structured logging based on verbosity flags
pub fn setup_logging(common: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = common.log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gradebook={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the records file into a fresh course
///
/// A missing records file yields an empty course (nothing has been saved
/// yet). Lines that fail to decode are skipped with a warning so a few
/// bad records never lock the user out of the rest of the file.
pub fn open_course(config: &Config, sink: &dyn ErrorSink) -> Result<(Course, LoadReport)> {
    let mut course = Course::new(&config.course_name, &config.instructor);

    if !config.records_path.exists() {
        debug!(
            "records file {} does not exist yet, starting empty",
            config.records_path.display()
        );
        return Ok((course, LoadReport::new()));
    }

    let loader = BatchLoader::new(sink);
    let report = loader.load_path(&config.records_path, &mut course)?;
    if !report.is_clean() {
        warn!(
            "{} line(s) in {} could not be decoded and were skipped",
            report.errors.len(),
            config.records_path.display()
        );
    }
    Ok((course, report))
}

/// Write the course back to the records file
pub fn persist_course(config: &Config, course: &Course) -> Result<()> {
    BatchLoader::save_path(&config.records_path, course)
}

/// Translate a 1-based display number into a zero-based index
pub fn resolve_index(display_number: usize, len: usize) -> Result<usize> {
    if display_number == 0 || display_number > len {
        return Err(Error::index_out_of_range(display_number, len));
    }
    Ok(display_number - 1)
}

/// Print the course header and a numbered assignment listing
pub fn print_course(course: &Course, quiet: bool) {
    if quiet {
        return;
    }
    let header = course.to_string();
    println!("{}", header.as_str().bold());
    if course.is_empty() {
        println!("{}", "No assignments.".dimmed());
        return;
    }
    for (number, assignment) in course.assignments().iter().enumerate() {
        println!("{:>3}. {}", number + 1, assignment);
    }
}
