//! Mutation commands: set-status, set-grade, and remove
//!
//! All three address an assignment by its displayed (1-based) number,
//! mutate or remove it, and write the records file back. A failed update
//! (bad index, out-of-range grade) leaves the file untouched.

use super::shared::{open_course, persist_course, resolve_index, setup_logging};
use crate::Result;
use crate::app::models::AssignmentStatus;
use crate::app::services::error_log::FileErrorSink;
use crate::cli::args::{RemoveArgs, SetGradeArgs, SetStatusArgs};
use colored::Colorize;
use tracing::info;

/// Set-status command runner
pub fn run_set_status(args: SetStatusArgs) -> Result<()> {
    setup_logging(&args.common)?;

    let config = args.common.to_config();
    let sink = FileErrorSink::new(&config.error_log_path);
    let (mut course, _) = open_course(&config, &sink)?;

    let index = resolve_index(args.index, course.len())?;
    let new_status: AssignmentStatus = args.status.into();
    course.assignment_at_mut(index)?.update_status(new_status);
    persist_course(&config, &course)?;

    info!("assignment {} status changed to {}", args.index, new_status);
    if !args.common.quiet {
        println!(
            "{} updated: {}",
            "OK".green().bold(),
            course.assignment_at(index)?
        );
    }
    Ok(())
}

/// Set-grade command runner
pub fn run_set_grade(args: SetGradeArgs) -> Result<()> {
    setup_logging(&args.common)?;

    let config = args.common.to_config();
    let sink = FileErrorSink::new(&config.error_log_path);
    let (mut course, _) = open_course(&config, &sink)?;

    let index = resolve_index(args.index, course.len())?;
    course.assignment_at_mut(index)?.set_grade(args.grade)?;
    persist_course(&config, &course)?;

    info!("assignment {} graded with {}", args.index, args.grade);
    if !args.common.quiet {
        println!(
            "{} graded: {}",
            "OK".green().bold(),
            course.assignment_at(index)?
        );
    }
    Ok(())
}

/// Remove command runner
pub fn run_remove(args: RemoveArgs) -> Result<()> {
    setup_logging(&args.common)?;

    let config = args.common.to_config();
    let sink = FileErrorSink::new(&config.error_log_path);
    let (mut course, _) = open_course(&config, &sink)?;

    let index = resolve_index(args.index, course.len())?;
    let removed = course.remove_at(index)?;
    persist_course(&config, &course)?;

    info!("removed assignment {}", args.index);
    if !args.common.quiet {
        println!("{} removed: {}", "OK".green().bold(), removed);
        println!("Course now holds {} assignment(s).", course.len());
    }
    Ok(())
}
