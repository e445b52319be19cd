//! Add command: create one assignment from a record-format description
//!
//! Unlike batch import, a single-record decode failure propagates to the
//! user directly instead of being swallowed into the error log.

use super::shared::{open_course, persist_course, setup_logging};
use crate::Result;
use crate::app::services::error_log::FileErrorSink;
use crate::app::services::record_codec::RecordCodec;
use crate::cli::args::AddArgs;
use colored::Colorize;
use tracing::info;

/// Add command runner
pub fn run_add(args: AddArgs) -> Result<()> {
    setup_logging(&args.common)?;

    let assignment = RecordCodec::decode(&args.description)?;

    let config = args.common.to_config();
    let sink = FileErrorSink::new(&config.error_log_path);
    let (mut course, _) = open_course(&config, &sink)?;
    course.add(assignment.clone());
    persist_course(&config, &course)?;

    info!("added assignment #{}", course.len());
    if !args.common.quiet {
        println!("{} added: {}", "OK".green().bold(), assignment);
    }
    Ok(())
}
