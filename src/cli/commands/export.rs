//! Export command: write the course's assignments to a record file

use super::shared::{open_course, setup_logging};
use crate::Result;
use crate::app::services::batch_loader::BatchLoader;
use crate::app::services::error_log::FileErrorSink;
use crate::cli::args::ExportArgs;
use colored::Colorize;
use tracing::info;

/// Export command runner
pub fn run_export(args: ExportArgs) -> Result<()> {
    setup_logging(&args.common)?;

    let config = args.common.to_config();
    let sink = FileErrorSink::new(&config.error_log_path);
    let (course, _) = open_course(&config, &sink)?;

    BatchLoader::save_path(&args.output, &course)?;
    info!(
        "exported {} record(s) to {}",
        course.len(),
        args.output.display()
    );

    if !args.common.quiet {
        println!(
            "{} exported {} assignment(s) to {}",
            "OK".green().bold(),
            course.len(),
            args.output.display()
        );
    }

    Ok(())
}
