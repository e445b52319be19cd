//! List command: numbered listing of the course's assignments

use super::shared::{open_course, print_course, setup_logging};
use crate::Result;
use crate::app::services::error_log::FileErrorSink;
use crate::cli::args::ListArgs;

/// List command runner
pub fn run_list(args: ListArgs) -> Result<()> {
    setup_logging(&args.common)?;

    let config = args.common.to_config();
    let sink = FileErrorSink::new(&config.error_log_path);
    let (course, _) = open_course(&config, &sink)?;

    print_course(&course, args.common.quiet);
    Ok(())
}
