//! Command implementations for the gradebook CLI
//!
//! Each subcommand follows the same shape: set up logging, load the
//! records file into a course, perform the operation, write the file
//! back, and report the outcome to the user.

pub mod add;
pub mod export;
pub mod import;
pub mod list;
pub mod modify;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the gradebook CLI
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Import(import_args) => import::run_import(import_args),
        Commands::Export(export_args) => export::run_export(export_args),
        Commands::List(list_args) => list::run_list(list_args),
        Commands::Add(add_args) => add::run_add(add_args),
        Commands::SetStatus(status_args) => modify::run_set_status(status_args),
        Commands::SetGrade(grade_args) => modify::run_set_grade(grade_args),
        Commands::Remove(remove_args) => modify::run_remove(remove_args),
    }
}
