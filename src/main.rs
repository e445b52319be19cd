use clap::Parser;
use gradebook::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Gradebook - Course Assignment Tracker");
    println!("=====================================");
    println!();
    println!("Track academic assignments for a single course, stored one per line:");
    println!("    \"<student>\" \"<theme>\" <YYYY.MM.DD> <Pending|Submitted|Graded> <\"grade\"|\"\">");
    println!();
    println!("USAGE:");
    println!("    gradebook <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import        Import assignments from a record file, skipping malformed lines");
    println!("    export        Export the course's assignments to a record file");
    println!("    list          List all assignments in display order");
    println!("    add           Add a single assignment from a record-format description");
    println!("    set-status    Change the status of an assignment");
    println!("    set-grade     Set the grade of an assignment (0-100)");
    println!("    remove        Remove an assignment");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Import a record file, reporting skipped lines:");
    println!("    gradebook import --input new_assignments.txt");
    println!();
    println!("    # Add one assignment directly:");
    println!("    gradebook add '\"Ivanov Ivan\" \"Intro\" 2025.01.15 Pending \"\"'");
    println!();
    println!("    # Grade assignment number 2 from the listing:");
    println!("    gradebook set-grade --index 2 --grade 87.5");
    println!();
    println!("For detailed help on any command, use:");
    println!("    gradebook <COMMAND> --help");
}
