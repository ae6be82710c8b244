//! Main entry point for the dirload CLI.
//!
//! This is the command-line interface for the dirload media autoloader.
//! It provides commands for:
//! - `sort`: Sort strings in natural order
//! - `normalize`: Normalize a path
//! - `scan`: List the media files of a directory
//! - `plan`: Plan the playlist changes for a playing file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity, and route library records through it
    let logger = dirload::init_logger(cli.verbose, cli.quiet);
    logger.install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Sort(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Scan(cmd) => cmd.execute(&global),
        cli::Command::Plan(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
