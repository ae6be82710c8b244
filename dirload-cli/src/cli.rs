//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, NormalizeCommand, PlanCommand, ScanCommand, SortCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Queue up the rest of a directory when a media file starts playing.
#[derive(Parser)]
#[command(name = "dirload")]
#[command(
    version,
    about = "Autoload sibling media files into a player playlist",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the configuration directory location
    #[arg(long, value_name = "PATH", global = true, env = "DIRLOAD_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Sort strings in natural order
    Sort(SortCommand),

    /// Normalize a path without touching the filesystem
    Normalize(NormalizeCommand),

    /// List the media files of a directory in natural order
    Scan(ScanCommand),

    /// Plan the playlist changes for a playing file
    Plan(PlanCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
