//! Build script for dirload-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("dirload")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Autoload sibling media files into a player playlist")
        .long_about(
            "Queue up the rest of a directory, in natural order, when a media player \
             starts playing one of its files",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the configuration directory location")
                .value_name("PATH")
                .global(true)
                .env("DIRLOAD_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("sort")
                .about("Sort strings in natural order")
                .long_about("Sort arguments, or lines of standard input, with digit runs compared by value"),
            Command::new("normalize")
                .about("Normalize a path without touching the filesystem")
                .long_about("Resolve '.', '..' and repeated separators for Unix or Windows paths"),
            Command::new("scan")
                .about("List the media files of a directory in natural order")
                .long_about("Filter a directory by extension and MIME type and sort what remains"),
            Command::new("plan")
                .about("Plan the playlist changes for a playing file")
                .long_about(
                    "Work out the loadfile and playlist-move commands that queue a file's siblings",
                ),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a dirload configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main dirload.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("dirload.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
