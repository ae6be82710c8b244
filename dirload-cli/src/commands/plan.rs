//! Plan command implementation.
//!
//! This module implements the `plan` command, which works out the playlist
//! changes a player should make when it starts playing a file. It stands in
//! for the player's file-start hook.

use crate::error::CliError;
use crate::utils::{current_dir_string, load_configuration, GlobalOptions, HostCapabilities};
use clap::Args;
use dirload::operations::{
    AutoloadOptions, AutoloadOutcome, AutoloadPlan, MemoryPlaylist, PlanExecutor, PlannedAutoload,
};
use dirload::output::OutputFormat;

/// Plan the playlist changes for a playing file.
#[derive(Args)]
pub struct PlanCommand {
    /// The file that started playing (a local path or a URL)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Number of entries already in the player's playlist
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub playlist_count: usize,

    /// Working directory of the player (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Output format (human, json, or commands)
    #[arg(long, default_value = "human", value_parser = OutputFormat::parse)]
    pub format: OutputFormat,
}

impl PlanCommand {
    /// Execute the plan command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Build the plan against the real filesystem
        let cwd = self.cwd.or_else(current_dir_string);
        let options = AutoloadOptions::new(Some(self.path))
            .with_playlist_count(self.playlist_count)
            .with_cwd(cwd);
        let host = HostCapabilities::new();
        let outcome = AutoloadPlan::new(options, &config).build(&host.as_capabilities())?;

        // 3. Render it
        let output = self.format.create_formatter().format(&outcome)?;
        if !output.is_empty() {
            println!("{output}");
        }

        // 4. Replay it against a playlist holding only the playing entry
        if let AutoloadOutcome::Planned(ref planned) = outcome {
            let count = preview(planned)?;
            if self.format == OutputFormat::Human && !global.quiet {
                eprintln!("Playlist will hold {count} entries");
            }
        }

        Ok(())
    }
}

/// Apply the plan to an in-memory playlist and check it lands on the
/// planned entries. Returns the resulting playlist length.
fn preview(planned: &PlannedAutoload) -> Result<usize, CliError> {
    let playing = planned.entries[planned.current].as_str();
    let mut playlist = MemoryPlaylist::with_entries([playing]);
    let result = PlanExecutor::new(&mut playlist).execute(&planned.plan)?;

    if playlist.entries() != planned.entries.as_slice() {
        return Err(CliError::SemanticFailure(
            "Plan does not reproduce the directory order".to_string(),
        ));
    }
    Ok(result.playlist_count.unwrap_or(planned.entries.len()))
}
