//! Command to normalize a path string.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use dirload::path::{normalize_path_for, Platform};

/// Normalize a path without touching the filesystem.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Working directory that relative paths are anchored at
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Path conventions to apply (unix or windows; defaults to the host's)
    #[arg(long, value_name = "PLATFORM", value_parser = Platform::parse)]
    pub platform: Option<Platform>,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let platform = self.platform.unwrap_or_default();
        let normalized = normalize_path_for(platform, &self.path, self.cwd.as_deref());
        println!("{normalized}");
        Ok(())
    }
}
