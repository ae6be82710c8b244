//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path handling, configuration loading, and the filesystem-backed
//! collaborators that the library plans against.

use crate::error::CliError;
use dirload::media::{CommandMimeClassifier, FsDirectoryLister, FsFileProber};
use dirload::{Config, ConfigBuilder};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the configuration directory location.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The user configuration file (from `--config-dir` when given)
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Borrow a path as UTF-8, which is what the library works with.
pub fn path_to_str(path: &Path) -> Result<&str, CliError> {
    path.to_str().ok_or_else(|| {
        CliError::InvalidArguments(format!("path is not valid UTF-8: {}", path.display()))
    })
}

/// The current working directory as a UTF-8 string.
///
/// Returns `None` when it cannot be determined or is not valid UTF-8, in
/// which case listed file names are always joined onto their directory.
pub fn current_dir_string() -> Option<String> {
    env::current_dir()
        .ok()
        .and_then(|dir| dir.into_os_string().into_string().ok())
}

/// Filesystem and subprocess backed collaborators for autoload planning.
pub struct HostCapabilities {
    /// Lists directories with `std::fs`.
    pub lister: FsDirectoryLister,
    /// Checks paths with `std::fs`.
    pub prober: FsFileProber,
    /// Classifies files with `xdg-mime` and `file`.
    pub classifier: CommandMimeClassifier,
}

impl HostCapabilities {
    /// Collaborators for the host platform.
    pub fn new() -> Self {
        Self {
            lister: FsDirectoryLister,
            prober: FsFileProber,
            classifier: CommandMimeClassifier::new(),
        }
    }

    /// Borrow these as the library's capability set.
    pub fn as_capabilities(&self) -> dirload::Capabilities<'_> {
        dirload::Capabilities {
            lister: &self.lister,
            prober: &self.prober,
            classifier: &self.classifier,
        }
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::new()
    }
}
