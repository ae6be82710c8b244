//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate configuration
//! - Media directory fixtures

use assert_cmd::Command;
use dirload::config::environment::ALL_VARS;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables outside the config schema that the CLI reads.
const OTHER_VARS: &[&str] = &["DIRLOAD_CONFIG_DIR", "DIRLOAD_LOG_MODE"];

/// Test environment with an isolated configuration directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for media files
/// - A separate, initially empty, configuration directory
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the dirload configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a command builder with no `DIRLOAD_*` variables inherited.
    ///
    /// The user's own configuration file may still be picked up; use
    /// [`TestEnv::command`] to point at this environment's instead.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("dirload").expect("Failed to find dirload binary");
        for var in ALL_VARS.iter().chain(OTHER_VARS) {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the configuration directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write the user configuration file.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Create a directory of empty files under the temporary directory.
    pub fn media_dir(&self, name: &str, files: &[&str]) -> PathBuf {
        let dir = self.temp_path.join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create media directory");
        for file in files {
            std::fs::write(dir.join(file), b"").expect("Failed to create media file");
        }
        dir
    }
}

/// Path of `name` inside `dir` as a string.
#[allow(dead_code)]
pub fn file_in(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

/// Split command output into its non-empty lines.
#[allow(dead_code)]
pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
