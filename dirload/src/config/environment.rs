//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `DIRLOAD_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Video extension list override (comma-separated).
pub const COMMON_VIDEO_ENV: &str = "DIRLOAD_COMMON_VIDEO";
/// Audio extension list override (comma-separated).
pub const COMMON_AUDIO_ENV: &str = "DIRLOAD_COMMON_AUDIO";
/// Allowed MIME type list override (comma-separated).
pub const ALLOWED_MIME_TYPES_ENV: &str = "DIRLOAD_ALLOWED_MIME_TYPES";
/// Hidden file flag override.
pub const IGNORE_HIDDEN_ENV: &str = "DIRLOAD_IGNORE_HIDDEN";
/// Case sensitivity flag override.
pub const CASE_SENSITIVE_ENV: &str = "DIRLOAD_CASE_SENSITIVE";

/// Every variable read by [`EnvironmentConfig::apply_overrides`].
pub const ALL_VARS: &[&str] = &[
    COMMON_VIDEO_ENV,
    COMMON_AUDIO_ENV,
    ALLOWED_MIME_TYPES_ENV,
    IGNORE_HIDDEN_ENV,
    CASE_SENSITIVE_ENV,
];

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use dirload::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all `DIRLOAD_*` configuration variables and applies them with
    /// higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(COMMON_VIDEO_ENV) {
            config.common_video = Some(Self::parse_list(&val));
        }

        if let Ok(val) = env::var(COMMON_AUDIO_ENV) {
            config.common_audio = Some(Self::parse_list(&val));
        }

        if let Ok(val) = env::var(ALLOWED_MIME_TYPES_ENV) {
            config.allowed_mime_types = Some(Self::parse_list(&val));
        }

        if let Ok(val) = env::var(IGNORE_HIDDEN_ENV) {
            config.ignore_hidden = Some(Self::parse_bool(IGNORE_HIDDEN_ENV, &val)?);
        }

        if let Ok(val) = env::var(CASE_SENSITIVE_ENV) {
            config.case_sensitive = Some(Self::parse_bool(CASE_SENSITIVE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated list, trimming items and dropping empty ones.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    }
}
