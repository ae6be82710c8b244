//! Configuration system for dirload.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of extension and MIME type lists
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`DIRLOAD_*`)
//! 3. User config (`~/.config/dirload/config.yaml`, or `config.yaml` in an
//!    explicit configuration directory)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use dirload::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Media extensions: {:?}", config.media_extensions());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use dirload::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     common_video: Some(vec![".mkv".to_string()]),
//!     ignore_hidden: Some(false),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.ignore_hidden_or_default());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{
    Config, DEFAULT_ALLOWED_MIME_TYPES, DEFAULT_CASE_SENSITIVE, DEFAULT_COMMON_AUDIO,
    DEFAULT_COMMON_VIDEO, DEFAULT_IGNORE_HIDDEN,
};
pub use validator::ConfigValidator;
