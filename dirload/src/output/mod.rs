//! Output formatting module for autoload outcomes.
//!
//! This module renders the result of autoload planning as human-readable
//! text, JSON, or player input commands.

mod formatters;

use std::fmt;

use crate::operations::AutoloadOutcome;
use crate::{Error, Result};

pub use formatters::{quote_argument, CommandsFormatter, HumanFormatter, JsonFormatter};

/// Trait for formatting autoload outcomes into different output formats.
pub trait OutputFormatter {
    /// Format the given outcome into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails.
    fn format(&self, outcome: &AutoloadOutcome) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Human,
    /// JSON format.
    Json,
    /// One player input command per line.
    Commands,
}

impl OutputFormat {
    /// Parse an output format name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirload::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::parse("yaml").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "commands" => Ok(Self::Commands),
            _ => Err(Error::Validation {
                field: "format".to_string(),
                message: format!(
                    "unknown output format '{s}': supported formats are human, json, commands"
                ),
            }),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Commands => Box::new(CommandsFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Commands => write!(f, "commands"),
        }
    }
}
