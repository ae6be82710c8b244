//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `sort`: Sort strings in natural order
//! - `normalize`: Normalize a path string
//! - `scan`: List the media files of a directory
//! - `plan`: Plan the playlist changes for a playing file
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod normalize;
pub mod plan;
pub mod scan;
pub mod sort;
pub mod validate;

pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use plan::PlanCommand;
pub use scan::ScanCommand;
pub use sort::SortCommand;
pub use validate::ValidateCommand;
