//! Autoload operations using the plan-execute pattern.
//!
//! This module separates deciding what to do to the playlist from doing it,
//! which enables dry-run previews, better testing, and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Checks the playing path, lists and filters its directory,
//!    sorts the media files, and builds a plan of playlist commands
//! 2. **Execution**: Takes the plan and applies it to a [`PlaylistSink`]
//!
//! # Examples
//!
//! ```no_run
//! use dirload::config::ConfigBuilder;
//! use dirload::media::{CommandMimeClassifier, FsDirectoryLister, FsFileProber};
//! use dirload::operations::{
//!     AutoloadOptions, AutoloadOutcome, AutoloadPlan, Capabilities, MemoryPlaylist, PlanExecutor,
//! };
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let capabilities = Capabilities {
//!     lister: &FsDirectoryLister,
//!     prober: &FsFileProber,
//!     classifier: &CommandMimeClassifier::new(),
//! };
//! let playing = "/media/show/ep2.mkv";
//!
//! // Generate plan
//! let options = AutoloadOptions::new(Some(playing.into()));
//! let outcome = AutoloadPlan::new(options, &config).build(&capabilities).unwrap();
//!
//! // Execute plan
//! if let AutoloadOutcome::Planned(planned) = outcome {
//!     let mut playlist = MemoryPlaylist::with_entries([playing]);
//!     PlanExecutor::new(&mut playlist).execute(&planned.plan).unwrap();
//! }
//! ```
//!
//! [`PlaylistSink`]: crate::media::PlaylistSink

pub mod autoload;
pub mod executor;
pub mod plan;
pub mod playlist;

#[cfg(test)]
mod proptests;

pub use autoload::{
    AutoloadOptions, AutoloadOutcome, AutoloadPlan, Capabilities, PlannedAutoload, SkipReason,
};
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use playlist::MemoryPlaylist;
