#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dirload
//!
//! A library for queueing up the rest of a directory when a media player
//! starts playing one of its files.
//!
//! When a file starts playing, its directory is listed, the media files in
//! it are put in natural order, and a plan of playlist commands inserts the
//! siblings around the playing entry.
//!
//! ## Core Types
//!
//! - [`natsort`]: natural ordering of file names (`ep2` before `ep10`)
//! - [`path`]: pure path normalization and splitting
//! - [`media`]: the collaborators that list, probe, and classify files
//! - [`AutoloadPlan`] and [`PlanExecutor`]: planning and applying playlist changes
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use dirload::natsort::natural_sort;
//! use dirload::path::{normalize_path_for, Platform};
//!
//! let mut files = vec!["ep10.mkv", "ep2.mkv", "ep1.mkv"];
//! natural_sort(&mut files, true);
//! assert_eq!(files, ["ep1.mkv", "ep2.mkv", "ep10.mkv"]);
//!
//! let path = normalize_path_for(Platform::Windows, r"C:\Videos\..\Music\", None);
//! assert_eq!(path, "C:/Music");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod natsort;
pub mod operations;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use media::{
    CommandMimeClassifier, DirectoryLister, FileKind, FileProber, FsDirectoryLister, FsFileProber,
    MediaFilter, MimeClassifier, MimeType, PlaylistSink,
};
pub use natsort::{compare, natural_sort};
pub use operations::{
    AutoloadOptions, AutoloadOutcome, AutoloadPlan, Capabilities, ExecutionResult,
    MemoryPlaylist, OperationPlan, PlanAction, PlanExecutor, PlannedAutoload, SkipReason,
};
pub use path::{normalize_path, Platform};
