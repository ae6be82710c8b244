//! Error types for the dirload library.
//!
//! The natural comparator and the path normalizer are total and never fail;
//! everything in this module belongs to the collaborators around them
//! (directory listing, MIME classification, configuration, playlist updates).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a dirload error.
///
/// # Examples
///
/// ```
/// use dirload::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dirload library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A directory could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// The directory that was being listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An external command exited with a non-zero status.
    #[error("command {command:?} returned non-zero exit status {status}: {stderr}")]
    Process {
        /// The command line that was run.
        command: Vec<String>,
        /// The exit status, or -1 when terminated by a signal.
        status: i32,
        /// Captured standard error.
        stderr: String,
    },

    /// An external MIME classifier produced output that is not `type/subtype`.
    #[error("command {command:?} returned an invalid MIME type: {output:?}")]
    MimeType {
        /// The command line that was run.
        command: Vec<String>,
        /// The trimmed standard output.
        output: String,
    },

    /// The currently playing file is not among the media files of its directory.
    #[error("cannot find the position of {file} in the media files of its directory")]
    CurrentEntryNotFound {
        /// The entry that was searched for.
        file: String,
    },

    /// A playlist operation was rejected by the sink.
    #[error("playlist error: {details}")]
    Playlist {
        /// Details about the failure.
        details: String,
    },
}
