//! Narrow interfaces to the outside world.
//!
//! Planning an autoload needs to list a directory, check what a path points
//! at, classify files, and finally touch the player's playlist. Each of these
//! is a trait so that planning can run against in-memory fakes.

use serde::Serialize;

use crate::error::Result;

use super::mime::MimeType;

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A regular file (or anything that is not a directory).
    File,
    /// A directory.
    Directory,
}

/// Lists the plain files of a directory.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryLister {
    /// Names (not paths) of the regular files in `dir`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_files(&self, dir: &str) -> Result<Vec<String>>;
}

/// Reports whether a path exists and what it is.
#[cfg_attr(test, mockall::automock)]
pub trait FileProber {
    /// `None` when nothing exists at `path`.
    fn probe(&self, path: &str) -> Option<FileKind>;
}

/// Determines the MIME type of a file.
#[cfg_attr(test, mockall::automock)]
pub trait MimeClassifier {
    /// Classify the file at `path`, whose extension (with its dot, possibly
    /// empty) is `ext`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type cannot be determined.
    fn classify(&self, path: &str, ext: &str) -> Result<MimeType>;
}

/// The player's playlist.
pub trait PlaylistSink {
    /// Append `file` at the end of the playlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the player rejects the entry.
    fn append(&mut self, file: &str) -> Result<()>;

    /// Move the entry at index `from` so that it ends up before the entry
    /// currently at index `to`. A `to` equal to the playlist length moves
    /// the entry to the end.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    fn move_entry(&mut self, from: usize, to: usize) -> Result<()>;

    /// Number of entries in the playlist.
    fn count(&self) -> usize;
}
