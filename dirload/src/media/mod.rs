//! Media discovery collaborators.
//!
//! The traits in [`capabilities`] are everything autoload planning needs from
//! the outside world. [`fs`] and [`mime`] implement them against the real
//! filesystem and command-line tools; [`filter`] combines them with the
//! configuration to decide what counts as media.

pub mod capabilities;
pub mod filter;
pub mod fs;
pub mod mime;

pub use capabilities::{DirectoryLister, FileKind, FileProber, MimeClassifier, PlaylistSink};
pub use filter::{FilteredListing, MediaFilter};
pub use fs::{FsDirectoryLister, FsFileProber};
pub use mime::{CommandMimeClassifier, MimeType, FILE_PREFERRED_EXTENSIONS};
