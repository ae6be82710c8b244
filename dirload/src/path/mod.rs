//! Path handling for the currently playing file and its siblings.
//!
//! This module provides:
//! - **Normalization**: separator unification and `.`/`..` resolution
//!   without filesystem access
//! - **Splitting**: directory/file name and stem/extension splits
//! - **Platforms**: explicit Unix/Windows conventions so that every
//!   function here is a pure string transformation
//!
//! # Examples
//!
//! ```
//! use dirload::path::{normalize_path_for, split_for, Platform};
//!
//! let playing = "/media/show/./season1/../ep2.mkv";
//! let normalized = normalize_path_for(Platform::Unix, playing, None);
//! assert_eq!(normalized, "/media/show/ep2.mkv");
//!
//! let (dir, file) = split_for(Platform::Unix, &normalized);
//! assert_eq!((dir, file), ("/media/show", "ep2.mkv"));
//! ```

pub mod normalize;
pub mod platform;
pub mod split;

#[cfg(test)]
mod proptests;

pub use normalize::{is_absolute, normalize_path, normalize_path_for, unify_separators};
pub use platform::Platform;
pub use split::{is_remote, join, join_for, split, split_ext, split_for};
