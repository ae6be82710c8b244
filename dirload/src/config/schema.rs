//! Configuration schema definitions.
//!
//! Every field is optional so that configuration sources can be layered;
//! the `*_or_default` accessors resolve a merged configuration against the
//! built-in defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Extensions treated as video without consulting a MIME classifier.
pub const DEFAULT_COMMON_VIDEO: &[&str] = &[".mp4", ".mkv", ".webm"];

/// Extensions treated as audio without consulting a MIME classifier.
pub const DEFAULT_COMMON_AUDIO: &[&str] = &[".mp3", ".flac"];

/// Top-level MIME types accepted as media.
pub const DEFAULT_ALLOWED_MIME_TYPES: &[&str] = &["video", "audio"];

/// Whether dot-files are skipped by default.
pub const DEFAULT_IGNORE_HIDDEN: bool = true;

/// Whether natural sorting distinguishes case by default.
pub const DEFAULT_CASE_SENSITIVE: bool = true;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use dirload::config::Config;
///
/// let config: Config = serde_yaml::from_str("common_video: [\".avi\"]\nignore_hidden: false\n").unwrap();
/// assert_eq!(config.common_video, Some(vec![".avi".to_string()]));
/// assert!(!config.ignore_hidden_or_default());
/// assert!(config.case_sensitive_or_default());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Video extensions accepted without MIME classification (with leading dot).
    pub common_video: Option<Vec<String>>,

    /// Audio extensions accepted without MIME classification (with leading dot).
    pub common_audio: Option<Vec<String>>,

    /// Top-level MIME types (`video`, `audio`, ...) accepted as media.
    pub allowed_mime_types: Option<Vec<String>>,

    /// Skip files whose name starts with a dot.
    pub ignore_hidden: Option<bool>,

    /// Distinguish upper and lower case when sorting.
    pub case_sensitive: Option<bool>,
}

impl Config {
    /// The union of the video and audio extension lists.
    #[must_use]
    pub fn media_extensions(&self) -> BTreeSet<String> {
        let video = resolve_list(self.common_video.as_deref(), DEFAULT_COMMON_VIDEO);
        let audio = resolve_list(self.common_audio.as_deref(), DEFAULT_COMMON_AUDIO);
        video.into_iter().chain(audio).collect()
    }

    /// The accepted top-level MIME types.
    #[must_use]
    pub fn allowed_mime_types_or_default(&self) -> BTreeSet<String> {
        resolve_list(self.allowed_mime_types.as_deref(), DEFAULT_ALLOWED_MIME_TYPES)
            .into_iter()
            .collect()
    }

    /// Whether hidden files are skipped.
    #[must_use]
    pub fn ignore_hidden_or_default(&self) -> bool {
        self.ignore_hidden.unwrap_or(DEFAULT_IGNORE_HIDDEN)
    }

    /// Whether sorting is case-sensitive.
    #[must_use]
    pub fn case_sensitive_or_default(&self) -> bool {
        self.case_sensitive.unwrap_or(DEFAULT_CASE_SENSITIVE)
    }
}

fn resolve_list(configured: Option<&[String]>, defaults: &[&str]) -> Vec<String> {
    configured.map_or_else(
        || defaults.iter().map(|s| (*s).to_string()).collect(),
        <[String]>::to_vec,
    )
}
