//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use dirload::config::{Config, ConfigMerger};
///
/// let low = Config { ignore_hidden: Some(true), ..Default::default() };
/// let high = Config { ignore_hidden: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.ignore_hidden, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field, lists included, is replaced wholesale when the source
    /// sets it. An explicitly empty list therefore clears the target's list.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.common_video.is_some() {
            target.common_video.clone_from(&source.common_video);
        }

        if source.common_audio.is_some() {
            target.common_audio.clone_from(&source.common_audio);
        }

        if source.allowed_mime_types.is_some() {
            target
                .allowed_mime_types
                .clone_from(&source.allowed_mime_types);
        }

        if source.ignore_hidden.is_some() {
            target.ignore_hidden = source.ignore_hidden;
        }

        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }
    }
}
