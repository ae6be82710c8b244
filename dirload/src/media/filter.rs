//! Deciding which directory entries are media.

use std::collections::BTreeSet;

use crate::config::Config;
use crate::error::Result;
use crate::path::{join_for, split_ext, Platform};

use super::capabilities::MimeClassifier;

/// Accepts media files by extension, falling back to their MIME type.
///
/// # Examples
///
/// ```
/// use dirload::config::Config;
/// use dirload::media::{MediaFilter, MimeClassifier, MimeType};
///
/// struct Everything;
/// impl MimeClassifier for Everything {
///     fn classify(&self, _path: &str, _ext: &str) -> dirload::Result<MimeType> {
///         Ok(MimeType::new("text", "plain"))
///     }
/// }
///
/// let filter = MediaFilter::from_config(&Config::default());
/// assert!(filter.is_media("ep1.mkv", "ep1.mkv", &Everything));
/// assert!(!filter.is_media("notes.txt", "notes.txt", &Everything));
/// assert!(!filter.is_media(".ep0.mkv", ".ep0.mkv", &Everything));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFilter {
    extensions: BTreeSet<String>,
    allowed_mime_types: BTreeSet<String>,
    ignore_hidden: bool,
}

impl MediaFilter {
    /// Builds a filter from the resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            extensions: config.media_extensions(),
            allowed_mime_types: config.allowed_mime_types_or_default(),
            ignore_hidden: config.ignore_hidden_or_default(),
        }
    }

    /// Whether the file `name`, reachable at `path`, is a media file.
    ///
    /// Hidden names and known extensions are decided without running the
    /// classifier. A file the classifier cannot identify is not media.
    pub fn is_media<C>(&self, name: &str, path: &str, classifier: &C) -> bool
    where
        C: MimeClassifier + ?Sized,
    {
        self.check(name, path, classifier).unwrap_or_else(|e| {
            log::warn!("skipping {path}: {e}");
            false
        })
    }

    /// Like [`MediaFilter::is_media`], but reports classification failures.
    ///
    /// # Errors
    ///
    /// Returns the classifier's error for a file whose extension is not
    /// configured and whose MIME type cannot be determined.
    pub fn check<C>(&self, name: &str, path: &str, classifier: &C) -> Result<bool>
    where
        C: MimeClassifier + ?Sized,
    {
        if self.ignore_hidden && name.starts_with('.') {
            log::debug!("skipping hidden file {name}");
            return Ok(false);
        }

        let (_, ext) = split_ext(name);
        if self.extensions.contains(ext) {
            return Ok(true);
        }

        let mime = classifier.classify(path, ext)?;
        Ok(self.allowed_mime_types.contains(&mime.top_level))
    }

    /// Keeps the media files among `names`, which live in `dir`.
    ///
    /// `dir` of `.` means the names are used as paths directly. Files that
    /// could not be classified are left out and reported as warnings.
    pub fn filter<C>(
        &self,
        platform: Platform,
        dir: &str,
        names: Vec<String>,
        classifier: &C,
    ) -> FilteredListing
    where
        C: MimeClassifier + ?Sized,
    {
        let mut listing = FilteredListing::default();
        for name in names {
            let path = if dir == "." {
                name.clone()
            } else {
                join_for(platform, dir, &name)
            };
            match self.check(&name, &path, classifier) {
                Ok(true) => listing.media.push(name),
                Ok(false) => {}
                Err(e) => {
                    log::warn!("skipping {path}: {e}");
                    listing.warnings.push(format!("skipped {path}: {e}"));
                }
            }
        }
        listing
    }
}

/// The media files of a directory listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilteredListing {
    /// Media file names, in listing order.
    pub media: Vec<String>,
    /// One message per file that was skipped because it could not be
    /// classified.
    pub warnings: Vec<String>,
}
