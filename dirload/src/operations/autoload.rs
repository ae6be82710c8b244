//! Autoload planning.
//!
//! Given the path of the file that just started playing, this module works
//! out which sibling media files should join the playlist and which
//! playlist commands put them in natural order around the playing entry.

use std::fmt;

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::media::{
    DirectoryLister, FileKind, FileProber, FilteredListing, MediaFilter, MimeClassifier,
};
use crate::natsort::natural_sort;
use crate::path::{is_remote, join_for, normalize_path_for, split_for, Platform};

use super::plan::{OperationPlan, PlanAction};

/// Options for an autoload operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoloadOptions {
    /// Path of the playing file as reported by the player, if any.
    pub path: Option<String>,

    /// Number of entries currently in the playlist.
    pub playlist_count: usize,

    /// The player's working directory, used to decide whether listed names
    /// need their directory prepended.
    pub cwd: Option<String>,

    /// Path conventions of the player.
    pub platform: Platform,
}

impl AutoloadOptions {
    /// Creates options for `path` with a single-entry playlist, no working
    /// directory, and the host's path conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirload::operations::AutoloadOptions;
    ///
    /// let options = AutoloadOptions::new(Some("/media/ep1.mkv".into()));
    /// assert_eq!(options.playlist_count, 1);
    /// assert!(options.cwd.is_none());
    /// ```
    #[must_use]
    pub fn new(path: Option<String>) -> Self {
        Self {
            path,
            playlist_count: 1,
            cwd: None,
            platform: Platform::current(),
        }
    }

    /// Sets the current playlist length.
    #[must_use]
    pub const fn with_playlist_count(mut self, count: usize) -> Self {
        self.playlist_count = count;
        self
    }

    /// Sets the player's working directory.
    #[must_use]
    pub fn with_cwd(mut self, cwd: Option<String>) -> Self {
        self.cwd = cwd;
        self
    }

    /// Sets the path conventions.
    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

/// The collaborators autoload planning reads from.
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    /// Lists the playing file's directory.
    pub lister: &'a dyn DirectoryLister,
    /// Checks the playing path.
    pub prober: &'a dyn FileProber,
    /// Classifies files with unknown extensions.
    pub classifier: &'a dyn MimeClassifier,
}

/// Why an autoload was not attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The player reported no path.
    NoPath,
    /// The path is a URL.
    Remote,
    /// Nothing exists at the path.
    NotFound,
    /// The path is a directory, which the player expands itself.
    Directory,
    /// The playlist was built by hand.
    ManualPlaylist {
        /// Entries already in the playlist.
        count: usize,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath => write!(f, "no file is playing"),
            Self::Remote => write!(f, "remote media"),
            Self::NotFound => write!(f, "path does not exist"),
            Self::Directory => write!(f, "path is a directory"),
            Self::ManualPlaylist { count } => {
                write!(f, "playlist already has {count} entries")
            }
        }
    }
}

/// A successful autoload plan together with the listing it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAutoload {
    /// Playlist commands to run.
    pub plan: OperationPlan,
    /// Every media entry of the directory in natural order.
    pub entries: Vec<String>,
    /// Index of the playing file in `entries`.
    pub current: usize,
}

/// Outcome of autoload planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AutoloadOutcome {
    /// Nothing was attempted.
    Skipped {
        /// Why.
        reason: SkipReason,
    },
    /// The directory holds no media files.
    NoMedia {
        /// The directory that was listed.
        dir: String,
    },
    /// A plan was built.
    Planned(PlannedAutoload),
}

/// Plans an autoload for one playing file.
///
/// # Examples
///
/// ```no_run
/// use dirload::config::ConfigBuilder;
/// use dirload::media::{CommandMimeClassifier, FsDirectoryLister, FsFileProber};
/// use dirload::operations::{AutoloadOptions, AutoloadOutcome, AutoloadPlan, Capabilities};
///
/// let config = ConfigBuilder::new().build().unwrap();
/// let capabilities = Capabilities {
///     lister: &FsDirectoryLister,
///     prober: &FsFileProber,
///     classifier: &CommandMimeClassifier::new(),
/// };
///
/// let options = AutoloadOptions::new(Some("/media/show/ep2.mkv".into()));
/// if let AutoloadOutcome::Planned(planned) =
///     AutoloadPlan::new(options, &config).build(&capabilities).unwrap()
/// {
///     for action in &planned.plan.actions {
///         println!("{}", action.description());
///     }
/// }
/// ```
pub struct AutoloadPlan<'a> {
    options: AutoloadOptions,
    config: &'a Config,
}

impl<'a> AutoloadPlan<'a> {
    /// Creates a planner for `options` under `config`.
    #[must_use]
    pub const fn new(options: AutoloadOptions, config: &'a Config) -> Self {
        Self { options, config }
    }

    /// Builds the plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed, or if the playing
    /// file is not among the media files found there.
    pub fn build(&self, capabilities: &Capabilities<'_>) -> Result<AutoloadOutcome> {
        let path = match self.check_path(capabilities) {
            Ok(path) => path,
            Err(reason) => {
                log::info!("skipping autoload: {reason}");
                return Ok(AutoloadOutcome::Skipped { reason });
            }
        };

        let platform = self.options.platform;
        let (dir, file) = split_for(platform, path);
        let join = self.needs_join(dir);
        log::debug!("dir: {dir}, file: {file}, join: {join}");

        let names = capabilities.lister.list_files(dir)?;
        let filter = MediaFilter::from_config(self.config);
        let FilteredListing { media, warnings } =
            filter.filter(platform, dir, names, capabilities.classifier);

        let mut entries: Vec<String> = if join {
            media.iter().map(|name| join_for(platform, dir, name)).collect()
        } else {
            media
        };
        natural_sort(&mut entries, self.config.case_sensitive_or_default());

        if entries.is_empty() {
            log::info!("no media files found in {dir}");
            return Ok(AutoloadOutcome::NoMedia {
                dir: dir.to_string(),
            });
        }

        let playing = if join { path } else { file };
        let current = Self::find_current(platform, &entries, playing)?;
        log::debug!("current file position in files: {current}");

        let mut plan = Self::plan_actions(dir, &entries, current);
        for warning in warnings {
            plan = plan.add_warning(warning);
        }
        Ok(AutoloadOutcome::Planned(PlannedAutoload {
            plan,
            entries,
            current,
        }))
    }

    /// The playing path, if autoloading applies to it.
    fn check_path(&self, capabilities: &Capabilities<'_>) -> std::result::Result<&str, SkipReason> {
        let path = match self.options.path.as_deref() {
            None | Some("") => return Err(SkipReason::NoPath),
            Some(path) => path,
        };
        if is_remote(path) {
            return Err(SkipReason::Remote);
        }
        match capabilities.prober.probe(path) {
            None => return Err(SkipReason::NotFound),
            Some(FileKind::Directory) => return Err(SkipReason::Directory),
            Some(FileKind::File) => {}
        }
        if self.options.playlist_count > 1 {
            return Err(SkipReason::ManualPlaylist {
                count: self.options.playlist_count,
            });
        }
        Ok(path)
    }

    /// Listed names need `dir` prepended unless the player would resolve
    /// them against the same directory.
    fn needs_join(&self, dir: &str) -> bool {
        if dir == "." {
            return false;
        }
        let platform = self.options.platform;
        self.options.cwd.as_deref().map_or(true, |cwd| {
            normalize_path_for(platform, cwd, None) != normalize_path_for(platform, dir, None)
        })
    }

    fn find_current(platform: Platform, entries: &[String], playing: &str) -> Result<usize> {
        let wanted = normalize_path_for(platform, playing, None);
        entries
            .iter()
            .position(|entry| normalize_path_for(platform, entry, None) == wanted)
            .ok_or_else(|| Error::CurrentEntryNotFound {
                file: playing.to_string(),
            })
    }

    fn plan_actions(dir: &str, entries: &[String], current: usize) -> OperationPlan {
        let mut plan = OperationPlan::new(format!(
            "Autoload {} media files from {dir}",
            entries.len() - 1
        ));
        for (index, entry) in entries.iter().enumerate() {
            if index != current {
                plan = plan.add_action(PlanAction::append(entry.as_str()));
            }
        }
        plan.add_action(PlanAction::Move {
            from: 0,
            to: current + 1,
        })
    }
}
