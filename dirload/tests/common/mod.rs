//! Common test utilities for integration tests.

use dirload::config::environment::ALL_VARS;
use dirload::media::{DirectoryLister, FileKind, FileProber, MimeClassifier, MimeType};
use dirload::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Create a temporary directory holding empty files with the given names.
#[allow(dead_code)]
pub fn media_dir(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

/// The directory as a UTF-8 string.
#[allow(dead_code)]
pub fn dir_str(dir: &TempDir) -> String {
    dir.path().to_str().unwrap().to_string()
}

/// Path of `name` inside `dir` as a UTF-8 string.
#[allow(dead_code)]
pub fn file_in(dir: &Path, name: &str) -> String {
    dir.join(name).to_str().unwrap().to_string()
}

/// In-memory directory tree for tests that do not touch the disk.
///
/// Paths are used verbatim, without any normalization.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeTree {
    dirs: BTreeMap<String, Vec<String>>,
    files: BTreeSet<String>,
    listings: AtomicUsize,
}

#[allow(dead_code)]
impl FakeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory listing. Each name is also registered as a file at
    /// `{dir}{sep}{name}` so that probing the playing file succeeds.
    pub fn with_dir(mut self, dir: &str, sep: char, names: &[&str]) -> Self {
        for name in names {
            self.files.insert(format!("{dir}{sep}{name}"));
        }
        self.dirs.insert(
            dir.to_string(),
            names.iter().map(ToString::to_string).collect(),
        );
        self
    }

    /// Register an extra path as an existing file.
    pub fn with_file(mut self, path: &str) -> Self {
        self.files.insert(path.to_string());
        self
    }

    /// How many times a directory was listed.
    pub fn listings(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }
}

impl DirectoryLister for FakeTree {
    fn list_files(&self, dir: &str) -> Result<Vec<String>> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| dirload::Error::DirectoryUnreadable {
                path: dir.into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            })
    }
}

impl FileProber for FakeTree {
    fn probe(&self, path: &str) -> Option<FileKind> {
        if self.dirs.contains_key(path) {
            Some(FileKind::Directory)
        } else if self.files.contains(path) {
            Some(FileKind::File)
        } else {
            None
        }
    }
}

/// Classifier answering from a fixed extension table.
///
/// Unknown extensions classify as `application/octet-stream`; extensions
/// marked unreadable fail the way an unreadable file would.
#[allow(dead_code)]
pub struct ExtensionClassifier {
    types: BTreeMap<&'static str, (&'static str, &'static str)>,
    unreadable: BTreeSet<&'static str>,
}

#[allow(dead_code)]
impl ExtensionClassifier {
    pub fn new(types: &[(&'static str, &'static str, &'static str)]) -> Self {
        Self {
            types: types
                .iter()
                .map(|&(ext, top, sub)| (ext, (top, sub)))
                .collect(),
            unreadable: BTreeSet::new(),
        }
    }

    pub fn with_unreadable(mut self, ext: &'static str) -> Self {
        self.unreadable.insert(ext);
        self
    }
}

impl MimeClassifier for ExtensionClassifier {
    fn classify(&self, path: &str, ext: &str) -> Result<MimeType> {
        if self.unreadable.contains(ext) {
            return Err(Error::MimeType {
                command: vec!["file".into(), path.to_string()],
                output: "cannot open".into(),
            });
        }
        let (top, sub) = self
            .types
            .get(ext)
            .copied()
            .unwrap_or(("application", "octet-stream"));
        Ok(MimeType::new(top, sub))
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Create a guard that removes the env var.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear all DIRLOAD_* configuration variables for the life of the guards.
#[allow(dead_code)]
pub fn clear_dirload_env_vars() -> Vec<EnvGuard> {
    ALL_VARS.iter().map(|k| EnvGuard::remove(k)).collect()
}
