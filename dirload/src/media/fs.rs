//! Filesystem-backed capabilities.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::capabilities::{DirectoryLister, FileKind, FileProber};

/// Lists directories with [`std::fs::read_dir`].
///
/// Symbolic links are followed, so a link to a regular file is listed and a
/// link to a directory is not. Names that are not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list_files(&self, dir: &str) -> Result<Vec<String>> {
        let unreadable = |source| Error::DirectoryUnreadable {
            path: Path::new(dir).to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let is_file = fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file());
            if !is_file {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => files.push(name),
                Err(raw) => log::debug!("skipping non UTF-8 file name {}", raw.to_string_lossy()),
            }
        }
        Ok(files)
    }
}

/// Probes paths with [`std::fs::metadata`], following symbolic links.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileProber;

impl FileProber for FsFileProber {
    fn probe(&self, path: &str) -> Option<FileKind> {
        let meta = fs::metadata(path).ok()?;
        Some(if meta.is_dir() {
            FileKind::Directory
        } else {
            FileKind::File
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn test_list_files_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ep1.mkv"), b"").unwrap();
        fs::write(temp.path().join(".hidden"), b"").unwrap();
        fs::create_dir(temp.path().join("extras")).unwrap();

        let mut files = FsDirectoryLister.list_files(path_str(temp.path())).unwrap();
        files.sort();
        assert_eq!(files, [".hidden", "ep1.mkv"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let result = FsDirectoryLister.list_files(path_str(&missing));
        assert!(matches!(result, Err(Error::DirectoryUnreadable { .. })));
    }

    #[test]
    fn test_probe() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.mp3");
        fs::write(&file, b"").unwrap();

        assert_eq!(FsFileProber.probe(path_str(&file)), Some(FileKind::File));
        assert_eq!(
            FsFileProber.probe(path_str(temp.path())),
            Some(FileKind::Directory)
        );
        assert_eq!(
            FsFileProber.probe(path_str(&temp.path().join("nope"))),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_followed() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.mkv");
        fs::write(&target, b"").unwrap();
        std::os::unix::fs::symlink(&target, temp.path().join("link.mkv")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("dangling.mkv"))
            .unwrap();

        let mut files = FsDirectoryLister.list_files(path_str(temp.path())).unwrap();
        files.sort();
        assert_eq!(files, ["link.mkv", "target.mkv"]);
    }
}
