//! Path normalization.
//!
//! This module reduces a path string to a canonical form by:
//! - Unifying separators to `/` (Windows only, UNC prefixes excepted)
//! - Collapsing repeated separators and dropping a trailing one
//! - Resolving `.` and `..` components against a segment stack
//! - Optionally anchoring relative paths at a working directory
//!
//! Nothing here touches the filesystem. Whether the result exists, or is a
//! file or a directory, is a question for a [`FileProber`](crate::media::FileProber).

use std::borrow::Cow;

use super::Platform;

/// The literal prefix of a Windows UNC path (`\\server\share`).
const UNC_PREFIX: &str = r"\\";

/// Normalize a path using the conventions of the host platform.
///
/// See [`normalize_path_for`] for the rules.
///
/// # Examples
///
/// ```
/// use dirload::path::normalize_path;
///
/// assert_eq!(normalize_path("a/./b/../c", None), "a/c");
/// assert_eq!(normalize_path("/a//b///c/", None), "/a/b/c");
/// assert_eq!(normalize_path("../a", Some("/home/user")), "/home/a");
/// ```
#[must_use]
pub fn normalize_path(path: &str, cwd: Option<&str>) -> String {
    normalize_path_for(Platform::current(), path, cwd)
}

/// Normalize a path using the conventions of `platform`.
///
/// Relative paths are anchored at `cwd` when one is supplied; absolute paths
/// ignore it. A `..` cancels the segment before it when there is one, is
/// dropped at an absolute root, and is kept when a relative path climbs
/// above its starting point. The result always uses `/` between segments
/// and is stable under repeated normalization.
///
/// # Examples
///
/// ```
/// use dirload::path::{normalize_path_for, Platform};
///
/// assert_eq!(normalize_path_for(Platform::Unix, "../../a/./b", None), "../../a/b");
/// assert_eq!(normalize_path_for(Platform::Unix, "/../a", None), "/a");
/// assert_eq!(normalize_path_for(Platform::Windows, r"C:\Videos\..\Music\", None), "C:/Music");
/// assert_eq!(normalize_path_for(Platform::Windows, r"C:\", None), "C:/");
/// assert_eq!(
///     normalize_path_for(Platform::Windows, r"\\nas\media\show\..\film", None),
///     r"\\nas/media/film"
/// );
/// ```
#[must_use]
pub fn normalize_path_for(platform: Platform, path: &str, cwd: Option<&str>) -> String {
    let unified = unify_separators(platform, path);
    let path: &str = &unified;
    let path_root = root_len(platform, path);

    let cwd = match cwd {
        Some(cwd) if path_root == 0 => Some(unify_separators(platform, cwd)),
        _ => None,
    };

    let mut stack: Vec<&str> = Vec::new();
    let root = match &cwd {
        Some(cwd) => {
            let cwd: &str = cwd;
            let cwd_root = root_len(platform, cwd);
            reduce_segments(&mut stack, &cwd[cwd_root..], cwd_root > 0);
            &cwd[..cwd_root]
        }
        None => &path[..path_root],
    };
    reduce_segments(&mut stack, &path[path_root..], !root.is_empty());

    let mut normalized = String::with_capacity(path.len());
    normalized.push_str(root);
    normalized.push_str(&stack.join("/"));
    normalized
}

/// Translate separators to `/` on Windows.
///
/// A leading UNC `\\` is kept verbatim so that the result still reads as a
/// network path. On Unix a backslash is an ordinary file name character and
/// the input is returned untouched.
///
/// # Examples
///
/// ```
/// use dirload::path::{unify_separators, Platform};
///
/// assert_eq!(unify_separators(Platform::Windows, r"C:\a\b"), "C:/a/b");
/// assert_eq!(unify_separators(Platform::Windows, r"\\srv\share"), r"\\srv/share");
/// assert_eq!(unify_separators(Platform::Unix, r"a\b"), r"a\b");
/// ```
#[must_use]
pub fn unify_separators(platform: Platform, path: &str) -> Cow<'_, str> {
    match platform {
        Platform::Windows if path.contains('\\') => match path.strip_prefix(UNC_PREFIX) {
            Some(rest) => Cow::Owned(format!("{UNC_PREFIX}{}", rest.replace('\\', "/"))),
            None => Cow::Owned(path.replace('\\', "/")),
        },
        _ => Cow::Borrowed(path),
    }
}

/// Whether a path is absolute under the rules of `platform`.
///
/// On Windows a drive letter followed by a colon counts as absolute when the
/// colon ends the path or is followed by exactly one separator. Two
/// separators read as a scheme-like token, and any other character makes
/// the whole token an ordinary relative segment.
///
/// # Examples
///
/// ```
/// use dirload::path::{is_absolute, Platform};
///
/// assert!(is_absolute(Platform::Unix, "/srv/media"));
/// assert!(!is_absolute(Platform::Unix, "media"));
/// assert!(is_absolute(Platform::Windows, r"D:\media"));
/// assert!(is_absolute(Platform::Windows, r"\\nas\media"));
/// assert!(!is_absolute(Platform::Windows, "c://media"));
/// assert!(!is_absolute(Platform::Windows, "c:media"));
/// ```
#[must_use]
pub fn is_absolute(platform: Platform, path: &str) -> bool {
    root_len(platform, &unify_separators(platform, path)) > 0
}

/// Length of the prefix of a separator-unified path that `..` cannot pop.
fn root_len(platform: Platform, path: &str) -> usize {
    let bytes = path.as_bytes();
    match platform {
        Platform::Windows if path.starts_with(UNC_PREFIX) => UNC_PREFIX.len(),
        Platform::Windows
            if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' =>
        {
            match (bytes.get(2), bytes.get(3)) {
                (Some(b'/'), Some(b'/')) => 0,
                (Some(b'/'), _) => 3,
                (None, _) => 2,
                // `C:name` is an ordinary segment, so a normalized relative
                // path that starts with one reads the same way again.
                _ => 0,
            }
        }
        _ if path.starts_with('/') => 1,
        _ => 0,
    }
}

/// Push the `/`-separated segments of `rest` onto `stack`, resolving dots.
fn reduce_segments<'a>(stack: &mut Vec<&'a str>, rest: &'a str, rooted: bool) {
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&top) if top != ".." => {
                    stack.pop();
                }
                None if rooted => {}
                _ => stack.push(".."),
            },
            other => stack.push(other),
        }
    }
}
