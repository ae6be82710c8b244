//! Splitting and joining path strings.

use super::Platform;

/// Split a path into its directory and file name on the host platform.
///
/// See [`split_for`].
#[must_use]
pub fn split(path: &str) -> (&str, &str) {
    split_for(Platform::current(), path)
}

/// Split a path into its directory and file name.
///
/// The directory loses its trailing separator unless it is a root (`/`,
/// `C:\`). A bare file name is reported as living in `.`.
///
/// # Examples
///
/// ```
/// use dirload::path::{split_for, Platform};
///
/// assert_eq!(split_for(Platform::Unix, "/media/show/ep1.mkv"), ("/media/show", "ep1.mkv"));
/// assert_eq!(split_for(Platform::Unix, "/ep1.mkv"), ("/", "ep1.mkv"));
/// assert_eq!(split_for(Platform::Unix, "ep1.mkv"), (".", "ep1.mkv"));
/// assert_eq!(split_for(Platform::Windows, r"C:\ep1.mkv"), (r"C:\", "ep1.mkv"));
/// ```
#[must_use]
pub fn split_for(platform: Platform, path: &str) -> (&str, &str) {
    let Some(index) = path.rfind(|c| platform.is_separator(c)) else {
        return (".", path);
    };
    let file = &path[index + 1..];

    let dir = path[..=index].trim_end_matches(|c| platform.is_separator(c));
    let dir = if dir.is_empty() || (platform == Platform::Windows && dir.ends_with(':')) {
        // Keep one separator so that roots stay roots.
        &path[..dir.len() + 1]
    } else {
        dir
    };
    (dir, file)
}

/// Split a path into everything before the extension and the extension.
///
/// The extension starts at the last `.` of the file name and includes it.
/// Names without a dot, and hidden names whose only dot is the leading one,
/// have no extension.
///
/// # Examples
///
/// ```
/// use dirload::path::split_ext;
///
/// assert_eq!(split_ext("/media/ep1.mkv"), ("/media/ep1", ".mkv"));
/// assert_eq!(split_ext("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_ext(".hidden"), (".hidden", ""));
/// assert_eq!(split_ext("/media.d/README"), ("/media.d/README", ""));
/// ```
#[must_use]
pub fn split_ext(path: &str) -> (&str, &str) {
    let file_start = path
        .rfind(|c| Platform::Windows.is_separator(c))
        .map_or(0, |index| index + 1);
    match path[file_start..].rfind('.') {
        None | Some(0) => (path, ""),
        Some(dot) => path.split_at(file_start + dot),
    }
}

/// Join a directory and a file name on the host platform.
///
/// See [`join_for`].
#[must_use]
pub fn join(dir: &str, file: &str) -> String {
    join_for(Platform::current(), dir, file)
}

/// Join a directory and a file name.
///
/// An absolute `file` is returned as is. The platform separator is used
/// between the two parts, and on Windows every `/` in the result is turned
/// into `\` so that joined paths compare equal to paths reported by the
/// player.
///
/// # Examples
///
/// ```
/// use dirload::path::{join_for, Platform};
///
/// assert_eq!(join_for(Platform::Unix, "/media", "ep1.mkv"), "/media/ep1.mkv");
/// assert_eq!(join_for(Platform::Unix, "/", "ep1.mkv"), "/ep1.mkv");
/// assert_eq!(join_for(Platform::Unix, "/media", "/srv/ep1.mkv"), "/srv/ep1.mkv");
/// assert_eq!(join_for(Platform::Windows, "C:/media", "ep1.mkv"), r"C:\media\ep1.mkv");
/// ```
#[must_use]
pub fn join_for(platform: Platform, dir: &str, file: &str) -> String {
    let joined = if dir.is_empty() || super::is_absolute(platform, file) {
        file.to_string()
    } else if dir.ends_with(|c| platform.is_separator(c)) {
        format!("{dir}{file}")
    } else {
        format!("{dir}{}{file}", platform.separator())
    };

    match platform {
        Platform::Unix => joined,
        Platform::Windows => joined.replace('/', "\\"),
    }
}

/// Whether a path names remote media (`scheme://...`) rather than a file.
///
/// # Examples
///
/// ```
/// use dirload::path::is_remote;
///
/// assert!(is_remote("https://example.com/video.mp4"));
/// assert!(is_remote("ytdl://abc"));
/// assert!(!is_remote("/media/video.mp4"));
/// ```
#[must_use]
pub fn is_remote(path: &str) -> bool {
    path.contains("://")
}
