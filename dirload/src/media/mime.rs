//! MIME types and the command-line classifier.

use std::fmt;
use std::process::Command;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::Platform;

use super::capabilities::MimeClassifier;

/// Extensions that `xdg-mime` is known to misreport; `file` decides these.
pub const FILE_PREFERRED_EXTENSIONS: &[&str] = &[".ts", ".bak", ".txt", ".TXT"];

/// A `type/subtype` pair such as `video/x-matroska`.
///
/// # Examples
///
/// ```
/// use dirload::media::MimeType;
///
/// let mime = MimeType::parse("video/x-matroska\n").unwrap();
/// assert_eq!(mime.top_level, "video");
/// assert_eq!(mime.subtype, "x-matroska");
/// assert!(MimeType::parse("cannot open file").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MimeType {
    /// The part before the slash (`video`, `audio`, `text`, ...).
    pub top_level: String,
    /// The part after the slash.
    pub subtype: String,
}

impl MimeType {
    /// Creates a MIME type from its two halves.
    #[must_use]
    pub fn new(top_level: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            top_level: top_level.into(),
            subtype: subtype.into(),
        }
    }

    /// Parse classifier output. Trailing whitespace is ignored. Text without
    /// a `/` is rejected; only the first two `/`-separated parts are kept.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim_end().split('/');
        match (parts.next(), parts.next()) {
            (Some(top_level), Some(subtype)) => Some(Self::new(top_level, subtype)),
            _ => None,
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.top_level, self.subtype)
    }
}

/// Classifies files by running `file` or `xdg-mime`.
///
/// # Examples
///
/// ```
/// use dirload::media::CommandMimeClassifier;
/// use dirload::path::Platform;
///
/// let classifier = CommandMimeClassifier::for_platform(Platform::Unix);
/// let commands = classifier.command_lines("clip.ts", ".ts");
/// assert_eq!(commands, [["file", "-Lb", "--mime-type", "--", "clip.ts"]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandMimeClassifier {
    platform: Platform,
}

impl CommandMimeClassifier {
    /// A classifier for the host platform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A classifier using the command lines of `platform`.
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Self {
        Self { platform }
    }

    /// The command lines tried in order for `path`.
    ///
    /// Later commands are fallbacks, used only when an earlier one fails or
    /// prints something that is not a MIME type.
    #[must_use]
    pub fn command_lines(&self, path: &str, ext: &str) -> Vec<Vec<String>> {
        if self.platform == Platform::Windows {
            return vec![to_args(&["file", "-b", "--mime-type", "--", path])];
        }

        let file = to_args(&["file", "-Lb", "--mime-type", "--", path]);
        if FILE_PREFERRED_EXTENSIONS.contains(&ext) {
            return vec![file];
        }

        // xdg-mime has no `--`, so keep names that look like options as paths.
        let xdg_path = if path.starts_with('-') {
            format!("./{path}")
        } else {
            path.to_string()
        };
        vec![to_args(&["xdg-mime", "query", "filetype", &xdg_path]), file]
    }

    fn run(args: &[String]) -> Result<String> {
        let Some((program, rest)) = args.split_first() else {
            return Err(Error::Process {
                command: Vec::new(),
                status: -1,
                stderr: "empty command line".into(),
            });
        };

        let output = Command::new(program).args(rest).output()?;
        if !output.status.success() {
            return Err(Error::Process {
                command: args.to_vec(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

impl MimeClassifier for CommandMimeClassifier {
    fn classify(&self, path: &str, ext: &str) -> Result<MimeType> {
        let mut last_error = None;
        for args in self.command_lines(path, ext) {
            let attempt = Self::run(&args).and_then(|output| {
                MimeType::parse(&output).ok_or(Error::MimeType {
                    command: args.clone(),
                    output,
                })
            });
            match attempt {
                Ok(mime) => {
                    log::debug!("{path}: {mime}");
                    return Ok(mime);
                }
                Err(e) => {
                    log::debug!("{e}");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| Error::MimeType {
            command: Vec::new(),
            output: String::new(),
        }))
    }
}

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}
