//! Platform path conventions.

use std::fmt;

use serde::Serialize;

/// Path conventions that change how a path string is interpreted.
///
/// Normalization is a pure string transformation, so the platform is an
/// explicit input rather than something read from the host. Use
/// [`Platform::current`] for the host's own conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// `/` is the only separator.
    Unix,
    /// `\` and `/` are separators; drive letters and UNC prefixes exist.
    Windows,
}

impl Platform {
    /// The conventions of the platform this crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Whether `c` separates path components on this platform.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Unix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// The separator used when this platform joins paths.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// Parses a platform name.
    ///
    /// Recognizes: "unix", "linux", "macos", "windows" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirload::path::Platform;
    ///
    /// assert_eq!(Platform::parse("Windows").unwrap(), Platform::Windows);
    /// assert_eq!(Platform::parse("linux").unwrap(), Platform::Unix);
    /// assert!(Platform::parse("beos").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "unix" | "linux" | "macos" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid platform: {s}")),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
