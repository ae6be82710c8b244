//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use dirload::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { common_video: Some(vec!["mp4".into()]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref extensions) = config.common_video {
            Self::validate_extensions("common_video", extensions)?;
        }

        if let Some(ref extensions) = config.common_audio {
            Self::validate_extensions("common_audio", extensions)?;
        }

        if let Some(ref mime_types) = config.allowed_mime_types {
            Self::validate_mime_types(mime_types)?;
        }

        Ok(())
    }

    /// Extensions are compared against [`split_ext`](crate::path::split_ext)
    /// output, so they must carry the leading dot and nothing else.
    fn validate_extensions(field: &str, extensions: &[String]) -> Result<()> {
        for ext in extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("Extension '{ext}' must be a dot followed by a suffix"),
                });
            }
            if ext[1..].contains(['.', '/', '\\']) {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("Extension '{ext}' contains an invalid character"),
                });
            }
        }
        Ok(())
    }

    fn validate_mime_types(mime_types: &[String]) -> Result<()> {
        for mime in mime_types {
            if mime.trim().is_empty() {
                return Err(Error::Validation {
                    field: "allowed_mime_types".into(),
                    message: "MIME type cannot be empty".into(),
                });
            }
            if mime.contains('/') {
                return Err(Error::Validation {
                    field: "allowed_mime_types".into(),
                    message: format!(
                        "'{mime}' must be a top-level type such as 'video', not a full MIME type"
                    ),
                });
            }
        }
        Ok(())
    }
}
