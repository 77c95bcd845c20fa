/*!
 * Error types for the mdsub application.
 *
 * The conversion core degrades gracefully and never fails on malformed
 * script content; these types cover the few places where a value is
 * rejected (non-digit timecode fields, invalid configuration). The
 * controller and CLI wrap them in `anyhow` errors with context.
 */

use thiserror::Error;

/// Errors that can occur while reading subtitle script content
#[derive(Error, Debug, PartialEq)]
pub enum SubtitleError {
    /// A timecode field could not be represented
    #[error("Invalid timecode component '{component}' in '{value}'")]
    InvalidTimecode {
        /// Which field failed (hours, minutes, ...)
        component: &'static str,
        /// The raw text that was captured
        value: String,
    },
}

/// Errors raised by configuration validation
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Style definition is unusable
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// Output extension is empty or malformed
    #[error("Invalid output extension: '{0}'")]
    InvalidExtension(String),
}
