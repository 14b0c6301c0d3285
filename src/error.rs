//! Error types for the display helpers.
//!
//! The display functions themselves never fail: they fall back to sentinel
//! strings. Errors only surface from the typed parsing entry points
//! (`FromStr` on [`ImageSize`](crate::image::ImageSize) and
//! [`MbtiType`](crate::mbti::MbtiType)) and from explicit config parsing.

use thiserror::Error;

/// Result type alias for fallible display operations.
pub type Result<T> = std::result::Result<T, DisplayError>;

/// Errors that can occur when parsing display inputs or configuration.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The tag is not one of the supported TMDB image sizes.
    #[error("Unknown image size: {0:?}")]
    UnknownImageSize(String),

    /// The code is not one of the 16 MBTI types.
    #[error("Unknown MBTI type: {0:?}")]
    UnknownMbtiType(String),

    /// Config file contents could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
