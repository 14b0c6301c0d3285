//! moviedb-display - presentation helpers for the movie database frontend
//!
//! Pure, stateless functions that turn API values into display strings:
//! Tailwind class merging, TMDB image URLs, release dates, runtimes and
//! MBTI badge colors. Missing or invalid input falls back to a fixed
//! sentinel instead of failing.

pub mod class_names;
pub mod config;
pub mod error;
pub mod formatting;
pub mod image;
pub mod mbti;

#[cfg(test)]
mod tests;

pub use class_names::{join_classes, merge_classes, ClassInput};
pub use config::{DisplayConfig, ImageConfig};
pub use error::{DisplayError, Result};
pub use formatting::{
    format_display_date, format_runtime_minutes, DateInput, NO_RUNTIME, UNKNOWN_DATE,
};
pub use image::{
    build_image_url, ImageHost, ImageSize, FALLBACK_POSTER_PATH, TMDB_IMAGE_BASE_URL,
};
pub use mbti::{resolve_mbti_color, MbtiType, DEFAULT_MBTI_COLOR};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
