//! TMDB image URL construction.
//!
//! TMDB serves every poster, backdrop and profile image under
//! `{base_url}/{size}{path}`, where `path` is the `poster_path` /
//! `backdrop_path` value returned by the API (it already starts with `/`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DisplayError;

/// Base URL of the TMDB image CDN.
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Local asset shown when a movie has no image.
pub const FALLBACK_POSTER_PATH: &str = "/images/no-poster.png";

/// Resolution variant requested from the image CDN.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "w92")]
    W92,
    #[serde(rename = "w154")]
    W154,
    #[serde(rename = "w185")]
    W185,
    #[serde(rename = "w200")]
    W200,
    #[serde(rename = "w300")]
    W300,
    #[serde(rename = "w342")]
    W342,
    #[default]
    #[serde(rename = "w500")]
    W500,
    #[serde(rename = "w780")]
    W780,
    #[serde(rename = "w1280")]
    W1280,
    #[serde(rename = "original")]
    Original,
}

impl ImageSize {
    /// Every supported size, smallest first.
    pub const ALL: [ImageSize; 10] = [
        ImageSize::W92,
        ImageSize::W154,
        ImageSize::W185,
        ImageSize::W200,
        ImageSize::W300,
        ImageSize::W342,
        ImageSize::W500,
        ImageSize::W780,
        ImageSize::W1280,
        ImageSize::Original,
    ];

    /// The path segment TMDB expects for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W154 => "w154",
            ImageSize::W185 => "w185",
            ImageSize::W200 => "w200",
            ImageSize::W300 => "w300",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| DisplayError::UnknownImageSize(s.to_string()))
    }
}

/// Where images are served from and what to show when there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHost {
    base_url: String,
    fallback_path: String,
    default_size: ImageSize,
}

impl ImageHost {
    pub fn new(
        base_url: impl Into<String>,
        fallback_path: impl Into<String>,
        default_size: ImageSize,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback_path: fallback_path.into(),
            default_size,
        }
    }

    /// The public TMDB CDN with the bundled no-poster asset.
    pub fn tmdb() -> Self {
        Self::new(TMDB_IMAGE_BASE_URL, FALLBACK_POSTER_PATH, ImageSize::W500)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    pub fn default_size(&self) -> ImageSize {
        self.default_size
    }

    /// Build the URL for `path`, or the fallback path if there is none.
    pub fn url<'a>(
        &self,
        path: impl Into<Option<&'a str>>,
        size: impl Into<Option<ImageSize>>,
    ) -> String {
        let size = size.into().unwrap_or(self.default_size);
        join_image_url(&self.base_url, &self.fallback_path, path.into(), size)
    }
}

impl Default for ImageHost {
    fn default() -> Self {
        Self::tmdb()
    }
}

fn join_image_url(base_url: &str, fallback: &str, path: Option<&str>, size: ImageSize) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{base_url}/{size}{path}"),
        _ => {
            log::trace!("No image path, using fallback {fallback}");
            fallback.to_string()
        }
    }
}

/// Build a TMDB image URL for `path` at `size` (default `w500`).
///
/// Missing or empty paths yield [`FALLBACK_POSTER_PATH`]. The path is used
/// verbatim; TMDB paths already carry their leading slash.
pub fn build_image_url<'a>(
    path: impl Into<Option<&'a str>>,
    size: impl Into<Option<ImageSize>>,
) -> String {
    let size = size.into().unwrap_or_default();
    join_image_url(TMDB_IMAGE_BASE_URL, FALLBACK_POSTER_PATH, path.into(), size)
}
