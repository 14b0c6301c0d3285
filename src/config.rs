use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DisplayError, Result};
use crate::image::{ImageHost, ImageSize, FALLBACK_POSTER_PATH, TMDB_IMAGE_BASE_URL};

/// Top-level display configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub image: ImageConfig,
}

/// Image host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Image CDN base URL (TMDB or a mirror).
    pub base_url: String,
    /// Asset served when an item has no image.
    pub fallback_path: String,
    /// Size used when a caller does not ask for one.
    pub default_size: ImageSize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: TMDB_IMAGE_BASE_URL.to_string(),
            fallback_path: FALLBACK_POSTER_PATH.to_string(),
            default_size: ImageSize::default(),
        }
    }
}

impl DisplayConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse configuration from a TOML file.
    pub fn try_load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from a TOML file.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load_from(path) {
            Ok(config) => {
                log::info!("Loaded display config from {}", path.display());
                config
            }
            Err(DisplayError::Io(e)) => {
                log::debug!(
                    "No display config at {} ({e}), using defaults",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse display config at {}: {e}, using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Image host described by this configuration.
    pub fn image_host(&self) -> ImageHost {
        ImageHost::new(
            self.image.base_url.as_str(),
            self.image.fallback_path.as_str(),
            self.image.default_size,
        )
    }
}
