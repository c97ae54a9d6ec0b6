//! Grid configuration and JSON loading.

use crate::scale::{LinearScale, ScaleError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error loading configuration or roster data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error involving filesystem
    #[error("could not read {}", path.display())]
    Io {
        /// The file being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected type
    #[error("could not parse {}", path.display())]
    Json {
        /// The file being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The configured window or density cannot form a scale
    #[error("invalid grid configuration")]
    Scale(#[from] ScaleError),
}

/// Read a JSON file into `T`.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

const fn default_pixels_per_minute() -> f64 {
    1.0
}

/// Render configuration of the time axis.
///
/// ```
/// let config: grid::GridConfig = serde_json::from_str(r#"{
///     "windowStart": "2025-04-05T08:00:00",
///     "windowEnd": "2025-04-05T18:00:00"
/// }"#)?;
/// assert_eq!(config.pixels_per_minute, 1.0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Left edge of the visible window.
    pub window_start: NaiveDateTime,

    /// Right edge of the visible window.
    pub window_end: NaiveDateTime,

    /// Horizontal density. Defaults to one pixel per minute.
    #[serde(default = "default_pixels_per_minute")]
    pub pixels_per_minute: f64,
}

impl GridConfig {
    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_json(path)
    }

    /// Build the scale for one render pass.
    pub fn scale(&self) -> Result<LinearScale<NaiveDateTime>, ConfigError> {
        LinearScale::new(self.window_start, self.window_end, self.pixels_per_minute)
            .map_err(ConfigError::from)
    }
}
