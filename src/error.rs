//! Configuration error types.
//!
//! Generation itself cannot fail once a [`CaveConfig`](crate::config::CaveConfig)
//! has been validated, so every error the crate reports is raised while
//! building or loading a configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("random fill percentage must be within 0..=100, got {0}")]
    FillPercentageOutOfRange(u32),

    #[error("smooth amount must be at least {min}, got {value}")]
    SmoothAmountTooLow { value: u32, min: u32 },

    #[error("border size must be at least 1, got {0}")]
    BorderTooThin(usize),

    #[error("wall thickness threshold must be at least 1, got {0}")]
    WallThresholdTooLow(usize),

    #[error("room threshold must be at least 1, got {0}")]
    RoomThresholdTooLow(usize),

    #[error("corridor radius must be at least 1, got {0}")]
    CorridorRadiusTooLow(i32),

    #[error("corridor radius must not exceed the larger grid dimension {max}, got {value}")]
    CorridorRadiusTooLarge { value: i32, max: usize },

    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}: {source}")]
    Parse {
        /// File path, or `<inline>` for configs parsed from a string
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// True for errors raised by a value check rather than file handling.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ConfigError::Io { .. } | ConfigError::Parse { .. })
    }
}
