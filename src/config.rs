//! Generator configuration.
//!
//! A [`CaveConfig`] is validated once, up front. Nothing downstream clamps
//! or re-checks values, so every generator holds a config that already
//! passed [`CaveConfig::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Where the seeded fill takes its seed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedMode {
    /// Same string, same cave.
    Fixed(String),
    /// Seed derived from the wall clock on every run. Not reproducible.
    Random,
}

impl Default for SeedMode {
    fn default() -> Self {
        SeedMode::Fixed(CAVE_DEFAULT_SEED.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CaveConfigFile", into = "CaveConfigFile")]
pub struct CaveConfig {
    pub width: usize,
    pub height: usize,
    pub seed: SeedMode,
    /// Percent chance (0-100) that an interior cell starts as wall
    pub random_fill_percentage: u32,
    pub smooth_amount: u32,
    pub border_size: usize,
    /// Wall regions with fewer tiles are opened up into floor
    pub wall_threshold: usize,
    /// Floor regions with fewer tiles are filled in as wall
    pub room_threshold: usize,
    pub corridor_radius: i32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: CAVE_DEFAULT_WIDTH,
            height: CAVE_DEFAULT_HEIGHT,
            seed: SeedMode::default(),
            random_fill_percentage: CAVE_DEFAULT_FILL_PERCENTAGE,
            smooth_amount: CAVE_DEFAULT_SMOOTH_AMOUNT,
            border_size: CAVE_DEFAULT_BORDER_SIZE,
            wall_threshold: CAVE_DEFAULT_WALL_THRESHOLD,
            room_threshold: CAVE_DEFAULT_ROOM_THRESHOLD,
            corridor_radius: CAVE_DEFAULT_CORRIDOR_RADIUS,
        }
    }
}

impl CaveConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = SeedMode::Fixed(seed.into());
        self
    }

    pub fn with_random_seed(mut self) -> Self {
        self.seed = SeedMode::Random;
        self
    }

    /// Check every field, reporting the first rule that is violated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.random_fill_percentage > 100 {
            return Err(ConfigError::FillPercentageOutOfRange(self.random_fill_percentage));
        }
        if self.smooth_amount < CAVE_MIN_SMOOTH_AMOUNT {
            return Err(ConfigError::SmoothAmountTooLow {
                value: self.smooth_amount,
                min: CAVE_MIN_SMOOTH_AMOUNT,
            });
        }
        if self.border_size < 1 {
            return Err(ConfigError::BorderTooThin(self.border_size));
        }
        if self.wall_threshold < 1 {
            return Err(ConfigError::WallThresholdTooLow(self.wall_threshold));
        }
        if self.room_threshold < 1 {
            return Err(ConfigError::RoomThresholdTooLow(self.room_threshold));
        }
        if self.corridor_radius < 1 {
            return Err(ConfigError::CorridorRadiusTooLow(self.corridor_radius));
        }
        let max_radius = self.width.max(self.height);
        if usize::try_from(self.corridor_radius).map_or(false, |radius| radius > max_radius) {
            return Err(ConfigError::CorridorRadiusTooLarge {
                value: self.corridor_radius,
                max: max_radius,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CaveConfig = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            origin: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: CaveConfig = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// On-disk form: the seed is a flat string plus a random-seed switch.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct CaveConfigFile {
    width: usize,
    height: usize,
    seed: String,
    use_random_seed: bool,
    random_fill_percentage: u32,
    smooth_amount: u32,
    border_size: usize,
    wall_threshold: usize,
    room_threshold: usize,
    corridor_radius: i32,
}

impl Default for CaveConfigFile {
    fn default() -> Self {
        CaveConfig::default().into()
    }
}

impl From<CaveConfigFile> for CaveConfig {
    fn from(file: CaveConfigFile) -> Self {
        let seed = if file.use_random_seed {
            SeedMode::Random
        } else {
            SeedMode::Fixed(file.seed)
        };
        Self {
            width: file.width,
            height: file.height,
            seed,
            random_fill_percentage: file.random_fill_percentage,
            smooth_amount: file.smooth_amount,
            border_size: file.border_size,
            wall_threshold: file.wall_threshold,
            room_threshold: file.room_threshold,
            corridor_radius: file.corridor_radius,
        }
    }
}

impl From<CaveConfig> for CaveConfigFile {
    fn from(config: CaveConfig) -> Self {
        let (seed, use_random_seed) = match config.seed {
            SeedMode::Fixed(seed) => (seed, false),
            SeedMode::Random => (CAVE_DEFAULT_SEED.to_string(), true),
        };
        Self {
            width: config.width,
            height: config.height,
            seed,
            use_random_seed,
            random_fill_percentage: config.random_fill_percentage,
            smooth_amount: config.smooth_amount,
            border_size: config.border_size,
            wall_threshold: config.wall_threshold,
            room_threshold: config.room_threshold,
            corridor_radius: config.corridor_radius,
        }
    }
}
