//! Startup configuration, read from `DECAY_LIFE_*` environment variables.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::{Algorithm, Dimensions, GridError};

/// The viewer uploads the grid as one texture, whose sides are 16-bit
pub const MAX_VIEW_DIMENSION: usize = u16::MAX as usize;

pub const ENV_WIDTH: &str = "DECAY_LIFE_WIDTH";
pub const ENV_HEIGHT: &str = "DECAY_LIFE_HEIGHT";
pub const ENV_SEED: &str = "DECAY_LIFE_SEED";
pub const ENV_RESET_SEED: &str = "DECAY_LIFE_RESET_SEED";
pub const ENV_UPS: &str = "DECAY_LIFE_UPS";
pub const ENV_ALGORITHM: &str = "DECAY_LIFE_ALGORITHM";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("unknown algorithm {0:?}, expected shifted, direct or direct-par")]
    UnknownAlgorithm(String),

    #[error("{width}x{height} grid exceeds the viewer limit of {max} cells per side", max = MAX_VIEW_DIMENSION)]
    TooLargeForDisplay { width: usize, height: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Startup seed; a random one is picked and logged when unset
    pub seed: Option<u64>,
    /// Seed used by the reset control
    pub reset_seed: u64,
    pub updates_per_second: f32,
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 320,
            height: 200,
            seed: None,
            reset_seed: 5,
            updates_per_second: 30.0,
            algorithm: Algorithm::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let algorithm = match lookup(ENV_ALGORITHM) {
            Some(name) => Algorithm::from_name(&name).ok_or(ConfigError::UnknownAlgorithm(name))?,
            None => defaults.algorithm,
        };

        let updates_per_second =
            parse(&lookup, ENV_UPS)?.unwrap_or(defaults.updates_per_second);
        if !(1.0..=60.0).contains(&updates_per_second) {
            return Err(ConfigError::InvalidValue {
                var: ENV_UPS,
                value: updates_per_second.to_string(),
            });
        }

        let config = Self {
            width: parse(&lookup, ENV_WIDTH)?.unwrap_or(defaults.width),
            height: parse(&lookup, ENV_HEIGHT)?.unwrap_or(defaults.height),
            seed: parse(&lookup, ENV_SEED)?,
            reset_seed: parse(&lookup, ENV_RESET_SEED)?.unwrap_or(defaults.reset_seed),
            updates_per_second,
            algorithm,
        };
        config.dimensions()?;
        Ok(config)
    }

    /// Validated grid dimensions
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        let dims = Dimensions::new(self.width, self.height)?;
        if self.width > MAX_VIEW_DIMENSION || self.height > MAX_VIEW_DIMENSION {
            return Err(ConfigError::TooLargeForDisplay {
                width: self.width,
                height: self.height,
            });
        }
        Ok(dims)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(var)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var, value })
        })
        .transpose()
}
