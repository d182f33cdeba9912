//! Engine configuration
//!
//! Defaults are a 16x16 grid with one gravity step every half second. The
//! binary overrides them from the environment:
//!
//! - `MINI_TETRIS_WIDTH`: grid columns (default: 16, at most 1024)
//! - `MINI_TETRIS_HEIGHT`: grid rows (default: 16, at most 1024)
//! - `MINI_TETRIS_FALL_MS`: gravity interval in milliseconds (default: 500)
//! - `MINI_TETRIS_SEED`: shape RNG seed (default: caller supplied)

use std::{env, fmt};

use crate::types::{DEFAULT_FALL_INTERVAL_MS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

pub const ENV_WIDTH: &str = "MINI_TETRIS_WIDTH";
pub const ENV_HEIGHT: &str = "MINI_TETRIS_HEIGHT";
pub const ENV_FALL_MS: &str = "MINI_TETRIS_FALL_MS";
pub const ENV_SEED: &str = "MINI_TETRIS_SEED";

/// Largest accepted grid width or height; keeps the rendered frame within
/// `u16` terminal coordinates
pub const MAX_GRID_SIDE: u16 = 1024;

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Value present but not a number of the right type
    Unparsable { name: &'static str, value: String },
    /// Parsed, but zero where a positive value is required
    Zero { name: &'static str },
    /// Grid dimension above [`MAX_GRID_SIDE`]
    TooLarge { name: &'static str, value: u16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable { name, value } => {
                write!(f, "{} has invalid value {:?}", name, value)
            }
            Self::Zero { name } => write!(f, "{} must be greater than zero", name),
            Self::TooLarge { name, value } => {
                write!(f, "{} is {}, limit is {}", name, value, MAX_GRID_SIDE)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u16,
    pub height: u16,
    pub fall_interval_ms: u32,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            seed: 1,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fall_interval_ms(mut self, ms: u32) -> Self {
        self.fall_interval_ms = ms;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject zero or oversized dimensions and a zero fall interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [(ENV_WIDTH, self.width), (ENV_HEIGHT, self.height)] {
            if value == 0 {
                return Err(ConfigError::Zero { name });
            }
            if value > MAX_GRID_SIDE {
                return Err(ConfigError::TooLarge { name, value });
            }
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::Zero { name: ENV_FALL_MS });
        }
        Ok(())
    }

    /// Defaults overridden by the process environment
    pub fn from_env(seed: u32) -> Result<Self, ConfigError> {
        Self::from_lookup(seed, |name| env::var(name).ok())
    }

    /// Defaults overridden through `lookup`; unset names keep their default
    pub fn from_lookup(
        seed: u32,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default().with_seed(seed);
        let config = Self {
            width: read_value(&lookup, ENV_WIDTH, defaults.width)?,
            height: read_value(&lookup, ENV_HEIGHT, defaults.height)?,
            fall_interval_ms: read_value(&lookup, ENV_FALL_MS, defaults.fall_interval_ms)?,
            seed: read_value(&lookup, ENV_SEED, defaults.seed)?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn read_value<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Unparsable {
            name,
            value: raw,
        }),
    }
}
