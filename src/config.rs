//! Construction-time configuration for the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::PatternId;
use crate::error::{LifeError, LifeResult};

/// Default grid side length
pub const DEFAULT_GRID_SIZE: usize = 30;
/// Largest accepted grid side length
pub const MAX_GRID_SIZE: usize = 4096;
/// Default tick interval
pub const DEFAULT_SPEED_MS: u32 = 500;
/// Fastest allowed tick interval
pub const MIN_SPEED_MS: u32 = 100;
/// Slowest allowed tick interval
pub const MAX_SPEED_MS: u32 = 1000;

/// Static configuration, fixed once the controller is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Side length N of the square grid.
    pub grid_size: usize,
    /// Pattern seeded at startup.
    pub initial_pattern: PatternId,
    /// Tick interval at startup, clamped into the speed range.
    pub initial_speed_ms: u32,
    /// Lower bound of the speed range.
    pub min_speed_ms: u32,
    /// Upper bound of the speed range.
    pub max_speed_ms: u32,
    /// Optional RNG seed for reproducible grids and colors.
    pub rng_seed: Option<u64>,
    /// Grids with at least this many cells step with rayon.
    pub parallel_threshold: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_pattern: PatternId::Random,
            initial_speed_ms: DEFAULT_SPEED_MS,
            min_speed_ms: MIN_SPEED_MS,
            max_speed_ms: MAX_SPEED_MS,
            rng_seed: None,
            parallel_threshold: 256 * 256,
        }
    }
}

impl LifeConfig {
    /// Parse and validate a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> LifeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> LifeResult<Self> {
        let path = path.as_ref();
        let config = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), grid_size = config.grid_size, "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> LifeResult<()> {
        if self.grid_size == 0 {
            return Err(LifeError::InvalidConfig("grid_size must be at least 1"));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(LifeError::InvalidConfig("grid_size must not exceed 4096"));
        }
        if self.min_speed_ms == 0 {
            return Err(LifeError::InvalidConfig("min_speed_ms must be positive"));
        }
        if self.min_speed_ms > self.max_speed_ms {
            return Err(LifeError::InvalidConfig(
                "min_speed_ms must not exceed max_speed_ms",
            ));
        }
        Ok(())
    }

    /// Clamp a requested tick interval into the configured range
    pub fn clamp_speed(&self, ms: u32) -> u32 {
        ms.clamp(self.min_speed_ms, self.max_speed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.initial_pattern, PatternId::Random);
        assert_eq!((config.min_speed_ms, config.max_speed_ms), (100, 1000));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            LifeConfig::from_json_str(r#"{ "grid_size": 50, "initial_pattern": "glider-gun" }"#)
                .unwrap();
        assert_eq!(config.grid_size, 50);
        assert_eq!(config.initial_pattern, PatternId::GliderGun);
        assert_eq!(config.initial_speed_ms, DEFAULT_SPEED_MS);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_unknown_pattern_in_json_is_rejected() {
        let err = LifeConfig::from_json_str(r#"{ "initial_pattern": "spaceship" }"#).unwrap_err();
        assert!(matches!(err, LifeError::Json(_)));
    }

    #[test]
    fn test_validation_errors() {
        let zero = LifeConfig { grid_size: 0, ..LifeConfig::default() };
        assert!(matches!(zero.validate(), Err(LifeError::InvalidConfig(_))));

        let huge = LifeConfig { grid_size: 1 << 33, ..LifeConfig::default() };
        assert!(matches!(huge.validate(), Err(LifeError::InvalidConfig(_))));

        let largest = LifeConfig { grid_size: MAX_GRID_SIZE, ..LifeConfig::default() };
        assert!(largest.validate().is_ok());

        let inverted = LifeConfig {
            min_speed_ms: 900,
            max_speed_ms: 200,
            ..LifeConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LifeConfig::from_path("/nonexistent/neon_life.json").unwrap_err();
        assert!(matches!(err, LifeError::Io(_)));
    }

    #[test]
    fn test_clamp_speed() {
        let config = LifeConfig::default();
        assert_eq!(config.clamp_speed(50), 100);
        assert_eq!(config.clamp_speed(5000), 1000);
        assert_eq!(config.clamp_speed(350), 350);
    }
}
