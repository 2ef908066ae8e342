use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_STEPS_PER_TILE;
use crate::error::ConfigError;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Resolver settings, read from `LINEMAP_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolverConfig {
    /// Route length ceiling, as a multiple of the map's tile count.
    #[serde(default = "default_max_steps_per_tile")]
    pub max_steps_per_tile: u32,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_max_steps_per_tile() -> u32 {
    DEFAULT_MAX_STEPS_PER_TILE
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            max_steps_per_tile: DEFAULT_MAX_STEPS_PER_TILE,
            log_format: LogFormat::default(),
        }
    }
}

impl ResolverConfig {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Figment::new().merge(Env::prefixed("LINEMAP_")))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: ResolverConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps_per_tile == 0 {
            return Err(ConfigError::InvalidStepFactor);
        }
        Ok(())
    }

    /// Step ceiling for a map with `tile_count` tiles.
    pub fn step_limit(&self, tile_count: usize) -> u32 {
        let tiles = u32::try_from(tile_count.max(1)).unwrap_or(u32::MAX);
        tiles.saturating_mul(self.max_steps_per_tile.max(1))
    }
}
