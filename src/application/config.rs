//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml`
//! 2. `config/user.toml` (user overrides)
//! 3. Environment variables (`WIREWORLD_SECTION__KEY`)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Simulation;
use crate::domain::CellState;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireworldConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl WireworldConfig {
    /// Load configuration from the `config` directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        for name in ["default.toml", "user.toml"] {
            let path = config_dir.join(name);
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // WIREWORLD_SIMULATION__TICKS_PER_SECOND=50 -> simulation.ticks_per_second = 50
        figment = figment.merge(Env::prefixed("WIREWORLD_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.world.width == 0 || self.world.height == 0 {
            return Err(ConfigError::EmptyWorld {
                width: self.world.width,
                height: self.world.height,
            });
        }
        Ok(())
    }

    /// Build a paused simulation from these settings
    pub fn build_simulation(&self) -> Simulation {
        Simulation::new(self.world.width, self.world.height)
            .with_tick_rate(self.simulation.ticks_per_second)
            .with_selected_state(self.simulation.selected_state)
    }
}

/// World dimensions. Both sides of a world file must agree on these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { width: 50, height: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Starting target rate
    pub ticks_per_second: f32,
    /// State painted before the user picks one
    pub selected_state: CellState,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 5.0,
            selected_state: CellState::Head,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wireworld".to_string(),
            width: 1000,
            height: 700,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// World file read by the load key and written by the save key
    pub world_path: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            world_path: PathBuf::from("world.wire"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),
    #[error("world must have at least one cell, got {width}x{height}")]
    EmptyWorld { width: usize, height: usize },
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Figment(Box::new(e))
    }
}
