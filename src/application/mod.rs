mod camera;
pub mod config;
mod simulation;

pub use camera::Camera;
pub use config::{ConfigError, WireworldConfig};
pub use simulation::{
    MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND, Simulation, TICK_RATE_PRESETS,
};
