// Domain layer - Wireworld rules, grid and world encoding
pub mod domain;

// Application layer - simulation control and configuration
pub mod application;

// Infrastructure layer - files, UI, rendering, input
pub mod storage;
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{CellState, FormatError, Grid, WireworldError, decode, encode, step};
pub use application::{Camera, Simulation, WireworldConfig};
