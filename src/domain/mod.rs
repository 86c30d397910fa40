mod cell;
mod error;
mod grid;
pub mod rules;
pub mod serializer;

pub use cell::CellState;
pub use error::{FormatError, Result, WireworldError};
pub use grid::Grid;
pub use rules::{step, step_into};
pub use serializer::{decode, encode};
