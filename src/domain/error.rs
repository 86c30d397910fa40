use thiserror::Error;

/// Errors raised by grid access, world decoding and the rule engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireworldError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("invalid world data: {0}")]
    Format(#[from] FormatError),
    #[error("grid dimensions mismatch: expected {expected:?}, found {found:?}")]
    InvalidArgument {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Reasons a world string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected a single line")]
    MultipleLines,
    #[error("expected {expected} cells, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("invalid character {found:?} at position {index}, expected a digit 0-3")]
    InvalidCharacter { index: usize, found: char },
}

pub type Result<T> = std::result::Result<T, WireworldError>;
