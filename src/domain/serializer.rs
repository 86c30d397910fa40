//! Flat text encoding of a grid.
//!
//! A world is one line of `width * height` digits, row-major (y outer, x
//! inner), each digit the state ordinal. Dimensions are not stored.

use super::{CellState, FormatError, Grid, Result};

/// Encode every cell as a single digit, row by row
pub fn encode(grid: &Grid) -> String {
    grid.cells().iter().map(|cell| cell.to_digit()).collect()
}

/// Decode a world line into a new grid of the given size.
/// The whole input is validated before any grid exists; one trailing
/// line terminator is tolerated.
pub fn decode(text: &str, width: usize, height: usize) -> Result<Grid> {
    let line = strip_line_terminator(text);
    if line.contains(['\n', '\r']) {
        return Err(FormatError::MultipleLines.into());
    }

    let expected = width * height;
    let found = line.chars().count();
    if found != expected {
        return Err(FormatError::WrongLength { expected, found }.into());
    }

    let cells = line
        .chars()
        .enumerate()
        .map(|(index, c)| {
            CellState::from_digit(c).ok_or(FormatError::InvalidCharacter { index, found: c })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Grid::from_cells(width, height, cells))
}

fn strip_line_terminator(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WireworldError;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_encode_row_major() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 0, CellState::Head).unwrap();
        grid.set(0, 1, CellState::Tail).unwrap();
        grid.set(2, 1, CellState::Conductor).unwrap();
        assert_eq!(encode(&grid), "010203");
    }

    #[test]
    fn test_decode_row_major() {
        let grid = decode("0123\n", 2, 2).unwrap();
        assert_eq!(grid.get(0, 0), Ok(CellState::Empty));
        assert_eq!(grid.get(1, 0), Ok(CellState::Head));
        assert_eq!(grid.get(0, 1), Ok(CellState::Tail));
        assert_eq!(grid.get(1, 1), Ok(CellState::Conductor));
    }

    #[test]
    fn test_round_trip_random_grids() {
        let mut rng = StdRng::seed_from_u64(2020);
        for &(w, h) in &[(1, 1), (7, 3), (50, 50)] {
            let mut grid = Grid::new(w, h);
            for y in 0..h {
                for x in 0..w {
                    grid.set(x, y, CellState::ALL[rng.random_range(0..4)]).unwrap();
                }
            }
            let text = encode(&grid);
            assert_eq!(text.len(), w * h);
            assert_eq!(decode(&text, w, h), Ok(grid));
        }
    }

    #[test]
    fn test_tolerates_one_line_terminator() {
        assert!(decode("0000\r\n", 2, 2).is_ok());
        assert!(decode("0000\n", 2, 2).is_ok());
        assert!(decode("0000", 2, 2).is_ok());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            decode("000", 2, 2),
            Err(WireworldError::Format(FormatError::WrongLength { expected: 4, found: 3 }))
        );
        assert!(decode("00000", 2, 2).is_err());
        assert!(decode("", 2, 2).is_err());
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(
            decode("0140", 2, 2),
            Err(WireworldError::Format(FormatError::InvalidCharacter { index: 2, found: '4' }))
        );
        assert!(decode("01 0", 2, 2).is_err());
        assert!(decode("-123", 2, 2).is_err());
    }

    #[test]
    fn test_rejects_multiple_lines() {
        assert_eq!(
            decode("00\n00", 2, 2),
            Err(WireworldError::Format(FormatError::MultipleLines))
        );
        assert!(decode("0000\n\n", 2, 2).is_err());
    }
}
