//! The Wireworld rule engine.
//!
//! Every generation is computed from one consistent snapshot: neighbour
//! counts always read the pre-step grid, and results go to a separate grid.

use super::{Grid, Result, WireworldError};

/// Pure functional evolution - returns the next generation as a new grid
pub fn step(current: &Grid) -> Grid {
    let (width, height) = current.dimensions();
    let cells = current
        .iter_cells()
        .map(|(x, y, cell)| cell.evolve(current.count_head_neighbors(x, y)))
        .collect();
    Grid::from_cells(width, height, cells)
}

/// Write the next generation of `current` into `next`, reusing its storage.
/// Fails with `InvalidArgument` when the two grids differ in size.
pub fn step_into(current: &Grid, next: &mut Grid) -> Result<()> {
    if current.dimensions() != next.dimensions() {
        return Err(WireworldError::InvalidArgument {
            expected: current.dimensions(),
            found: next.dimensions(),
        });
    }
    for (x, y, cell) in current.iter_cells() {
        next.set(x, y, cell.evolve(current.count_head_neighbors(x, y)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState::{self, Conductor, Empty, Head, Tail};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn row(cells: &[CellState]) -> Grid {
        let mut grid = Grid::new(cells.len(), 1);
        for (x, &cell) in cells.iter().enumerate() {
            grid.set(x, 0, cell).unwrap();
        }
        grid
    }

    fn random_grid(rng: &mut StdRng, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, CellState::ALL[rng.random_range(0..4)]).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_synchronous_update() {
        let next = step(&row(&[Head, Conductor, Empty]));
        assert_eq!(next, row(&[Tail, Head, Empty]));
    }

    #[test]
    fn test_no_read_after_write_along_a_wire() {
        // A head moving right must advance exactly one cell per step
        let mut grid = row(&[Tail, Head, Conductor, Conductor, Conductor]);
        grid = step(&grid);
        assert_eq!(grid, row(&[Conductor, Tail, Head, Conductor, Conductor]));
        grid = step(&grid);
        assert_eq!(grid, row(&[Conductor, Conductor, Tail, Head, Conductor]));
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = row(&[Head, Conductor, Tail]);
        let before = grid.clone();
        let _ = step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = random_grid(&mut rng, 20, 15);
        assert_eq!(step(&grid), step(&grid));
    }

    #[test]
    fn test_conductor_with_three_heads_stays() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Conductor).unwrap();
        grid.set(0, 0, Head).unwrap();
        grid.set(1, 0, Head).unwrap();
        grid.set(2, 0, Head).unwrap();
        assert_eq!(step(&grid).get(1, 1), Ok(Conductor));

        grid.set(2, 0, Empty).unwrap();
        assert_eq!(step(&grid).get(1, 1), Ok(Head));
    }

    #[test]
    fn test_isolated_conductor_stays() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Conductor).unwrap();
        grid.set(2, 2, Tail).unwrap();
        let next = step(&grid);
        assert_eq!(next.get(1, 1), Ok(Conductor));
        assert_eq!(next.get(2, 2), Ok(Conductor));
    }

    #[test]
    fn test_corner_conductor_counts_only_real_neighbors() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, Conductor).unwrap();
        grid.set(0, 1, Head).unwrap();
        // Opposite corners must not leak in through wrapping
        grid.set(3, 3, Head).unwrap();
        grid.set(3, 0, Head).unwrap();
        grid.set(0, 3, Head).unwrap();
        assert_eq!(step(&grid).get(0, 0), Ok(Head));
    }

    #[test]
    fn test_empty_surrounded_by_heads_stays_empty() {
        let mut grid = Grid::new(3, 3);
        grid.fill(Head);
        grid.set(1, 1, Empty).unwrap();
        let next = step(&grid);
        assert_eq!(next.get(1, 1), Ok(Empty));
        assert_eq!(next.count(Tail), 8);
    }

    #[test]
    fn test_step_into_matches_step() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = random_grid(&mut rng, 12, 9);
        let mut scratch = Grid::new(12, 9);
        scratch.fill(Head);
        step_into(&grid, &mut scratch).unwrap();
        assert_eq!(scratch, step(&grid));
    }

    #[test]
    fn test_step_into_rejects_mismatched_dimensions() {
        let grid = Grid::new(4, 4);
        let mut scratch = Grid::new(4, 5);
        assert_eq!(
            step_into(&grid, &mut scratch),
            Err(WireworldError::InvalidArgument { expected: (4, 4), found: (4, 5) })
        );
    }

    #[test]
    fn test_diode_lets_signal_through_forward() {
        // Classic Wireworld diode, signal travelling left to right
        //   . C C . .
        //   C C . C C ...
        //   . C C . .
        let mut grid = Grid::new(9, 3);
        for x in 0..9 {
            grid.set(x, 1, Conductor).unwrap();
        }
        grid.set(3, 1, Empty).unwrap();
        for &(x, y) in &[(2, 0), (3, 0), (2, 2), (3, 2)] {
            grid.set(x, y, Conductor).unwrap();
        }
        grid.set(0, 1, Tail).unwrap();
        grid.set(1, 1, Head).unwrap();

        let mut reached_output = false;
        for _ in 0..10 {
            grid = step(&grid);
            if grid.get(6, 1) == Ok(Head) {
                reached_output = true;
            }
        }
        assert!(reached_output);
    }
}
