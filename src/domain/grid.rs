use super::{CellState, Result, WireworldError};

/// Grid is fixed-size storage for a Wireworld world.
/// Cells live in a flat row-major buffer indexed by `y * width + x`.
/// Cloning a grid copies every cell; grids never share storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
        }
    }

    /// Build a grid from row-major cells. The caller guarantees the length.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(self.get_index(x, y))
        } else {
            Err(WireworldError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, x: usize, y: usize) -> Result<CellState> {
        self.check_bounds(x, y).map(|idx| self.cells[idx])
    }

    /// Replace the cell at position; nothing else is touched
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Set every cell to `state`
    pub fn fill(&mut self, state: CellState) {
        self.cells.iter_mut().for_each(|cell| *cell = state);
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Count Head cells in the Moore neighbourhood of (x, y).
    /// Positions outside the grid do not exist; the grid never wraps.
    pub fn count_head_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut heads = 0;
        for dy in -1isize..=1 {
            let Some(ny) = y.checked_add_signed(dy).filter(|&ny| ny < self.height) else {
                continue;
            };
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(nx) = x.checked_add_signed(dx).filter(|&nx| nx < self.width) else {
                    continue;
                };
                if self.cells[self.get_index(nx, ny)].is_head() {
                    heads += 1;
                }
            }
        }
        heads
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % width, idx / width, cell))
    }

    /// Count cells in a given state (HUD statistics)
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.iter_cells().all(|(_, _, c)| c == CellState::Empty));
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 3, CellState::Conductor).unwrap();
        assert_eq!(grid.get(2, 3), Ok(CellState::Conductor));
        assert_eq!(grid.get(3, 2), Ok(CellState::Empty));
        assert_eq!(grid.count(CellState::Conductor), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3, 2);
        assert_eq!(
            grid.get(3, 0),
            Err(WireworldError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 })
        );
        assert!(grid.get(0, 2).is_err());
        assert!(grid.set(0, 2, CellState::Head).is_err());
        assert_eq!(grid, Grid::new(3, 2));
    }

    #[test]
    fn test_fill() {
        let mut grid = Grid::new(3, 3);
        grid.fill(CellState::Tail);
        assert_eq!(grid.count(CellState::Tail), 9);
        grid.fill(CellState::Empty);
        assert_eq!(grid, Grid::new(3, 3));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = Grid::new(2, 2);
        let copy = grid.clone();
        grid.set(1, 1, CellState::Head).unwrap();
        assert_eq!(copy.get(1, 1), Ok(CellState::Empty));
        assert_ne!(grid, copy);
    }

    #[test]
    fn test_corner_neighbors_stay_in_bounds() {
        let mut grid = Grid::new(3, 3);
        grid.fill(CellState::Head);
        assert_eq!(grid.count_head_neighbors(0, 0), 3);
        assert_eq!(grid.count_head_neighbors(1, 0), 5);
        assert_eq!(grid.count_head_neighbors(1, 1), 8);
        assert_eq!(grid.count_head_neighbors(2, 2), 3);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, CellState::Head).unwrap();
        assert_eq!(grid.count_head_neighbors(1, 1), 0);
        assert_eq!(grid.count_head_neighbors(0, 0), 1);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, CellState::Head).unwrap();
        let order: Vec<_> = grid.iter_cells().collect();
        assert_eq!(order[0], (0, 0, CellState::Empty));
        assert_eq!(order[1], (1, 0, CellState::Head));
        assert_eq!(order[2], (0, 1, CellState::Empty));
    }
}
