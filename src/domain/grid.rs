use super::Cell;

/// GridBuffer is the N×N cell matrix on a torus.
/// Every coordinate is wrapped before lookup, so no edge is a boundary.
/// Cloning produces an independent snapshot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GridBuffer {
    size: usize,
    cells: Vec<Cell>,
}

impl GridBuffer {
    /// Create a new grid with all cells dead.
    /// Sizes below 1 are raised to 1 so every coordinate wraps onto a real cell.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Build a grid with the given coordinates alive (wrapped like `set`)
    pub fn from_live_cells(size: usize, live: impl IntoIterator<Item = (isize, isize)>) -> Self {
        let mut grid = Self::new(size);
        for (row, col) in live {
            grid.set(row, col, true);
        }
        grid
    }

    /// Side length N
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Normalize a raw coordinate onto [0, N)
    fn wrap(&self, coord: isize) -> usize {
        coord.rem_euclid(self.size as isize) as usize
    }

    /// Convert wrapped 2D coordinates to a 1D index
    fn index(&self, row: isize, col: isize) -> usize {
        self.wrap(row) * self.size + self.wrap(col)
    }

    /// True when (row, col) is already inside [0, N) without wrapping
    pub fn contains(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    pub fn cell(&self, row: isize, col: isize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn get(&self, row: isize, col: isize) -> bool {
        self.cell(row, col).is_alive()
    }

    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::from(alive);
    }

    /// Flip one cell and return its new liveness
    pub fn toggle(&mut self, row: isize, col: isize) -> bool {
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        self.cells[idx].is_alive()
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }

    /// Positions of live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }

    /// Build a grid directly from row-major cells produced by a transition
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = GridBuffer::new(30);
        assert_eq!(grid.size(), 30);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_coordinates_wrap() {
        let mut grid = GridBuffer::new(5);
        grid.set(-1, -1, true);
        assert!(grid.get(4, 4));
        assert!(grid.get(9, 9));
        assert!(grid.get(-6, 4));
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn test_contains_does_not_wrap() {
        let grid = GridBuffer::new(5);
        assert!(grid.contains(0, 4));
        assert!(!grid.contains(5, 0));
        assert!(!grid.contains(0, -1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = GridBuffer::new(4);
        grid.set(1, 2, true);
        let snapshot = grid.clone();
        grid.toggle(1, 2);
        assert!(snapshot.get(1, 2));
        assert!(!grid.get(1, 2));
        assert_ne!(grid, snapshot);
    }

    #[test]
    fn test_live_cells_row_major() {
        let grid = GridBuffer::from_live_cells(4, [(3, 0), (0, 2), (1, 1)]);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(0, 2), (1, 1), (3, 0)]);
    }

    #[test]
    fn test_zero_size_is_raised() {
        let grid = GridBuffer::new(0);
        assert_eq!(grid.size(), 1);
        assert!(!grid.get(7, -3));
    }
}
