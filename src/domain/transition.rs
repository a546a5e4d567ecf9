//! B3/S23 generation step on the toroidal grid.
//!
//! Both entry points read only from the input grid and write only to a
//! freshly allocated output, so generation N+1 depends purely on generation N.

use rayon::prelude::*;

use super::{Cell, GridBuffer};

/// Count live neighbors among the 8 wrapped adjacent coordinates
pub fn neighbor_count(grid: &GridBuffer, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);

    (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter(|&(dr, dc)| grid.get(row + dr, col + dc))
        .count() as u8
}

fn next_cell(grid: &GridBuffer, row: usize, col: usize) -> Cell {
    grid.cell(row as isize, col as isize)
        .evolve(neighbor_count(grid, row, col))
}

/// Compute the next generation (serial)
pub fn step(grid: &GridBuffer) -> GridBuffer {
    let n = grid.size();
    let cells = (0..n)
        .flat_map(|row| (0..n).map(move |col| (row, col)))
        .map(|(row, col)| next_cell(grid, row, col))
        .collect();

    GridBuffer::from_cells(n, cells)
}

/// Same result as [`step`], rows computed in parallel with rayon.
/// Only worth it for large grids.
pub fn step_parallel(grid: &GridBuffer) -> GridBuffer {
    let n = grid.size();
    let cells: Vec<Cell> = (0..n)
        .into_par_iter()
        .flat_map_iter(|row| (0..n).map(move |col| next_cell(grid, row, col)))
        .collect();

    GridBuffer::from_cells(n, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    #[test]
    fn test_neighbor_count_wraps_corner() {
        let n = 10;
        let grid = GridBuffer::from_live_cells(n, [(0, 0), (9, 9)]);
        assert_eq!(neighbor_count(&grid, 0, 0), 1);
        assert_eq!(neighbor_count(&grid, 9, 9), 1);
        // (0, 9) touches both corners across the seams
        assert_eq!(neighbor_count(&grid, 0, 9), 2);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let grid = GridBuffer::from_live_cells(5, [(2, 2)]);
        assert_eq!(neighbor_count(&grid, 2, 2), 0);
        assert_eq!(neighbor_count(&grid, 1, 1), 1);
    }

    #[test]
    fn test_full_neighborhood() {
        let mut grid = GridBuffer::new(5);
        for r in 1..=3 {
            for c in 1..=3 {
                grid.set(r, c, true);
            }
        }
        assert_eq!(neighbor_count(&grid, 2, 2), 8);
        // Center is overcrowded, corners keep exactly 3
        let next = step(&grid);
        assert!(!next.get(2, 2));
        assert!(next.get(1, 1));
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = GridBuffer::from_live_cells(6, [(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = GridBuffer::from_live_cells(6, [(3, 3)]);
        assert_eq!(step(&grid).live_count(), 0);
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let grid = GridBuffer::from_live_cells(6, [(1, 2), (2, 2), (3, 2)]);
        let before = grid.clone();
        let _ = step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_blinker_crosses_the_seam() {
        // Vertical blinker straddling the top/bottom edge
        let grid = GridBuffer::from_live_cells(8, [(7, 4), (0, 4), (1, 4)]);
        let next = step(&grid);
        let live: Vec<_> = next.live_cells().collect();
        assert_eq!(live, vec![(0, 3), (0, 4), (0, 5)]);
        assert_eq!(step(&next), grid);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        let mut grid = GridBuffer::new(48);
        for r in 0..48 {
            for c in 0..48 {
                grid.set(r, c, rng.random_bool(0.3));
            }
        }
        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..5 {
            serial = step(&serial);
            parallel = step_parallel(&parallel);
            assert_eq!(serial, parallel);
        }
    }
}
