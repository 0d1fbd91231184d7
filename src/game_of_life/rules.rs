//! Game of Life rules on a toroidal grid

use super::array::CellArray;
use super::grid::{Grid, GridError};

/// Live-neighbor count for every cell of a grid, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCounts {
    rows: usize,
    cols: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.cols + col]
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }
}

/// Count live Moore neighbors of every cell with wraparound edges.
///
/// Sums a 3x3 window around each cell in two separable passes (columns,
/// then rows) and subtracts the cell itself. On grids narrower than three
/// cells the window overlaps itself through the wrap, so a cell can be
/// counted more than once.
pub fn neighbor_counts(grid: &Grid) -> NeighborCounts {
    let (rows, cols) = grid.shape();

    let mut horizontal = vec![0u8; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            horizontal[r * cols + c] = (-1..=1)
                .map(|dc| grid.get_wrapped(r as isize, c as isize + dc) as u8)
                .sum();
        }
    }

    let mut counts = vec![0u8; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            let window: u8 = (-1..=1)
                .map(|dr| {
                    let wr = (r as isize + dr).rem_euclid(rows as isize) as usize;
                    horizontal[wr * cols + c]
                })
                .sum();
            counts[r * cols + c] = window - grid.get(r, c) as u8;
        }
    }

    NeighborCounts { rows, cols, counts }
}

/// Birth on exactly 3 neighbors, survival on 2 or 3
#[inline]
pub fn should_be_alive(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}

/// Advance a grid by one generation
pub fn step(grid: &Grid) -> Grid {
    let counts = neighbor_counts(grid);
    let next = grid
        .cells()
        .iter()
        .zip(counts.as_slice())
        .map(|(&alive, &n)| should_be_alive(alive, n))
        .collect();

    grid.with_cells(next)
}

/// Advance an untyped array by one generation; fails unless it is 2-dimensional
pub fn step_array(array: &CellArray) -> Result<CellArray, GridError> {
    let grid = array.clone().into_grid()?;
    Ok(step(&grid).into())
}

/// Apply `step` the given number of times
pub fn evolve(mut grid: Grid, generations: usize) -> Grid {
    for _ in 0..generations {
        grid = step(&grid);
    }
    grid
}

/// Endless sequence of generations, starting with the grid itself
pub fn generations(initial: Grid) -> impl Iterator<Item = Grid> {
    std::iter::successors(Some(initial), |grid| Some(step(grid)))
}
