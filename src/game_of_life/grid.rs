//! Grid representation and utilities for Game of Life

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while building or addressing a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected a 2-dimensional array, got {ndim} dimension(s)")]
    InvalidShape { ndim: usize },
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedRow { row: usize, actual: usize, expected: usize },
    #[error("shape {shape:?} needs {expected} cells, got {actual}")]
    CellCount { shape: Vec<usize>, expected: usize, actual: usize },
    #[error("invalid cell value {value} at position {position:?}")]
    InvalidCell { value: String, position: Vec<usize> },
    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
}

/// Toroidal Game of Life grid: both edges wrap around
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Unchecked serialized form; deserialization goes through `Grid::from_row_major`
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        Grid::from_row_major(raw.rows, raw.cols, raw.cells)
    }
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::RaggedRow { row, actual: line.len(), expected: cols });
            }
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Create a grid from row-major cells
    pub fn from_row_major(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != rows * cols {
            return Err(GridError::CellCount {
                shape: vec![rows, cols],
                expected: rows * cols,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// All-dead grid with the same shape
    pub fn blank_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![false; self.cells.len()],
        }
    }

    /// Same-shape grid holding the given row-major cells
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<bool> {
        self.cells
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell value at coordinates, out of bounds cells read as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[self.index(row, col)]
    }

    /// Get cell value with both coordinates taken modulo the grid size
    #[inline]
    pub fn get_wrapped(&self, row: isize, col: isize) -> bool {
        let r = row.rem_euclid(self.rows as isize) as usize;
        let c = col.rem_euclid(self.cols as isize) as usize;
        self.cells[self.index(r, c)]
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col, rows: self.rows, cols: self.cols });
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Iterate rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Nested row vectors, as consumed by JSON output
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                let symbol = if cell { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.shape(), (3, 4));
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.is_empty());
        assert_eq!(Grid::new(0, 3), Err(GridError::Empty));
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.living_count(), 3);
        assert_eq!(grid.living_cells(), vec![(0, 0), (0, 2), (1, 1)]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let cells = vec![vec![true, false], vec![true]];
        assert_eq!(
            Grid::from_cells(cells),
            Err(GridError::RaggedRow { row: 1, actual: 1, expected: 2 })
        );
    }

    #[test]
    fn test_wrapped_lookup() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.set(2, 3, true).unwrap();
        assert!(grid.get_wrapped(-1, -1));
        assert!(grid.get_wrapped(5, 7));
        assert!(!grid.get_wrapped(0, 0));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(matches!(grid.set(2, 0, true), Err(GridError::OutOfBounds { .. })));
        assert!(!grid.get(5, 5));
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let grid: Grid = serde_json::from_str(r#"{"rows":1,"cols":2,"cells":[true,false]}"#).unwrap();
        assert_eq!(grid.shape(), (1, 2));
        assert_eq!(serde_json::from_str::<Grid>(&serde_json::to_string(&grid).unwrap()).unwrap(), grid);

        let short = serde_json::from_str::<Grid>(r#"{"rows":2,"cols":2,"cells":[true]}"#);
        assert!(short.unwrap_err().to_string().contains("needs 4 cells, got 1"));

        let empty = serde_json::from_str::<Grid>(r#"{"rows":0,"cols":3,"cells":[]}"#);
        assert!(empty.is_err());
    }

    #[test]
    fn test_blank_like_keeps_shape() {
        let grid = Grid::from_cells(vec![vec![true; 5]; 2]).unwrap();
        let blank = grid.blank_like();
        assert_eq!(blank.shape(), (2, 5));
        assert!(blank.is_empty());
    }
}
