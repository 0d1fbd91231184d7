//! Untyped n-dimensional cell arrays, the input boundary before a grid exists

use super::grid::{Grid, GridError};
use serde_json::Value;

/// Row-major array of arbitrary rank holding boolean cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellArray {
    shape: Vec<usize>,
    data: Vec<bool>,
}

impl CellArray {
    pub fn new(shape: Vec<usize>, data: Vec<bool>) -> Result<Self, GridError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(GridError::CellCount { shape, expected, actual: data.len() });
        }
        Ok(Self { shape, data })
    }

    /// Build an array from nested JSON lists.
    ///
    /// Leaves may be booleans or numbers; any non-zero number is alive.
    /// Sibling lists must agree on their shape.
    pub fn from_json(value: &Value) -> Result<Self, GridError> {
        let mut shape = Vec::new();
        let mut probe = value;
        while let Value::Array(items) = probe {
            shape.push(items.len());
            match items.first() {
                Some(first) => probe = first,
                None => break,
            }
        }

        let mut data = Vec::with_capacity(shape.iter().product());
        let mut position = Vec::with_capacity(shape.len());
        collect_leaves(value, &shape, &mut position, &mut data)?;
        Self::new(shape, data)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Interpret the array as a grid; only rank 2 is accepted
    pub fn into_grid(self) -> Result<Grid, GridError> {
        let Self { shape, data } = self;
        match shape[..] {
            [rows, cols] => Grid::from_row_major(rows, cols, data),
            _ => Err(GridError::InvalidShape { ndim: shape.len() }),
        }
    }
}

impl From<Grid> for CellArray {
    fn from(grid: Grid) -> Self {
        let (rows, cols) = grid.shape();
        Self {
            shape: vec![rows, cols],
            data: grid.into_cells(),
        }
    }
}

fn collect_leaves(
    value: &Value,
    shape: &[usize],
    position: &mut Vec<usize>,
    out: &mut Vec<bool>,
) -> Result<(), GridError> {
    let depth = position.len();
    match value {
        Value::Array(items) => {
            let expected = shape.get(depth).copied();
            if expected != Some(items.len()) {
                return Err(GridError::RaggedRow {
                    row: position.last().copied().unwrap_or(0),
                    actual: items.len(),
                    expected: expected.unwrap_or(0),
                });
            }
            for (i, item) in items.iter().enumerate() {
                position.push(i);
                collect_leaves(item, shape, position, out)?;
                position.pop();
            }
            Ok(())
        }
        leaf if depth == shape.len() => {
            out.push(coerce_cell(leaf, position)?);
            Ok(())
        }
        leaf => Err(GridError::InvalidCell {
            value: leaf.to_string(),
            position: position.clone(),
        }),
    }
}

fn coerce_cell(value: &Value, position: &[usize]) -> Result<bool, GridError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|x| x != 0.0)),
        other => Err(GridError::InvalidCell {
            value: other.to_string(),
            position: position.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_dimensional_json() {
        let array = CellArray::from_json(&json!([[0, 1, 0], [true, false, 2]])).unwrap();
        assert_eq!(array.shape(), &[2, 3]);
        assert_eq!(array.data(), &[false, true, false, true, false, true]);

        let grid = array.into_grid().unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.living_count(), 3);
    }

    #[test]
    fn test_rank_detection() {
        assert_eq!(CellArray::from_json(&json!([1, 0, 1])).unwrap().ndim(), 1);
        assert_eq!(CellArray::from_json(&json!([[[1], [0]]])).unwrap().shape(), &[1, 2, 1]);
        assert_eq!(CellArray::from_json(&json!(true)).unwrap().ndim(), 0);
    }

    #[test]
    fn test_non_matrix_rejected_as_invalid_shape() {
        let flat = CellArray::from_json(&json!([1, 0, 1])).unwrap();
        assert_eq!(flat.into_grid(), Err(GridError::InvalidShape { ndim: 1 }));

        let cube = CellArray::new(vec![2, 2, 2], vec![false; 8]).unwrap();
        assert_eq!(cube.into_grid(), Err(GridError::InvalidShape { ndim: 3 }));
    }

    #[test]
    fn test_ragged_and_bad_cells() {
        assert!(matches!(
            CellArray::from_json(&json!([[1, 0], [1]])),
            Err(GridError::RaggedRow { .. })
        ));
        assert!(matches!(
            CellArray::from_json(&json!([[1, "x"]])),
            Err(GridError::InvalidCell { .. })
        ));
        assert!(matches!(
            CellArray::from_json(&json!([[1, 0], 1])),
            Err(GridError::InvalidCell { .. })
        ));
    }

    #[test]
    fn test_cell_count_mismatch() {
        assert!(matches!(
            CellArray::new(vec![2, 3], vec![true; 5]),
            Err(GridError::CellCount { expected: 6, actual: 5, .. })
        ));
    }
}
