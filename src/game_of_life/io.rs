//! Loading initial Game of Life states

use super::array::CellArray;
use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a file.
///
/// Files ending in `.json` hold nested arrays of booleans or 0/1 numbers;
/// anything else uses the text format of [`parse_grid_from_string`].
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid file: {}", path.display()))?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let grid = if is_json {
        parse_grid_from_json(&content)
    } else {
        parse_grid_from_string(&content)
    };
    grid.with_context(|| format!("Failed to parse grid from file: {}", path.display()))
}

/// Parse a grid from a string representation
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid file is empty or contains no valid rows");
    }

    let mut cells = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!("Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                                 ch, row_idx, col_idx),
            }
        }
        cells.push(row);
    }

    Ok(Grid::from_cells(cells)?)
}

/// Parse a grid from a JSON document holding a 2-dimensional array
pub fn parse_grid_from_json(content: &str) -> Result<Grid> {
    let value: serde_json::Value = serde_json::from_str(content)
        .context("Grid file is not valid JSON")?;
    let grid = CellArray::from_json(&value)?.into_grid()?;
    Ok(grid)
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for row in grid.iter_rows() {
        result.extend(row.iter().map(|&cell| if cell { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Create example pattern files
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        // Travels one cell diagonally every four generations
        ("glider.txt", "0100000000\n0010000000\n1110000000\n0000000000\n0000000000\n0000000000\n0000000000\n0000000000\n"),
        ("blinker.txt", "00000\n00100\n00100\n00100\n00000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "000000\n011000\n011000\n000110\n000110\n000000\n"),
    ];

    for (name, content) in patterns {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
