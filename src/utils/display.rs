//! Display and output formatting utilities

use crate::game_of_life::Grid;
use itertools::Itertools;

/// Render a grid with each cell `scale` characters wide
pub fn format_grid_scaled(grid: &Grid, scale: usize) -> String {
    let alive = "█".repeat(scale);
    let dead = "·".repeat(scale);
    let mut output = String::with_capacity(grid.rows() * (grid.cols() * scale * 3 + 1));
    for row in grid.iter_rows() {
        for &cell in row {
            output.push_str(if cell { &alive } else { &dead });
        }
        output.push('\n');
    }
    output
}

/// Format a grid in compact form
pub fn format_grid_compact(grid: &Grid) -> String {
    format_grid_scaled(grid, 1)
}

/// Format a grid with coordinates
pub fn format_grid_with_coords(grid: &Grid) -> String {
    let mut output = String::new();

    // Header with column numbers
    output.push_str("   ");
    output.push_str(&(0..grid.cols()).map(|x| format!("{:2}", x % 10)).join(""));
    output.push('\n');

    for (y, row) in grid.iter_rows().enumerate() {
        output.push_str(&format!("{:2} ", y));
        for &cell in row {
            output.push_str(if cell { "██" } else { "··" });
        }
        output.push('\n');
    }

    output
}

/// Message categories for CLI status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
}

impl Tone {
    fn ansi_code(self) -> u8 {
        match self {
            Tone::Info => 34,
            Tone::Success => 32,
            Tone::Warning => 33,
        }
    }
}

/// Wrap a status line in ANSI color unless `NO_COLOR` is set or the terminal is dumb
pub fn styled(text: &str, tone: Tone) -> String {
    let plain = std::env::var_os("NO_COLOR").is_some()
        || std::env::var("TERM").is_ok_and(|term| term == "dumb");
    if plain {
        text.to_string()
    } else {
        format!("\x1b[{}m{}\x1b[0m", tone.ansi_code(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_cells(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let grid = sample();

        assert_eq!(format_grid_compact(&grid), "█·█\n·█·\n");
        assert_eq!(format_grid_scaled(&grid, 2), "██··██\n··██··\n");

        let with_coords = format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_styled_keeps_text() {
        let line = styled("Setup complete", Tone::Success);
        assert!(line.contains("Setup complete"));
        assert!(line == "Setup complete" || line.starts_with("\x1b[32m"));
    }
}
