//! Game of Life core functionality

pub mod array;
pub mod grid;
pub mod rules;
pub mod io;

pub use array::CellArray;
pub use grid::{Grid, GridError};
pub use rules::{evolve, neighbor_counts, step, step_array, NeighborCounts};
pub use io::{load_grid_from_file, parse_grid_from_string, create_example_grids};
