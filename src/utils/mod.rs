//! Shared helpers for terminal output

pub mod display;

pub use display::{format_grid_compact, format_grid_scaled, format_grid_with_coords, styled, Tone};
