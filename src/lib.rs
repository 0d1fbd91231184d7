//! Conway's Game of Life on a toroidal grid
//!
//! The core is [`game_of_life::step`], a pure function from one generation to
//! the next. [`animation::AnimationDriver`] chains it and feeds the frames to a
//! display sink.

pub mod animation;
pub mod config;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{step, step_array, CellArray, Grid, GridError};

use anyhow::Result;

/// Load the configured initial state and play it into the given sink
pub fn animate(settings: &Settings, sink: &mut dyn animation::FrameSink) -> Result<()> {
    let initial = game_of_life::load_grid_from_file(&settings.input.initial_state_file)?;
    let mut driver = animation::AnimationDriver::new(initial, settings.animation.clone())?;
    driver.run(sink)
}
