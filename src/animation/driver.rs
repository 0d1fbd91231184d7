//! Animation driver: owns the current grid and feeds generations to a sink

use super::playback::Playback;
use super::sink::FrameSink;
use crate::config::AnimationConfig;
use crate::game_of_life::{rules, CellArray, Grid};
use anyhow::{Context, Result};

/// One displayed generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub grid: Grid,
}

/// Steps a grid once per tick and hands the results to a display sink
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    original: Grid,
    current: Grid,
    frame_index: usize,
    config: AnimationConfig,
}

impl AnimationDriver {
    /// Create a driver, validating the parameters before any frame exists
    pub fn new(initial: Grid, config: AnimationConfig) -> Result<Self> {
        config.validate().context("Invalid animation parameters")?;
        log::debug!(
            "Animation of {}x{} grid: {} frames every {}ms, mode {}",
            initial.rows(),
            initial.cols(),
            config.frames,
            config.interval_ms,
            config.mode
        );

        Ok(Self {
            current: initial.clone(),
            original: initial,
            frame_index: 0,
            config,
        })
    }

    /// Create a driver from untyped data; anything but a 2-dimensional array is rejected
    pub fn from_array(initial: CellArray, config: AnimationConfig) -> Result<Self> {
        let grid = initial.into_grid().context("Initial state is not a grid")?;
        Self::new(grid, config)
    }

    pub fn original(&self) -> &Grid {
        &self.original
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Index of the generation the next tick will show
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// All-dead frame drawn before the animation starts
    pub fn blank(&self) -> Grid {
        self.original.blank_like()
    }

    /// Show the current generation, then advance to its successor
    pub fn tick(&mut self) -> Frame {
        let next = rules::step(&self.current);
        let grid = std::mem::replace(&mut self.current, next);
        let frame = Frame {
            index: self.frame_index,
            grid,
        };
        self.frame_index += 1;
        frame
    }

    /// Go back to the original grid
    pub fn reset(&mut self) {
        self.current = self.original.clone();
        self.frame_index = 0;
    }

    /// Compute every frame of the animation, starting from the original grid
    pub fn frames(&mut self) -> Vec<Grid> {
        self.reset();
        (0..self.config.frames).map(|_| self.tick().grid).collect()
    }

    /// Play the animation into a sink following the configured end-of-sequence mode
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> Result<()> {
        let frames = self.frames();
        sink.init(&self.blank())?;

        let order = Playback::new(frames.len(), self.config.mode, self.config.repeat);
        for index in order {
            log::debug!("Showing generation {} of {}", index, frames.len());
            sink.show(index, &frames[index])
                .with_context(|| format!("Failed to display generation {}", index))?;
        }

        sink.finish()
    }
}
