//! Display sinks that receive animation frames

use crate::config::{AnimationConfig, PlaybackMode};
use crate::game_of_life::Grid;
use crate::utils::display::format_grid_scaled;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;

/// Receives the frames of one animation run
pub trait FrameSink {
    /// Called once before any frame with an all-dead grid of the animation's shape
    fn init(&mut self, blank: &Grid) -> Result<()>;

    /// Display the frame holding generation `index`
    fn show(&mut self, index: usize, frame: &Grid) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps every frame in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub blank: Option<Grid>,
    pub shown: Vec<(usize, Grid)>,
    pub finished: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation indices in the order they were shown
    pub fn order(&self) -> Vec<usize> {
        self.shown.iter().map(|(index, _)| *index).collect()
    }
}

impl FrameSink for RecordingSink {
    fn init(&mut self, blank: &Grid) -> Result<()> {
        self.blank = Some(blank.clone());
        Ok(())
    }

    fn show(&mut self, index: usize, frame: &Grid) -> Result<()> {
        self.shown.push((index, frame.clone()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Redraws the grid in a terminal, pausing between frames
pub struct TerminalSink<W: Write> {
    out: W,
    scale: usize,
    interval: Duration,
    frames_drawn: usize,
}

impl TerminalSink<std::io::Stdout> {
    pub fn stdout(config: &AnimationConfig) -> Self {
        Self::new(std::io::stdout(), config.scale, config.interval())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, scale: usize, interval: Duration) -> Self {
        Self {
            out,
            scale,
            interval,
            frames_drawn: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, header: &str, grid: &Grid) -> Result<()> {
        write!(self.out, "{}{}\n{}", CLEAR_SCREEN, header, format_grid_scaled(grid, self.scale))
            .context("Failed to write frame")?;
        self.out.flush().context("Failed to flush frame")?;
        Ok(())
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn init(&mut self, blank: &Grid) -> Result<()> {
        self.draw("", blank)
    }

    fn show(&mut self, index: usize, frame: &Grid) -> Result<()> {
        if self.frames_drawn > 0 {
            std::thread::sleep(self.interval);
        }
        let header = format!("Generation {} (living: {})", index, frame.living_count());
        self.draw(&header, frame)?;
        self.frames_drawn += 1;
        Ok(())
    }
}

/// Self-contained description of an animation, for players outside this crate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonFrames {
    pub rows: usize,
    pub cols: usize,
    pub interval_ms: u64,
    pub mode: PlaybackMode,
    pub frames: Vec<Vec<Vec<bool>>>,
}

/// Collects each distinct generation and writes them as one JSON document
pub struct JsonSink<W: Write> {
    out: W,
    document: JsonFrames,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W, config: &AnimationConfig) -> Self {
        Self {
            out,
            document: JsonFrames {
                rows: 0,
                cols: 0,
                interval_ms: config.interval_ms,
                mode: config.mode,
                frames: Vec::with_capacity(config.frames),
            },
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonSink<W> {
    fn init(&mut self, blank: &Grid) -> Result<()> {
        let (rows, cols) = blank.shape();
        self.document.rows = rows;
        self.document.cols = cols;
        self.document.frames.clear();
        Ok(())
    }

    fn show(&mut self, index: usize, frame: &Grid) -> Result<()> {
        // Playback revisits earlier generations; only new ones are stored
        if index == self.document.frames.len() {
            self.document.frames.push(frame.to_rows());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.document)
            .context("Failed to serialize animation frames")?;
        writeln!(self.out).context("Failed to write animation frames")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        let mut grid = Grid::new(3, 3).unwrap();
        for col in 0..3 {
            grid.set(1, col, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_terminal_sink_draws_scaled_frames() {
        let grid = blinker();
        let mut sink = TerminalSink::new(Vec::new(), 2, Duration::from_millis(1));
        sink.init(&grid.blank_like()).unwrap();
        sink.show(0, &grid).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output.matches(CLEAR_SCREEN).count(), 2);
        assert!(output.contains("Generation 0 (living: 3)"));
        assert!(output.contains("██████"));
    }

    #[test]
    fn test_json_sink_keeps_distinct_generations() {
        let config = AnimationConfig {
            mode: PlaybackMode::Reflect,
            ..AnimationConfig::default()
        };
        let grid = blinker();
        let mut sink = JsonSink::new(Vec::new(), &config);
        sink.init(&grid.blank_like()).unwrap();
        sink.show(0, &grid).unwrap();
        sink.show(1, &grid.blank_like()).unwrap();
        sink.show(0, &grid).unwrap();
        sink.finish().unwrap();

        let document: JsonFrames = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!((document.rows, document.cols), (3, 3));
        assert_eq!(document.mode, PlaybackMode::Reflect);
        assert_eq!(document.interval_ms, 300);
        assert_eq!(document.frames.len(), 2);
        assert_eq!(document.frames[0][1], vec![true, true, true]);
    }
}
