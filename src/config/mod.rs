//! Configuration management for the Game of Life animator

pub mod settings;

pub use settings::{
    Settings, AnimationConfig, InputConfig, OutputConfig, PlaybackMode, OutputFormat, CliOverrides
};
