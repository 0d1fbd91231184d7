//! Configuration settings for the Game of Life animator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub animation: AnimationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Number of generations to compute, including the initial one
    pub frames: usize,
    /// Delay between two displayed frames, in milliseconds
    pub interval_ms: u64,
    /// Terminal columns used per cell
    pub scale: usize,
    pub mode: PlaybackMode,
    /// Restarts (`loop`) or reversals (`reflect`) after the first pass
    pub repeat: usize,
}

/// What happens when the last frame has been shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    Loop,
    Once,
    Reflect,
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaybackMode::Loop => "loop",
            PlaybackMode::Once => "once",
            PlaybackMode::Reflect => "reflect",
        };
        f.write_str(name)
    }
}

impl FromStr for PlaybackMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "loop" => Ok(PlaybackMode::Loop),
            "once" => Ok(PlaybackMode::Once),
            "reflect" => Ok(PlaybackMode::Reflect),
            other => anyhow::bail!("Unknown playback mode '{}', expected loop, once or reflect", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub initial_state_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown output format '{}', expected terminal or json", other),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 10,
            interval_ms: 300,
            scale: 1,
            mode: PlaybackMode::Loop,
            repeat: 1,
        }
    }
}

impl AnimationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Check the driver parameters before any frame is computed
    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            anyhow::bail!("Number of frames must be positive");
        }
        if self.interval_ms == 0 {
            anyhow::bail!("Frame interval must be positive");
        }
        if self.scale == 0 {
            anyhow::bail!("Display scale must be positive");
        }
        if self.repeat == 0 {
            anyhow::bail!("Repeat count must be positive");
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            input: InputConfig {
                initial_state_file: PathBuf::from("input/patterns/glider.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Terminal,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.animation.validate()?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        self.animation.validate()?;

        if !self.input.initial_state_file.exists() {
            anyhow::bail!("Initial state file does not exist: {}", self.input.initial_state_file.display());
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(frames) = cli_overrides.frames {
            self.animation.frames = frames;
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.animation.interval_ms = interval_ms;
        }
        if let Some(scale) = cli_overrides.scale {
            self.animation.scale = scale;
        }
        if let Some(mode) = cli_overrides.mode {
            self.animation.mode = mode;
        }
        if let Some(repeat) = cli_overrides.repeat {
            self.animation.repeat = repeat;
        }
        if let Some(ref input_file) = cli_overrides.input_file {
            self.input.initial_state_file = input_file.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub frames: Option<usize>,
    pub interval_ms: Option<u64>,
    pub scale: Option<usize>,
    pub mode: Option<PlaybackMode>,
    pub repeat: Option<usize>,
    pub input_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}
