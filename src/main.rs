//! Command line player for Game of Life animations

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_animation::{
    animation::{FrameSink, JsonSink, TerminalSink},
    config::{CliOverrides, OutputFormat, PlaybackMode, Settings},
    game_of_life::{create_example_grids, load_grid_from_file, rules},
    utils::{format_grid_compact, format_grid_with_coords, styled, Tone},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "life_animation")]
#[command(about = "Conway's Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate an initial state
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Initial state file (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of generations to compute (overrides config)
        #[arg(short, long)]
        frames: Option<usize>,

        /// Milliseconds between frames (overrides config)
        #[arg(long)]
        interval: Option<u64>,

        /// Terminal columns per cell (overrides config)
        #[arg(short, long)]
        scale: Option<usize>,

        /// End of sequence behavior: loop, once or reflect (overrides config)
        #[arg(short, long)]
        mode: Option<PlaybackMode>,

        /// Restarts or reversals for loop and reflect (overrides config)
        #[arg(short, long)]
        repeat: Option<usize>,

        /// Output format: terminal or json (overrides config)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Print successive generations of an initial state
    Step {
        /// Initial state file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Label rows and columns
        #[arg(long)]
        coords: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, input, frames, interval, scale, mode, repeat, format } => {
            let overrides = CliOverrides {
                frames,
                interval_ms: interval,
                scale,
                mode,
                repeat,
                input_file: input,
                format,
            };
            run_command(config, &overrides)
        }
        Commands::Step { input, generations, coords } => {
            step_command(input, generations, coords)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        log::warn!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    let mut sink: Box<dyn FrameSink> = match settings.output.format {
        OutputFormat::Terminal => Box::new(TerminalSink::stdout(&settings.animation)),
        OutputFormat::Json => Box::new(JsonSink::new(std::io::stdout(), &settings.animation)),
    };

    life_animation::animate(&settings, sink.as_mut())
        .with_context(|| format!("Failed to animate {}", settings.input.initial_state_file.display()))
}

fn step_command(input: PathBuf, generations: usize, coords: bool) -> Result<()> {
    let initial = load_grid_from_file(&input)?;
    let render = if coords { format_grid_with_coords } else { format_grid_compact };

    for (i, grid) in rules::generations(initial).take(generations + 1).enumerate() {
        println!("Generation {} (living: {}):", i, grid.living_count());
        println!("{}", render(&grid));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", styled("Setting up example files...", Tone::Info));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", styled(
            &format!("Skipped: {} (already exists)", config_path.display()),
            Tone::Warning,
        ));
    }

    create_example_grids(&patterns_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let examples_dir = config_dir.join("examples");
    let mut reflect = Settings::default();
    reflect.animation.frames = 8;
    reflect.animation.mode = PlaybackMode::Reflect;
    reflect.input.initial_state_file = PathBuf::from("input/patterns/beacon.txt");
    reflect.to_file(&examples_dir.join("reflect.yaml"))?;

    let mut blinker = Settings::default();
    blinker.animation.frames = 2;
    blinker.animation.scale = 2;
    blinker.input.initial_state_file = PathBuf::from("input/patterns/blinker.txt");
    blinker.to_file(&examples_dir.join("blinker.yaml"))?;

    println!("{}", styled("Setup complete", Tone::Success));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life_animation",
            "run",
            "--config", "test.yaml",
            "--frames", "5",
            "--mode", "reflect",
            "--repeat", "3",
            "--format", "json",
        ]).unwrap();

        match cli.command {
            Commands::Run { frames, mode, repeat, format, .. } => {
                assert_eq!(frames, Some(5));
                assert_eq!(repeat, Some(3));
                assert_eq!(mode, Some(PlaybackMode::Reflect));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["life_animation", "run", "--mode", "bounce"]).is_err());
    }

    #[test]
    fn test_run_rejects_zero_repeat() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("blinker.txt");
        std::fs::write(&input, "000\n111\n000\n").unwrap();

        let overrides = CliOverrides {
            repeat: Some(0),
            input_file: Some(input),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let err = run_command(temp_dir.path().join("missing.yaml"), &overrides).unwrap_err();
        assert!(format!("{:#}", err).contains("Repeat count must be positive"));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/reflect.yaml").exists());
        assert!(temp_dir.path().join("input/patterns/glider.txt").exists());
    }

    #[test]
    fn test_step_command() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("blinker.txt");
        std::fs::write(&input, "000\n111\n000\n").unwrap();

        assert!(step_command(input, 2, true).is_ok());
        assert!(step_command(temp_dir.path().join("missing.txt"), 1, false).is_err());
    }
}
