//! Headless host for the procedural planet scene.
//!
//! Loads `config.ron`, applies CLI overrides, builds the scene, optionally
//! exports its textures, and drives it for the configured number of frames.

mod clock;
mod host;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use orbis_config::{CliArgs, Config};
use tracing::error;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("orbis"))
            .unwrap_or_else(|| PathBuf::from(".orbis"))
    });

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    orbis_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match host::run(&config) {
        Ok(summary) => {
            if let Some(seed) = summary.seed {
                println!("seed {seed}: {} frames, {} ticks", summary.frames, summary.ticks);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
