//! Command-line argument parsing for the scene host.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// orbis command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orbis", about = "Procedural planet scene host")]
pub struct CliArgs {
    /// Viewport width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for crater and particle placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Write the generated textures as PNG files into this directory.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.viewport.width = w;
        }
        if let Some(h) = args.height {
            self.viewport.height = h;
        }
        if let Some(seed) = args.seed {
            self.scene.seed = Some(seed);
        }
        if let Some(frames) = args.frames {
            self.run.frames = frames;
        }
        if let Some(ref dir) = args.export_dir {
            self.run.export_dir = Some(dir.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
