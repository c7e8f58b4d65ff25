//! Headless host: builds the scene from config and drives it frame by frame.

use std::path::Path;
use std::time::Instant;

use orbis_config::{Config, ConfigError};
use orbis_scene::{PrimitiveKind, Scene, SceneError, Viewport, create_scene, create_scene_seeded};
use orbis_texture::TextureError;
use tracing::{debug, info};

use crate::clock::FrameClock;

/// Anything that stops the host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The scene could not be built.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// A texture could not be exported.
    #[error(transparent)]
    Texture(#[from] TextureError),
    /// The export directory could not be created.
    #[error("failed to create export directory {}: {source}", path.display())]
    ExportDir {
        /// Directory that failed.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Seed the scene was built from.
    pub seed: Option<u64>,
    /// Frames handed to the renderer.
    pub frames: u64,
    /// Ticks that advanced the scene.
    pub ticks: u64,
    /// Final planet rotation in radians.
    pub body_orientation: f64,
    /// Final camera azimuth in radians.
    pub camera_azimuth: f64,
    /// Primitives in the last frame.
    pub primitives: usize,
}

/// Build the scene described by `config`.
pub fn build_scene(config: &Config) -> Result<Scene, HostError> {
    config.validate()?;
    let viewport = Viewport::new(config.viewport.width, config.viewport.height)?;
    let scene = match config.scene.seed {
        Some(seed) => create_scene_seeded(viewport, seed)?,
        None => create_scene(viewport)?,
    };
    Ok(scene)
}

/// Write the surface and sprite textures as PNG files into `dir`.
pub fn export_textures(scene: &Scene, dir: &Path) -> Result<(), HostError> {
    std::fs::create_dir_all(dir).map_err(|source| HostError::ExportDir {
        path: dir.to_path_buf(),
        source,
    })?;
    scene
        .body()
        .surface()
        .texture()
        .save_png(&dir.join("surface.png"))?;
    scene.particles().sprite().save_png(&dir.join("sprite.png"))?;
    info!("Exported textures to {}", dir.display());
    Ok(())
}

/// Run `config.run.frames` frames with simulated frame times of one tick each.
pub fn run(config: &Config) -> Result<RunSummary, HostError> {
    let mut scene = build_scene(config)?;

    if let Some(dir) = &config.run.export_dir {
        export_textures(&scene, dir)?;
    }

    let mut clock = FrameClock::new(config.scene.ticks_per_second);
    let frame_time = clock.tick_duration();
    let report_every = config.scene.ticks_per_second.round().max(1.0) as u64;
    let started = Instant::now();
    let mut primitives = scene.frame().primitives.len();

    for frame_number in 1..=config.run.frames {
        let dt = clock.advance(frame_time);
        let frame = scene.tick(dt);
        primitives = frame.primitives.len();

        if frame_number % report_every == 0 {
            let surface = frame
                .find(PrimitiveKind::Body(orbis_scene::ShellKind::Surface))
                .map(|p| p.transform.to_scale_rotation_translation().1);
            debug!(
                "Frame {frame_number}: {} primitives, surface rotation {:?}, eye {:?}",
                primitives, surface, frame.camera.position
            );
        }
    }

    let summary = RunSummary {
        seed: scene.seed(),
        frames: clock.frame_count(),
        ticks: scene.tick_count(),
        body_orientation: scene.body().body().orientation(),
        camera_azimuth: scene.camera().azimuth(),
        primitives,
    };
    info!(
        "Ran {} frames ({} ticks, {:.1} tick units) in {:.1}ms: body {:.4} rad, camera azimuth {:.4} rad",
        summary.frames,
        summary.ticks,
        clock.total_ticks(),
        started.elapsed().as_secs_f64() * 1000.0,
        summary.body_orientation,
        summary.camera_azimuth
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(frames: u64) -> Config {
        let mut config = Config::default();
        config.scene.seed = Some(42);
        config.run.frames = frames;
        config
    }

    #[test]
    fn test_run_advances_one_tick_per_frame() {
        let summary = run(&config(100)).unwrap();
        assert_eq!(summary.frames, 100);
        assert_eq!(summary.ticks, 100);
        assert_eq!(summary.seed, Some(42));
        assert_eq!(summary.primitives, 9);
        assert!((summary.body_orientation - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_frames_leaves_scene_at_rest() {
        let summary = run(&config(0)).unwrap();
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.body_orientation, 0.0);
    }

    #[test]
    fn test_slower_tick_rate_keeps_one_tick_per_frame() {
        let mut cfg = config(30);
        cfg.scene.ticks_per_second = 30.0;
        let summary = run(&cfg).unwrap();
        assert!((summary.body_orientation - 30.0 * 0.005).abs() < 1e-9);
    }

    #[test]
    fn test_sub_clamp_tick_rate_keeps_one_tick_per_frame() {
        let mut cfg = config(10);
        cfg.scene.ticks_per_second = 2.0;
        let summary = run(&cfg).unwrap();
        assert_eq!(summary.ticks, 10);
        assert!((summary.body_orientation - 10.0 * 0.005).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_viewport_is_rejected() {
        let mut cfg = config(1);
        cfg.viewport.width = 0;
        assert!(matches!(run(&cfg), Err(HostError::Config(_))));
    }

    #[test]
    fn test_export_writes_both_textures() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(1);
        cfg.run.export_dir = Some(dir.path().join("textures"));
        run(&cfg).unwrap();
        assert!(dir.path().join("textures/surface.png").exists());
        assert!(dir.path().join("textures/sprite.png").exists());
    }
}
