//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Render region size.
    pub viewport: ViewportConfig,
    /// Scene generation and clock settings.
    pub scene: SceneConfig,
    /// How long the host runs and where it writes artifacts.
    pub run: RunConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Render region size in physical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Scene generation and clock settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for crater and particle placement. `None` draws a fresh one per run.
    pub seed: Option<u64>,
    /// Animation ticks per second of host time. Rates are specified per tick,
    /// so 60 reproduces one tick per frame on a 60 Hz display.
    pub ticks_per_second: f64,
}

/// Host run settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to simulate before exiting.
    pub frames: u64,
    /// Directory to write the generated textures to as PNG, if any.
    pub export_dir: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,orbis_scene=trace").
    pub log_level: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ticks_per_second: 60.0,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            export_dir: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there first if
    /// the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Write this config to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Re-read the file and return the new config only if it differs.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values the scene host cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "viewport.width",
                reason: "must be positive",
            });
        }
        if self.viewport.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "viewport.height",
                reason: "must be positive",
            });
        }
        let tps = self.scene.ticks_per_second;
        if !tps.is_finite() || tps <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "scene.ticks_per_second",
                reason: "must be a positive finite number",
            });
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
