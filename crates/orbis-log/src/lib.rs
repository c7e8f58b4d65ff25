//! Structured logging for the orbis scene host.
//!
//! Installs a `tracing` subscriber with console output (uptime timestamps and
//! module paths) and, in debug builds, a JSON log file for post-mortem
//! analysis. `RUST_LOG` takes precedence over the configured level.

use std::path::{Path, PathBuf};

use orbis_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config supply one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "orbis.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (only used when `debug_build`)
/// * `debug_build` - enables the file layer
/// * `config` - supplies `debug.log_level` when `RUST_LOG` is unset
///
/// Returns the path of the log file when one was opened.
///
/// # Examples
///
/// ```no_run
/// use orbis_config::Config;
/// use orbis_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Option<PathBuf> {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        let path = log_dir.join(LOG_FILE_NAME);
        tracing::info!("Writing JSON log to {}", path.display());
        return Some(path);
    }

    subscriber.init();
    None
}

/// Filter directive derived from the config, falling back to [`DEFAULT_FILTER`].
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_without_config() {
        assert_eq!(filter_directive(None), "info");
        assert!(format!("{}", default_env_filter()).contains("info"));
    }

    #[test]
    fn test_config_level_is_used() {
        let mut config = Config::default();
        config.debug.log_level = "debug,orbis_scene=trace".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug,orbis_scene=trace");
    }

    #[test]
    fn test_blank_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_directive(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_subsystem_filters_parse() {
        for filter_str in [
            "info",
            "debug,orbis_scene=trace",
            "warn,orbis_texture=debug,orbis_config=info",
            "error",
        ] {
            assert!(
                EnvFilter::try_new(filter_str).is_ok(),
                "Failed to parse filter: {filter_str}"
            );
        }
    }

    #[test]
    fn test_config_level_is_trimmed_and_parses() {
        let mut config = Config::default();
        config.debug.log_level = "  warn,orbis_scene=debug \n".to_string();
        let directive = filter_directive(Some(&config));
        assert_eq!(directive, "warn,orbis_scene=debug");
        assert!(EnvFilter::try_new(&directive).is_ok());
    }

    #[test]
    fn test_default_config_uses_default_filter() {
        assert_eq!(filter_directive(Some(&Config::default())), DEFAULT_FILTER);
    }
}
