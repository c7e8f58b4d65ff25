//! Configuration for the orbis scene host.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and detect
//! on-disk changes for hot reload. Every section defaults independently so
//! partial files stay valid across versions.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, RunConfig, SceneConfig, ViewportConfig};
pub use error::ConfigError;
