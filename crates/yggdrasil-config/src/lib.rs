#![allow(clippy::must_use_candidate)]

pub mod display;
mod env;
mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use display::DisplayConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How classified errors are shown to users
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
