//! Layered configuration: a YAML file, then prefixed environment variables.

use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Logging/tracing settings shared by every binary.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint; traces are only exported when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

/// Load `T` from `file` (optional unless `required`) overlaid with
/// `<PREFIX>_SECTION__KEY` environment variables. `.env` is read first.
pub fn load_settings<T: DeserializeOwned>(
    file: &Path,
    required: bool,
    env_prefix: &str,
) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let settings = Cfg::builder()
        .add_source(File::from(file.to_path_buf()).required(required))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}

/// Resolve `<crate_dir>/config` whether the binary runs from the workspace
/// root or from inside the crate directory.
pub fn configuration_directory(crate_dir: &str) -> Result<std::path::PathBuf, AppError> {
    let base_path = std::env::current_dir()?;

    Ok(if base_path.ends_with(crate_dir) {
        base_path.join("config")
    } else {
        base_path.join(crate_dir).join("config")
    })
}
