use serde::Deserialize;
use service_core::config::{configuration_directory, load_settings, TelemetryConfig};
use service_core::error::AppError;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
    pub health_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_max_attempts() -> u32 {
    60
}

impl BackendConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub url: String,
    /// Program and leading arguments; the URL is appended. Defaults to the
    /// platform opener.
    #[serde(default)]
    pub browser_command: Option<Vec<String>>,
}

/// `config/shell.yaml` (optional) overlaid with `SHELL_SECTION__KEY`
/// environment variables.
pub fn get_configuration() -> Result<ShellConfig, AppError> {
    let directory = configuration_directory("desktop-shell")?;
    load_settings(&directory.join("shell.yaml"), false, "SHELL")
}
