use document_service::Branding;
use serde::Deserialize;
use service_core::config::{configuration_directory, load_settings, TelemetryConfig};
use service_core::error::AppError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub documents: DocumentSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Seed values per dropdown category.
    #[serde(default)]
    pub dropdowns: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// The opaque backend that owns patients, invoices and the catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("care-frontend/static")
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentSettings {
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    #[serde(default)]
    pub branding: Branding,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("storage/discharge-summaries")
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            branding: Branding::default(),
        }
    }
}

/// `config/base.yaml` overlaid with `APP_SECTION__KEY` environment variables.
pub fn get_configuration() -> Result<Settings, AppError> {
    let directory = configuration_directory("care-frontend")?;
    load_settings(&directory.join("base.yaml"), true, "APP")
}
