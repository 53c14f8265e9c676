//! Workflow test harness.
//!
//! Runs care-frontend in-process against a mocked backend and drives it over
//! HTTP the way the desktop UI does.

use anyhow::{anyhow, Result};
use care_frontend::config::{
    BackendSettings, DocumentSettings, ServerSettings, Settings, UiSettings,
};
use care_frontend::startup::Application;
use desktop_shell::supervisor::wait_until_healthy;
use document_service::Branding;
use serde_json::Value;
use service_core::config::TelemetryConfig;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// One running care-frontend with its own backend mock and storage.
pub struct WorkflowTestContext {
    pub address: String,
    pub client: reqwest::Client,
    pub backend: MockServer,
    pub storage_dir: PathBuf,
    _dir: TempDir,
}

impl WorkflowTestContext {
    pub async fn new() -> Result<Self> {
        init_tracing();

        let backend = MockServer::start().await;
        let dir = tempfile::tempdir()?;
        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir)?;
        std::fs::write(static_dir.join("index.html"), "<h1>Elder Care CRM</h1>")?;
        let storage_dir = dir.path().join("summaries");

        let mut dropdowns = HashMap::new();
        dropdowns.insert(
            "room_type".to_string(),
            vec!["Single".to_string(), "Twin Sharing".to_string()],
        );

        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            backend: BackendSettings {
                url: backend.uri(),
                timeout_secs: 5,
            },
            ui: UiSettings { static_dir },
            documents: DocumentSettings {
                storage_dir: storage_dir.clone(),
                branding: Branding {
                    logo_path: dir.path().join("logo.png"),
                    ..Branding::default()
                },
            },
            telemetry: TelemetryConfig::default(),
            dropdowns,
        };

        let app = Application::build(settings)
            .await
            .map_err(|e| anyhow!("Failed to build care-frontend: {}", e))?;
        let address = format!("http://127.0.0.1:{}", app.port());
        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        wait_until_healthy(
            &client,
            &format!("{}/health", address),
            Duration::from_millis(50),
            50,
        )
        .await?;

        Ok(Self {
            address,
            client,
            backend,
            storage_dir,
            _dir: dir,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }
}
