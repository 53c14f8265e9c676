//! Spawns care-frontend against a mocked backend.

#![allow(dead_code)]

use care_frontend::config::{
    BackendSettings, DocumentSettings, ServerSettings, Settings, UiSettings,
};
use care_frontend::startup::Application;
use document_service::Branding;
use serde_json::{json, Value};
use service_core::config::TelemetryConfig;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub backend: MockServer,
    pub storage_dir: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let backend = MockServer::start().await;
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<h1>Elder Care CRM</h1>").unwrap();

        let storage_dir = dir.path().join("summaries");
        let mut dropdowns = HashMap::new();
        dropdowns.insert(
            "care_center".to_string(),
            vec!["Coimbatore".to_string(), "Chennai".to_string()],
        );

        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            backend: BackendSettings {
                url: backend.uri(),
                timeout_secs: 5,
            },
            ui: UiSettings { static_dir },
            documents: DocumentSettings {
                storage_dir: storage_dir.clone(),
                branding: Branding {
                    logo_path: dir.path().join("no-logo.png"),
                    ..Branding::default()
                },
            },
            telemetry: TelemetryConfig::default(),
            dropdowns,
        };

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            client,
            backend,
            storage_dir,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn draft_json() -> Value {
    json!({
        "patient": { "patient_id": "PAT-1", "name": "Kamala Devi", "member_id": "CBE123" },
        "visit_id": "VIS-9",
        "care_center": "Coimbatore",
        "corporate_customer": false,
        "bulk_discount": "0",
        "items": [{
            "service_name": "Physiotherapy",
            "perform_date": "2024-03-01",
            "price": "500",
            "quantity": 2,
            "discount": "50",
            "tax_type": "exclusive",
            "tax_amount": "90"
        }]
    })
}

pub fn invoice_json(id: &str, patient: &str) -> Value {
    json!({
        "id": id,
        "invoice_number": format!("NO-{}", id),
        "patient_name": patient,
        "member_id": "CBE123",
        "care_center": "Coimbatore",
        "final_amount": "1040"
    })
}

pub fn discharge_json() -> Value {
    json!({
        "patientData": {
            "Patient Name": "Kamala Devi",
            "Member ID Key": "CBE123",
            "Care Center": "Coimbatore"
        },
        "billingData": { "days": 12 },
        "totals": {
            "room": 6000, "bed": 1200, "nurse": 2400, "hospital": 800,
            "doctor": 1500, "service": 300, "grand": 12200
        }
    })
}
