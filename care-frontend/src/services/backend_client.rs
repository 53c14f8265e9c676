//! Read-only calls to the backend's patient index and catalog.

use invoicing_service::{CatalogItem, CatalogKind, PatientRef};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use service_core::error::AppError;
use std::time::Duration;
use tracing::{instrument, warn};

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

/// Backends answer either with a bare array or with the array under a key.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "patients", alias = "items", alias = "results")]
        data: Vec<T>,
    },
}

impl<T> ListBody<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) | ListBody::Wrapped { data: items } => items,
        }
    }
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Failed to build HTTP client: {}", e))
        })?;
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Invalid backend URL '{}': {}", base_url, e))
        })?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::ConfigError(anyhow::anyhow!("Backend URL cannot be a base")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        url: Url,
        operation: &'static str,
    ) -> Result<Vec<T>, AppError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(operation, error = %e, "Backend unreachable");
            AppError::BadGateway(format!("{} failed: {}", operation, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(operation, status = %status, "Backend returned error");
            return Err(AppError::BadGateway(format!(
                "{} returned {}",
                operation, status
            )));
        }

        let body = response.json::<ListBody<T>>().await.map_err(|e| {
            AppError::BadGateway(format!("{} returned malformed body: {}", operation, e))
        })?;
        Ok(body.into_vec())
    }

    /// Search-as-you-type against the patient index. A blank query returns
    /// nothing without calling the backend.
    #[instrument(skip(self))]
    pub async fn search_patients(&self, query: &str) -> Result<Vec<PatientRef>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self.endpoint(&["api", "patients", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_list(url, "search_patients").await
    }

    #[instrument(skip(self), fields(kind = kind.as_str()))]
    pub async fn catalog(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, AppError> {
        let url = self.endpoint(&["api", "catalog", kind.as_str()])?;
        self.get_list(url, "catalog").await
    }
}
