//! External invoice store (the backend's `/api/invoices` resource).

use crate::models::{CreateInvoiceRequest, InvoiceDraft, InvoiceSummary, PatientRef};
use crate::pricing::{compute_totals, recompute};
use crate::services::metrics::{record_store_error, record_submitted, record_validation_failure};
use crate::validation::{validate_invoice_draft, ValidationError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use rust_decimal::Decimal;
use serde::Deserialize;
use service_core::error::AppError;
use std::time::Duration;
use tracing::{info, instrument, warn};

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn create_invoice(&self, request: &CreateInvoiceRequest)
        -> Result<InvoiceSummary, AppError>;
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError>;
    async fn invoice_pdf(&self, invoice_id: &str) -> Result<Vec<u8>, AppError>;
}

/// Validate `draft` and, only if it passes, create it in `store`.
///
/// Items are re-derived and totals recomputed here so the payload never
/// carries a stale amount.
#[instrument(skip(store, draft), fields(care_center = %draft.care_center, items = draft.items.len()))]
pub async fn submit_draft<S>(store: &S, draft: &InvoiceDraft) -> Result<InvoiceSummary, AppError>
where
    S: InvoiceStore + ?Sized,
{
    if let Err(err) = validate_invoice_draft(draft) {
        warn!(code = err.code(), "Invoice draft rejected");
        record_validation_failure(err.code());
        return Err(err.into());
    }

    let patient = draft
        .patient
        .as_ref()
        .ok_or(ValidationError::MissingPatient)?;
    let request = create_request(draft, patient);

    let created = store.create_invoice(&request).await?;
    record_submitted(&draft.care_center);

    info!(
        invoice_id = %created.id,
        final_amount = %request.totals.final_amount,
        "Invoice created"
    );

    Ok(created)
}

fn create_request(draft: &InvoiceDraft, patient: &PatientRef) -> CreateInvoiceRequest {
    let items: Vec<_> = draft.items.iter().map(recompute).collect();
    // The draft may arrive straight from a request body.
    let bulk_discount = draft.bulk_discount.max(Decimal::ZERO);
    let totals = compute_totals(&items, bulk_discount);

    CreateInvoiceRequest {
        patient_id: patient.patient_id.trim().to_string(),
        patient_name: patient.name.clone(),
        visit_id: draft.visit_id.trim().to_string(),
        care_center: draft.care_center.trim().to_string(),
        corporate_customer: draft.corporate_customer,
        bulk_discount,
        items,
        totals,
    }
}

/// [`InvoiceStore`] backed by the backend REST API.
#[derive(Clone)]
pub struct HttpInvoiceStore {
    client: Client,
    base_url: Url,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InvoiceListBody {
    Bare(Vec<InvoiceSummary>),
    Wrapped { invoices: Vec<InvoiceSummary> },
}

impl HttpInvoiceStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Failed to build HTTP client: {}", e))
        })?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, AppError> {
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
}

/// Map transport failures and non-2xx statuses onto [`AppError`].
async fn ensure_success(
    result: Result<reqwest::Response, reqwest::Error>,
    operation: &'static str,
) -> Result<reqwest::Response, AppError> {
    let response = result.map_err(|e| {
        record_store_error(operation);
        warn!(operation, error = %e, "Invoice store unreachable");
        AppError::BadGateway(format!("{} failed: {}", operation, e))
    })?;

    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(AppError::NotFound(anyhow::anyhow!(
            "{}: not found in invoice store",
            operation
        ))),
        status => {
            record_store_error(operation);
            let body = response.text().await.unwrap_or_default();
            warn!(operation, status = %status, body = %body, "Invoice store returned error");
            Err(AppError::BadGateway(format!(
                "{} returned {}",
                operation, status
            )))
        }
    }
}

#[async_trait]
impl InvoiceStore for HttpInvoiceStore {
    #[instrument(skip(self, request), fields(patient_id = %request.patient_id))]
    async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<InvoiceSummary, AppError> {
        let url = self.endpoint(&["api", "invoices"])?;
        let response = ensure_success(
            self.client.post(url).json(request).send().await,
            "create_invoice",
        )
        .await?;

        response.json::<InvoiceSummary>().await.map_err(|e| {
            AppError::BadGateway(format!("create_invoice returned malformed body: {}", e))
        })
    }

    #[instrument(skip(self))]
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        let url = self.endpoint(&["api", "invoices"])?;
        let response =
            ensure_success(self.client.get(url).send().await, "list_invoices").await?;

        let body = response.json::<InvoiceListBody>().await.map_err(|e| {
            AppError::BadGateway(format!("list_invoices returned malformed body: {}", e))
        })?;

        Ok(match body {
            InvoiceListBody::Bare(invoices) | InvoiceListBody::Wrapped { invoices } => invoices,
        })
    }

    #[instrument(skip(self))]
    async fn invoice_pdf(&self, invoice_id: &str) -> Result<Vec<u8>, AppError> {
        let url = self.endpoint(&["api", "invoices", invoice_id, "pdf"])?;
        let response = ensure_success(self.client.get(url).send().await, "invoice_pdf").await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::BadGateway(format!("invoice_pdf body read failed: {}", e)))?;

        Ok(bytes.to_vec())
    }
}
