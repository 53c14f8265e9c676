//! In-process router tests with a stubbed invoice store.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use care_frontend::services::{BackendClient, InMemoryOptionsRepository};
use care_frontend::startup::build_router;
use care_frontend::AppState;
use document_service::{Branding, DischargeSummaryGenerator, FileLogoSource, LocalStorage};
use invoicing_service::services::InvoiceStore;
use invoicing_service::{CreateInvoiceRequest, InvoiceSummary};
use serde_json::{json, Value};
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

#[derive(Default)]
struct RecordingStore {
    created: AtomicUsize,
}

#[async_trait]
impl InvoiceStore for RecordingStore {
    async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<InvoiceSummary, AppError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(InvoiceSummary {
            id: "INV-local".to_string(),
            invoice_number: None,
            patient_name: request.patient_name.clone(),
            member_id: None,
            care_center: request.care_center.clone(),
            final_amount: request.totals.final_amount,
            created_at: None,
        })
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        Ok(Vec::new())
    }

    async fn invoice_pdf(&self, invoice_id: &str) -> Result<Vec<u8>, AppError> {
        Err(AppError::NotFound(anyhow::anyhow!("{} not found", invoice_id)))
    }
}

async fn state(dir: &tempfile::TempDir, store: Arc<RecordingStore>) -> AppState {
    let storage = LocalStorage::new(dir.path().join("summaries")).await.unwrap();
    let documents = DischargeSummaryGenerator::new(
        Branding::default(),
        Arc::new(FileLogoSource::new(dir.path().join("missing.png"))),
        Arc::new(storage),
    );

    AppState {
        invoice_store: store,
        // Never reached by these tests.
        backend: Arc::new(BackendClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap()),
        documents: Arc::new(documents),
        options: Arc::new(InMemoryOptionsRepository::new(HashMap::new())),
    }
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn submit_goes_through_the_injected_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordingStore::default());
    let app = build_router(state(&dir, store.clone()).await, dir.path());

    let draft = json!({
        "patient": { "patient_id": "PAT-1", "name": "Kamala Devi" },
        "visit_id": "VIS-1",
        "care_center": "Chennai",
        "items": [{
            "service_name": "Nursing",
            "perform_date": "2024-05-02",
            "price": "1200.50",
            "quantity": 1,
            "discount": "0",
            "tax_type": "non_taxable",
            "tax_amount": "0"
        }]
    });

    let response = app
        .oneshot(json_request("POST", "/api/invoices", &draft))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["final_amount"], "1201");
    assert_eq!(store.created.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_items_never_reach_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordingStore::default());
    let app = build_router(state(&dir, store.clone()).await, dir.path());

    let draft = json!({
        "patient": { "patient_id": "PAT-1", "name": "Kamala Devi" },
        "visit_id": "VIS-1",
        "care_center": "Chennai",
        "items": []
    });

    let response = app
        .oneshot(json_request("POST", "/api/invoices", &draft))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "no_line_items");
    assert_eq!(store.created.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_totals_are_zero() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(
        state(&dir, Arc::new(RecordingStore::default())).await,
        dir.path(),
    );

    let response = app
        .oneshot(json_request("POST", "/api/pricing/totals", &json!({ "items": [] })))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["final_amount"], "0");
    assert_eq!(body["cost"], "0");
}

#[tokio::test]
async fn missing_invoice_pdf_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(
        state(&dir, Arc::new(RecordingStore::default())).await,
        dir.path(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/invoices/INV-404/pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
