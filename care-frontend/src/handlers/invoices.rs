use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use invoicing_service::services::submit_draft;
use invoicing_service::{InvoiceDraft, InvoicePage, InvoiceSummary, ListInvoicesFilter};
use service_core::error::AppError;

pub async fn create_invoice(
    State(state): State<AppState>,
    Json(draft): Json<InvoiceDraft>,
) -> Result<(StatusCode, Json<InvoiceSummary>), AppError> {
    let created = submit_draft(state.invoice_store.as_ref(), &draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_invoices(
    State(state): State<AppState>,
    Query(filter): Query<ListInvoicesFilter>,
) -> Result<Json<InvoicePage>, AppError> {
    let invoices = state.invoice_store.list_invoices().await?;
    Ok(Json(filter.apply(invoices)))
}

pub async fn invoice_pdf(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state.invoice_store.invoice_pdf(&invoice_id).await?;
    let safe_id: String = invoice_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"Invoice_{}.pdf\"", safe_id),
            ),
        ],
        bytes,
    ))
}
