use crate::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use document_service::DischargeSummaryInput;
use service_core::error::AppError;

fn pdf_attachment(file_name: &str, bytes: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name.replace('"', "")),
            ),
        ],
        bytes,
    )
}

/// Render, store a copy, and return the PDF as a download.
pub async fn generate_discharge_summary(
    State(state): State<AppState>,
    Json(input): Json<DischargeSummaryInput>,
) -> Result<impl IntoResponse, AppError> {
    let stored = state.documents.generate(&input).await?;
    let document = stored.document;
    Ok(pdf_attachment(&document.file_name, document.bytes))
}

/// Previously generated copy.
pub async fn download_discharge_summary(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state.documents.stored(&file_name).await?;
    Ok(pdf_attachment(&file_name, bytes))
}
