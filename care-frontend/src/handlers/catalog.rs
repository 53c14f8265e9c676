use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use invoicing_service::{CatalogItem, CatalogKind};
use service_core::error::AppError;

pub async fn list_catalog(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<CatalogItem>>, AppError> {
    let kind: CatalogKind = kind
        .parse()
        .map_err(|e: String| AppError::BadRequest(anyhow::anyhow!(e)))?;
    Ok(Json(state.backend.catalog(kind).await?))
}
