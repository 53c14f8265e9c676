use crate::models::PatientSearchQuery;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use invoicing_service::PatientRef;
use service_core::error::AppError;

pub async fn search_patients(
    State(state): State<AppState>,
    Query(query): Query<PatientSearchQuery>,
) -> Result<Json<Vec<PatientRef>>, AppError> {
    Ok(Json(state.backend.search_patients(&query.q).await?))
}
