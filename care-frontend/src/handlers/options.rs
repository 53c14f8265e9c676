use crate::models::{AddOptionRequest, OptionsResponse};
use crate::services::OptionsError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;
use tracing::info;
use validator::Validate;

impl From<OptionsError> for AppError {
    fn from(err: OptionsError) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}

pub async fn list_options(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<OptionsResponse>, AppError> {
    let values = state.options.list(&category)?;
    Ok(Json(OptionsResponse { category, values }))
}

pub async fn add_option(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(payload): Json<AddOptionRequest>,
) -> Result<Json<OptionsResponse>, AppError> {
    payload.validate()?;
    let values = state.options.add(&category, &payload.value)?;
    info!(category = %category, value = %payload.value.trim(), "Dropdown option added");
    Ok(Json(OptionsResponse { category, values }))
}

pub async fn remove_option(
    State(state): State<AppState>,
    Path((category, value)): Path<(String, String)>,
) -> Result<Json<OptionsResponse>, AppError> {
    let values = state.options.remove(&category, &value)?;
    info!(category = %category, value = %value, "Dropdown option removed");
    Ok(Json(OptionsResponse { category, values }))
}
