use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::metrics::get_metrics;

/// Liveness probe polled by the desktop shell.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "care-frontend",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
