use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// A domain rule rejected the request; `code` is stable for clients.
    #[error("Unprocessable: {message}")]
    Unprocessable { code: &'static str, message: String },

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Bad Gateway: {0}")]
    BadGateway(String),

    #[error("Service Unavailable")]
    ServiceUnavailable,

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::Unprocessable { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::ValidationError(err) => ErrorResponse {
                error: "Validation error".to_string(),
                code: None,
                details: Some(err.to_string()),
            },
            AppError::Unprocessable { code, message } => ErrorResponse {
                error: message,
                code: Some(code),
                details: None,
            },
            AppError::BadRequest(err) | AppError::NotFound(err) => ErrorResponse {
                error: err.to_string(),
                code: None,
                details: None,
            },
            AppError::InternalError(err) => {
                tracing::error!(error = ?err, "Request failed with internal error");
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    code: None,
                    details: Some(err.to_string()),
                }
            }
            AppError::BadGateway(msg) => ErrorResponse {
                error: format!("Bad Gateway: {}", msg),
                code: None,
                details: None,
            },
            AppError::ServiceUnavailable => ErrorResponse {
                error: "Service unavailable".to_string(),
                code: None,
                details: None,
            },
            AppError::ConfigError(err) => ErrorResponse {
                error: "Configuration error".to_string(),
                code: None,
                details: Some(err.to_string()),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprocessable_maps_to_422() {
        let err = AppError::Unprocessable {
            code: "no_line_items",
            message: "Invoice has no line items".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn bad_gateway_maps_to_502() {
        let err = AppError::BadGateway("backend down".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
