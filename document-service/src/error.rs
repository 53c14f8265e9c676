use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// A charge bucket is missing or not numeric.
    #[error("Charge total `{bucket}` is missing or not a number")]
    MalformedTotal { bucket: &'static str },

    #[error("Logo could not be loaded: {0}")]
    Logo(String),

    #[error("PDF serialisation failed: {0}")]
    Render(#[from] lopdf::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Stored document not found: {0}")]
    NotFound(String),

    #[error("Storage I/O failed: {0}")]
    Storage(#[from] std::io::Error),
}

impl DocumentError {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::MalformedTotal { .. } => "malformed_total",
            DocumentError::Logo(_) => "logo_unavailable",
            DocumentError::Render(_) => "render_failed",
            DocumentError::InvalidKey(_) => "invalid_key",
            DocumentError::NotFound(_) => "not_found",
            DocumentError::Storage(_) => "storage_failed",
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::MalformedTotal { .. } => AppError::Unprocessable {
                code: err.code(),
                message: err.to_string(),
            },
            DocumentError::InvalidKey(_) => AppError::BadRequest(anyhow::Error::new(err)),
            DocumentError::NotFound(_) => AppError::NotFound(anyhow::Error::new(err)),
            DocumentError::Logo(_) | DocumentError::Render(_) | DocumentError::Storage(_) => {
                AppError::InternalError(anyhow::Error::new(err))
            }
        }
    }
}
