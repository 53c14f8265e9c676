//! service-core: shared infrastructure for the elder-care CRM crates.
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod observability;
pub mod shutdown;

pub use axum;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
