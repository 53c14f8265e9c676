pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use document_service::DischargeSummaryGenerator;
use invoicing_service::services::InvoiceStore;
use services::{BackendClient, OptionsRepository};
use std::sync::Arc;

/// Shared application state: the backend collaborators plus local services.
#[derive(Clone)]
pub struct AppState {
    pub invoice_store: Arc<dyn InvoiceStore>,
    pub backend: Arc<BackendClient>,
    pub documents: Arc<DischargeSummaryGenerator>,
    pub options: Arc<dyn OptionsRepository>,
}
