//! Services module for invoicing-service.

pub mod invoice_store;
pub mod metrics;

pub use invoice_store::{submit_draft, HttpInvoiceStore, InvoiceStore};
