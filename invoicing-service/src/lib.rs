//! Invoice pricing for the elder-care CRM.
//!
//! Line amounts and invoice totals are pure functions of their inputs
//! ([`pricing`]); callers re-run them after every edit. A draft is checked
//! by [`validation::validate_invoice_draft`] before anything is sent to the
//! external invoice store ([`services::InvoiceStore`]).

pub mod draft;
pub mod models;
pub mod pricing;
pub mod services;
pub mod validation;

pub use draft::DraftError;
pub use models::{
    CatalogItem, CatalogKind, CreateInvoiceRequest, InvoiceDraft, InvoicePage, InvoiceSummary,
    InvoiceTotals, LineItem, LineItemField, LineItemInput, ListInvoicesFilter, PatientRef,
    TaxType,
};
pub use pricing::{compute_totals, recompute_line_amount};
pub use validation::{validate_invoice_draft, ValidationError};
