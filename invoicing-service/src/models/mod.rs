//! Domain models for invoicing-service.

mod catalog;
mod invoice;
mod line_item;
mod totals;

pub use catalog::{CatalogItem, CatalogKind};
pub use invoice::{
    CreateInvoiceRequest, InvoiceDraft, InvoicePage, InvoiceSummary, ListInvoicesFilter,
    PatientRef,
};
pub use line_item::{LineItem, LineItemField, LineItemInput, TaxType};
pub use totals::InvoiceTotals;
