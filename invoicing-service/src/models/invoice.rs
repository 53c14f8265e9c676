//! Invoice model for invoicing-service.

use super::{InvoiceTotals, LineItem};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The patient an invoice is raised against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRef {
    #[serde(alias = "id")]
    pub patient_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub member_id: Option<String>,
}

/// In-memory invoice being edited. Discarded on navigation away or after a
/// successful submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    #[serde(default)]
    pub patient: Option<PatientRef>,
    #[serde(default)]
    pub visit_id: String,
    #[serde(default)]
    pub care_center: String,
    #[serde(default)]
    pub corporate_customer: bool,
    #[serde(default)]
    pub bulk_discount: Decimal,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Payload for `POST /api/invoices` on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    pub patient_id: String,
    pub patient_name: String,
    pub visit_id: String,
    pub care_center: String,
    pub corporate_customer: bool,
    pub bulk_discount: Decimal,
    pub items: Vec<LineItem>,
    pub totals: InvoiceTotals,
}

/// Invoice as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub care_center: String,
    #[serde(default)]
    pub final_amount: Decimal,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Client-side filter over the (small) invoice list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInvoicesFilter {
    #[serde(default, alias = "q")]
    pub query: Option<String>,
    /// 1-based.
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

impl Default for ListInvoicesFilter {
    fn default() -> Self {
        Self {
            query: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// One page of filtered invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePage {
    pub items: Vec<InvoiceSummary>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl InvoiceSummary {
    fn matches(&self, needle: &str) -> bool {
        let haystacks = [
            Some(self.id.as_str()),
            self.invoice_number.as_deref(),
            Some(self.patient_name.as_str()),
            self.member_id.as_deref(),
        ];
        haystacks
            .into_iter()
            .flatten()
            .any(|h| h.to_lowercase().contains(needle))
    }
}

impl ListInvoicesFilter {
    /// Filter by case-insensitive substring on id, number, patient name or
    /// member id, then slice out the requested page. Out-of-range pages are
    /// clamped to the last page.
    pub fn apply(&self, invoices: Vec<InvoiceSummary>) -> InvoicePage {
        let needle = self
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let matching: Vec<InvoiceSummary> = match needle {
            Some(needle) => invoices.into_iter().filter(|i| i.matches(&needle)).collect(),
            None => invoices,
        };

        let page_size = self.page_size.max(1);
        let total_items = matching.len();
        let total_pages = total_items.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, total_pages);

        let items = matching
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        InvoicePage {
            items,
            page,
            total_pages,
            total_items,
        }
    }
}
