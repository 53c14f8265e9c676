//! Editing operations on an [`InvoiceDraft`].
//!
//! Every mutation that touches a line re-derives that line's amount before
//! returning, so the draft never holds a stale `amount`.

use crate::models::{
    CatalogItem, InvoiceDraft, InvoiceTotals, LineItem, LineItemField, LineItemInput, PatientRef,
    TaxType,
};
use crate::pricing::{self, compute_totals, recompute_line_amount};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Line item {index} does not exist (draft has {len} items)")]
    ItemNotFound { index: usize, len: usize },

    #[error("Invalid perform date: {0}")]
    InvalidDate(String),
}

impl InvoiceDraft {
    /// Empty draft for the selected patient.
    pub fn new(patient: PatientRef) -> Self {
        Self {
            patient: Some(patient),
            ..Default::default()
        }
    }

    pub fn add_item(&mut self, input: &LineItemInput) -> &LineItem {
        self.items.push(recompute_line_amount(input));
        &self.items[self.items.len() - 1]
    }

    pub fn add_catalog_item(&mut self, item: &CatalogItem, perform_date: NaiveDate) -> &LineItem {
        self.items.push(LineItem::from_catalog(item, perform_date));
        &self.items[self.items.len() - 1]
    }

    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, DraftError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Apply one raw field edit and re-derive the line's amount.
    pub fn update_item_field(
        &mut self,
        index: usize,
        field: LineItemField,
        value: &str,
    ) -> Result<&LineItem, DraftError> {
        self.check_index(index)?;

        let mut input = self.items[index].to_input();
        match field {
            LineItemField::ServiceName => input.service_name = value.to_string(),
            LineItemField::Provider => input.provider = Some(value.to_string()),
            LineItemField::PerformDate => {
                input.perform_date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .map_err(|_| DraftError::InvalidDate(value.to_string()))?;
            }
            LineItemField::Price => input.price = value.to_string(),
            LineItemField::Quantity => input.quantity = value.to_string(),
            LineItemField::Discount => input.discount = value.to_string(),
            LineItemField::TaxType => input.tax_type = TaxType::from_string(value),
            LineItemField::TaxAmount => input.tax_amount = value.to_string(),
        }

        self.items[index] = recompute_line_amount(&input);
        Ok(&self.items[index])
    }

    /// Coerced like any money field, so never negative.
    pub fn set_bulk_discount(&mut self, raw: &str) {
        self.bulk_discount = pricing::parse_money(raw);
    }

    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.items, self.bulk_discount)
    }

    fn check_index(&self, index: usize) -> Result<(), DraftError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(DraftError::ItemNotFound {
                index,
                len: self.items.len(),
            })
        }
    }
}
