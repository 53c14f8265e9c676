//! Shared fixtures for invoicing-service tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use invoicing_service::{InvoiceDraft, LineItem, LineItemInput, PatientRef, TaxType};
use invoicing_service::recompute_line_amount;

pub const TEST_PATIENT_ID: &str = "PAT-0001";
pub const TEST_CARE_CENTER: &str = "Coimbatore";

pub fn perform_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

pub fn test_patient() -> PatientRef {
    PatientRef {
        patient_id: TEST_PATIENT_ID.to_string(),
        name: "Lakshmi Narayanan".to_string(),
        member_id: Some("CBE123".to_string()),
    }
}

/// Raw form input with the given numeric text.
pub fn input(price: &str, quantity: &str, discount: &str, tax_type: TaxType, tax: &str) -> LineItemInput {
    LineItemInput {
        service_name: "Physiotherapy".to_string(),
        provider: Some("Dr. Meena".to_string()),
        perform_date: perform_date(),
        price: price.to_string(),
        quantity: quantity.to_string(),
        discount: discount.to_string(),
        tax_type,
        tax_amount: tax.to_string(),
    }
}

pub fn item(price: &str, quantity: &str, discount: &str, tax_type: TaxType, tax: &str) -> LineItem {
    recompute_line_amount(&input(price, quantity, discount, tax_type, tax))
}

/// A draft that passes validation.
pub fn valid_draft() -> InvoiceDraft {
    let mut draft = InvoiceDraft::new(test_patient());
    draft.visit_id = "VIS-42".to_string();
    draft.care_center = TEST_CARE_CENTER.to_string();
    draft.add_item(&input("500", "2", "50", TaxType::ExclusiveOfTax, "90"));
    draft
}
