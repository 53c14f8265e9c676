//! Invoice submission counters, exported through the process-wide
//! `metrics` recorder.

use metrics::counter;

pub const INVOICES_SUBMITTED_TOTAL: &str = "invoices_submitted_total";
pub const INVOICE_VALIDATION_FAILURES_TOTAL: &str = "invoice_validation_failures_total";
pub const INVOICE_STORE_ERRORS_TOTAL: &str = "invoice_store_errors_total";

pub fn record_submitted(care_center: &str) {
    counter!(INVOICES_SUBMITTED_TOTAL, "care_center" => care_center.to_string()).increment(1);
}

pub fn record_validation_failure(code: &'static str) {
    counter!(INVOICE_VALIDATION_FAILURES_TOTAL, "code" => code).increment(1);
}

pub fn record_store_error(operation: &'static str) {
    counter!(INVOICE_STORE_ERRORS_TOTAL, "operation" => operation).increment(1);
}
