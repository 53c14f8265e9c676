//! Document pipeline counters.

use metrics::counter;

pub const DISCHARGE_SUMMARIES_GENERATED_TOTAL: &str = "discharge_summaries_generated_total";
pub const DISCHARGE_SUMMARY_FAILURES_TOTAL: &str = "discharge_summary_failures_total";
pub const LOGO_FALLBACKS_TOTAL: &str = "logo_fallbacks_total";

pub fn record_generated() {
    counter!(DISCHARGE_SUMMARIES_GENERATED_TOTAL).increment(1);
}

pub fn record_failure(code: &'static str) {
    counter!(DISCHARGE_SUMMARY_FAILURES_TOTAL, "code" => code).increment(1);
}

pub fn record_logo_fallback() {
    counter!(LOGO_FALLBACKS_TOTAL).increment(1);
}
