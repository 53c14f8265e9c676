//! Inputs and outputs of the discharge-summary pipeline.

use crate::error::DocumentError;
use crate::normalize::FieldIndex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// The three caller-supplied records. Keys are free-form; fields are read
/// through [`FieldIndex`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DischargeSummaryInput {
    pub patient_data: Map<String, Value>,
    #[serde(default)]
    pub billing_data: Map<String, Value>,
    #[serde(default)]
    pub totals: Map<String, Value>,
}

/// Pre-computed charge buckets. `grand` is supplied by the caller, never
/// summed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeTotals {
    pub room: Decimal,
    pub bed: Decimal,
    pub nurse: Decimal,
    pub hospital: Decimal,
    pub doctor: Decimal,
    pub service: Decimal,
    pub grand: Decimal,
}

impl ChargeTotals {
    /// Every bucket must be a JSON number or a numeric string.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self, DocumentError> {
        let index = FieldIndex::from_record(record);
        let bucket = |name: &'static str, aliases: &[&str]| {
            index
                .get(aliases)
                .and_then(parse_amount)
                .ok_or(DocumentError::MalformedTotal { bucket: name })
        };

        Ok(Self {
            room: bucket("room", &["room", "roomcharges", "roomtotal"])?,
            bed: bucket("bed", &["bed", "bedcharges", "bedtotal"])?,
            nurse: bucket("nurse", &["nurse", "nursecharges", "nursing", "nursetotal"])?,
            hospital: bucket("hospital", &["hospital", "hospitalcharges", "hospitaltotal"])?,
            doctor: bucket("doctor", &["doctor", "doctorcharges", "doctortotal"])?,
            service: bucket("service", &["service", "servicecharges", "servicetotal"])?,
            grand: bucket("grand", &["grand", "grandtotal", "total"])?,
        })
    }

    /// Billing table rows, grand total last.
    pub fn rows(&self) -> [(&'static str, Decimal); 7] {
        [
            ("Room Charges", self.room),
            ("Bed Charges", self.bed),
            ("Nursing Charges", self.nurse),
            ("Hospital Charges", self.hospital),
            ("Doctor Charges", self.doctor),
            ("Service Charges", self.service),
            ("Grand Total", self.grand),
        ]
    }
}

fn parse_amount(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().replace(',', ""),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// `Rs. 12,345.00`: two decimals, thousands grouped in threes.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}Rs. {}.{}", sign, grouped, fraction)
}

/// A finished PDF, not yet persisted.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    /// `Discharge_Summary_<memberId>.pdf`, with path separators in the id
    /// replaced so the name stays a single path component.
    pub fn file_name_for(member_id: &str) -> String {
        let safe: String = member_id
            .trim()
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        format!("Discharge_Summary_{}.pdf", safe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn totals(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let record = totals(json!({
            "room": 12000, "bed": "3,500", "Nurse": 4200.5, "hospital": "0",
            "doctor": 1500, "service": "250.75", "Grand Total": "21451.25"
        }));
        let parsed = ChargeTotals::from_record(&record).unwrap();
        assert_eq!(parsed.bed, dec!(3500));
        assert_eq!(parsed.nurse, dec!(4200.5));
        assert_eq!(parsed.grand, dec!(21451.25));
    }

    #[test]
    fn non_numeric_bucket_is_malformed() {
        let record = totals(json!({
            "room": 1, "bed": 1, "nurse": "lots", "hospital": 1,
            "doctor": 1, "service": 1, "grand": 5
        }));
        match ChargeTotals::from_record(&record) {
            Err(DocumentError::MalformedTotal { bucket }) => assert_eq!(bucket, "nurse"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn formats_indian_rupees() {
        assert_eq!(format_amount(dec!(0)), "Rs. 0.00");
        assert_eq!(format_amount(dec!(950)), "Rs. 950.00");
        assert_eq!(format_amount(dec!(12345.5)), "Rs. 12,345.50");
        assert_eq!(format_amount(dec!(1234567.005)), "Rs. 1,234,567.01");
        assert_eq!(format_amount(dec!(-1000)), "-Rs. 1,000.00");
    }

    #[test]
    fn file_name_is_a_single_component() {
        assert_eq!(
            RenderedDocument::file_name_for("CBE123"),
            "Discharge_Summary_CBE123.pdf"
        );
        assert_eq!(
            RenderedDocument::file_name_for("CBE/12\\3"),
            "Discharge_Summary_CBE_12_3.pdf"
        );
    }
}
