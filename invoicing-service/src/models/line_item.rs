//! Line item model for invoicing-service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// How a line's `tax_amount` relates to its price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxType {
    /// Tax already folded into the price; `tax_amount` is informational.
    #[serde(rename = "inclusive")]
    InclusiveOfTax,
    /// Tax charged on top of the price.
    #[serde(rename = "exclusive")]
    ExclusiveOfTax,
    /// Exempt; `tax_amount` is ignored.
    #[default]
    #[serde(rename = "non_taxable")]
    NonTaxable,
}

impl TaxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxType::InclusiveOfTax => "inclusive",
            TaxType::ExclusiveOfTax => "exclusive",
            TaxType::NonTaxable => "non_taxable",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "inclusive" | "inclusive_of_tax" | "inclusive of tax" => TaxType::InclusiveOfTax,
            "exclusive" | "exclusive_of_tax" | "exclusive of tax" => TaxType::ExclusiveOfTax,
            _ => TaxType::NonTaxable,
        }
    }
}

/// One priced entry on an invoice. `amount` is always derived; see
/// [`crate::pricing::recompute_line_amount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub service_name: String,
    #[serde(default)]
    pub provider: Option<String>,
    pub perform_date: NaiveDate,
    pub price: Decimal,
    pub quantity: u32,
    pub discount: Decimal,
    pub tax_type: TaxType,
    pub tax_amount: Decimal,
    #[serde(default)]
    pub amount: Decimal,
}

/// A line item as typed into the form: numeric fields are raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    pub service_name: String,
    #[serde(default)]
    pub provider: Option<String>,
    pub perform_date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub quantity: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub discount: String,
    #[serde(default)]
    pub tax_type: TaxType,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tax_amount: String,
}

/// Editable fields of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemField {
    ServiceName,
    Provider,
    PerformDate,
    Price,
    Quantity,
    Discount,
    TaxType,
    TaxAmount,
}

impl LineItem {
    /// Back to form representation, e.g. before applying a single-field edit.
    pub fn to_input(&self) -> LineItemInput {
        LineItemInput {
            service_name: self.service_name.clone(),
            provider: self.provider.clone(),
            perform_date: self.perform_date,
            price: self.price.to_string(),
            quantity: self.quantity.to_string(),
            discount: self.discount.to_string(),
            tax_type: self.tax_type,
            tax_amount: self.tax_amount.to_string(),
        }
    }
}

/// Accept a JSON string, number, bool or null as raw field text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
