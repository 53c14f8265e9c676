//! Request bodies specific to the HTTP surface.

use invoicing_service::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsRequest {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub bulk_discount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddOptionRequest {
    #[validate(length(max = 120, message = "Option values are limited to 120 characters"))]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientSearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub category: String,
    pub values: Vec<String>,
}
