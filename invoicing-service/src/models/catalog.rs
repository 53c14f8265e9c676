use super::{LineItem, TaxType};
use crate::pricing;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Catalog sections offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Services,
    Packages,
    Products,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Services => "services",
            CatalogKind::Packages => "packages",
            CatalogKind::Products => "products",
        }
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "services" => Ok(CatalogKind::Services),
            "packages" => Ok(CatalogKind::Packages),
            "products" => Ok(CatalogKind::Products),
            _ => Err(format!("Unknown catalog kind: {}", s)),
        }
    }
}

/// A billable service, package or product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub tax_type: TaxType,
    #[serde(default)]
    pub tax_amount: Decimal,
}

impl LineItem {
    /// A single unit of `item`, undiscounted, priced at catalog rate.
    pub fn from_catalog(item: &CatalogItem, perform_date: NaiveDate) -> LineItem {
        let line = LineItem {
            service_name: item.name.clone(),
            provider: item.provider.clone(),
            perform_date,
            price: item.price.max(Decimal::ZERO),
            quantity: 1,
            discount: Decimal::ZERO,
            tax_type: item.tax_type,
            tax_amount: item.tax_amount.max(Decimal::ZERO),
            amount: Decimal::ZERO,
        };
        pricing::recompute(&line)
    }
}
