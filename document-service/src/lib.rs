//! Discharge-summary PDF generation for the elder-care CRM.
//!
//! [`DischargeSummaryGenerator`] turns three free-form records into a
//! single-page A4 PDF and stores it through a [`services::Storage`].

pub mod error;
pub mod logo;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod services;

pub use error::DocumentError;
pub use logo::{FileLogoSource, LogoImage, LogoSource};
pub use models::{Branding, ChargeTotals, DischargeSummaryInput, RenderedDocument};
pub use normalize::{find_val, normalize_key, FieldIndex};
pub use pipeline::{DischargeSummaryGenerator, StoredDocument};
pub use services::{LocalStorage, Storage};
