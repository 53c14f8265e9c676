use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Organisation identity printed on every summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub organization_name: String,
    pub tagline: String,
    /// Drawn diagonally behind the page content.
    pub watermark: String,
    pub logo_path: PathBuf,
    pub disclaimer: String,
    pub signature_label: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            organization_name: "Serene Elder Care".to_string(),
            tagline: "Compassionate care in every season of life".to_string(),
            watermark: "SERENE ELDER CARE".to_string(),
            logo_path: PathBuf::from("assets/logo.png"),
            disclaimer: "This summary is generated from care records on file. Please retain it for future reference.".to_string(),
            signature_label: "Authorised Signatory".to_string(),
        }
    }
}
