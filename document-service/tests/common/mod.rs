//! Shared fixtures for document-service tests.

#![allow(dead_code)]

use document_service::{
    Branding, DischargeSummaryGenerator, DischargeSummaryInput, FileLogoSource, LocalStorage,
};
use lopdf::content::Content;
use lopdf::{Document, Object};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestGenerator {
    pub generator: DischargeSummaryGenerator,
    pub storage_dir: PathBuf,
    // Dropped last; owns every path above.
    _dir: TempDir,
}

impl TestGenerator {
    /// Generator whose logo path does not exist.
    pub async fn without_logo() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("missing-logo.png");
        Self::build(dir, logo).await
    }

    /// Generator with a small PNG logo on disk.
    pub async fn with_logo() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        image::RgbImage::from_pixel(8, 8, image::Rgb([20, 80, 115]))
            .save(&logo)
            .unwrap();
        Self::build(dir, logo).await
    }

    async fn build(dir: TempDir, logo: PathBuf) -> Self {
        let storage_dir = dir.path().join("summaries");
        let storage = LocalStorage::new(&storage_dir).await.unwrap();
        let branding = Branding {
            logo_path: logo.clone(),
            ..Branding::default()
        };
        let generator = DischargeSummaryGenerator::new(
            branding,
            Arc::new(FileLogoSource::new(logo)),
            Arc::new(storage),
        );
        Self {
            generator,
            storage_dir,
            _dir: dir,
        }
    }

    pub fn stored_files(&self) -> Vec<String> {
        std::fs::read_dir(&self.storage_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be a JSON object"),
    }
}

pub fn sample_input() -> DischargeSummaryInput {
    DischargeSummaryInput {
        patient_data: object(json!({
            "Patient Name": "Kamala Devi",
            "Member ID Key": "CBE123",
            "Age": 84,
            "gender": "Female",
            "Admission_Date": "2024-02-10",
            "dischargeDate": "2024-03-01",
            "Care Center": "Coimbatore",
            "Diagnosis": "Post-operative recovery following hip replacement"
        })),
        billing_data: object(json!({ "Days": 20 })),
        totals: object(json!({
            "room": 12000,
            "bed": "3,500",
            "nurse": 4200.5,
            "hospital": 0,
            "doctor": 1500,
            "service": "250.75",
            "grand": "21451.25"
        })),
    }
}

/// Decoded content of the first page.
pub struct PdfPage {
    pub doc: Document,
    pub content: Content,
}

impl PdfPage {
    pub fn parse(bytes: &[u8]) -> Self {
        let doc = Document::load_mem(bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1, "summary must be a single page");
        let page_id = *pages.values().next().unwrap();
        let raw = doc.get_page_content(page_id).unwrap();
        let content = Content::decode(&raw).unwrap();
        Self { doc, content }
    }

    /// Every string shown with `Tj`, in drawing order.
    pub fn texts(&self) -> Vec<String> {
        self.content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => {
                    Some(bytes.iter().map(|b| char::from(*b)).collect())
                }
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    pub fn count_operator(&self, operator: &str) -> usize {
        self.content
            .operations
            .iter()
            .filter(|op| op.operator == operator)
            .count()
    }
}

pub fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap()
}
