//! Discharge-summary assembly.
//!
//! Stages run in a fixed order on one A4 page: watermark, header, title,
//! field extraction, the three section tables, footer. Only the logo may
//! fail softly; every other failure aborts the call and nothing is stored.

use crate::error::DocumentError;
use crate::logo::LogoSource;
use crate::models::{format_amount, Branding, ChargeTotals, DischargeSummaryInput, RenderedDocument};
use crate::normalize::FieldIndex;
use crate::render::{draw_table, Color, Font, PdfCanvas, Table, TableRow, MM};
use crate::services::metrics::{record_failure, record_generated, record_logo_fallback};
use crate::services::Storage;
use std::sync::Arc;
use tracing::{info, instrument, warn};

const MARGIN: f32 = 40.0;
const LOGO_SIZE: f32 = 56.0;
const HEADER_TOP: f32 = 30.0;
const TITLE_Y: f32 = 125.0;
const FIRST_TABLE_TOP: f32 = 150.0;
const SECTION_GUTTER: f32 = 22.0;
const SECTION_HEADING_GAP: f32 = 8.0;
const FOOTER_OFFSET: f32 = 20.0 * MM;

const BRAND: Color = (0.11, 0.31, 0.45);
const MUTED: Color = (0.40, 0.40, 0.40);
const WATERMARK_ALPHA: f32 = 0.08;

/// (label, aliases) for each patient field, in display order.
const PATIENT_FIELDS: &[(&str, &[&str])] = &[
    ("Patient Name", &["patientname", "name", "fullname"]),
    ("Member ID", &["memberidkey", "memberid", "membershipid"]),
    ("Age", &["age"]),
    ("Gender", &["gender", "sex"]),
    ("Contact Number", &["contactnumber", "contactno", "phone", "mobile"]),
    ("Emergency Contact", &["emergencycontact", "emergencycontactname", "guardianname"]),
    ("Address", &["address", "residentialaddress"]),
];

const ADMISSION_FIELDS: &[(&str, &[&str])] = &[
    ("Admission Date", &["admissiondate", "dateofadmission", "admittedon"]),
    ("Discharge Date", &["dischargedate", "dateofdischarge"]),
    ("Care Center", &["carecenter", "center", "branch"]),
    ("Room Type", &["roomtype", "room"]),
    ("Bed Number", &["bednumber", "bedno", "bed"]),
    ("Attending Doctor", &["doctorname", "attendingdoctor", "doctor", "consultant"]),
    ("Diagnosis", &["diagnosis", "condition", "medicalcondition"]),
    ("Care Plan", &["careplan", "caretype", "servicetype"]),
];

const MEMBER_ID_ALIASES: &[&str] = &["memberidkey", "memberid", "membershipid"];

pub struct DischargeSummaryGenerator {
    branding: Branding,
    logo: Arc<dyn LogoSource>,
    storage: Arc<dyn Storage>,
}

/// Result of [`DischargeSummaryGenerator::generate`].
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub document: RenderedDocument,
    pub location: String,
}

impl DischargeSummaryGenerator {
    pub fn new(branding: Branding, logo: Arc<dyn LogoSource>, storage: Arc<dyn Storage>) -> Self {
        Self {
            branding,
            logo,
            storage,
        }
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Render and persist. Nothing is written if rendering fails.
    #[instrument(skip_all)]
    pub async fn generate(
        &self,
        input: &DischargeSummaryInput,
    ) -> Result<StoredDocument, DocumentError> {
        let document = self.render(input).await?;
        let location = self
            .storage
            .upload(&document.file_name, document.bytes.clone())
            .await
            .inspect_err(|e| record_failure(e.code()))?;

        record_generated();
        info!(
            file_name = %document.file_name,
            bytes = document.bytes.len(),
            location = %location,
            "Discharge summary stored"
        );

        Ok(StoredDocument { document, location })
    }

    /// A previously stored summary.
    pub async fn stored(&self, file_name: &str) -> Result<Vec<u8>, DocumentError> {
        self.storage.download(file_name).await
    }

    /// Run every stage except persistence.
    #[instrument(skip_all)]
    pub async fn render(
        &self,
        input: &DischargeSummaryInput,
    ) -> Result<RenderedDocument, DocumentError> {
        self.render_inner(input)
            .await
            .inspect_err(|e| record_failure(e.code()))
    }

    async fn render_inner(
        &self,
        input: &DischargeSummaryInput,
    ) -> Result<RenderedDocument, DocumentError> {
        let mut canvas = PdfCanvas::a4();

        self.draw_watermark(&mut canvas);
        self.draw_header(&mut canvas).await;

        canvas.set_fill_color(BRAND);
        canvas.text_centered(Font::Bold, 16.0, TITLE_Y, "DISCHARGE SUMMARY");

        let patient = FieldIndex::from_record(&input.patient_data);
        let billing = FieldIndex::from_record(&input.billing_data);
        let member_id = patient.find_val(MEMBER_ID_ALIASES);

        let patient_rows = field_rows(&patient, PATIENT_FIELDS);
        let mut admission_rows = field_rows(&patient, ADMISSION_FIELDS);
        admission_rows.push(TableRow::new(vec![
            "Length of Stay (days)".to_string(),
            billing.find_val(&["days", "noofdays", "totaldays"]),
        ]));
        let charges = ChargeTotals::from_record(&input.totals)?;

        let width = canvas.width() - 2.0 * MARGIN;
        let mut y = FIRST_TABLE_TOP;
        y = draw_section(&mut canvas, "Patient Details", key_value_table(patient_rows), y, width);
        y = draw_section(
            &mut canvas,
            "Admission & Care Details",
            key_value_table(admission_rows),
            y + SECTION_GUTTER,
            width,
        );
        draw_section(
            &mut canvas,
            "Billing Summary",
            billing_table(&charges),
            y + SECTION_GUTTER,
            width,
        );

        self.draw_footer(&mut canvas);

        let bytes = canvas.finish()?;
        Ok(RenderedDocument {
            file_name: RenderedDocument::file_name_for(&member_id),
            bytes,
        })
    }

    fn draw_watermark(&self, canvas: &mut PdfCanvas) {
        let (cx, cy) = (canvas.width() / 2.0, canvas.height() / 2.0);
        let text = self.branding.watermark.clone();
        canvas.with_opacity(WATERMARK_ALPHA, |c| {
            c.set_fill_color(BRAND);
            c.text_rotated(Font::Bold, 60.0, cx, cy, 45.0, &text);
        });
    }

    async fn draw_header(&self, canvas: &mut PdfCanvas) {
        match self.logo.load().await {
            Ok(logo) => {
                canvas.image(logo, MARGIN, HEADER_TOP, LOGO_SIZE, LOGO_SIZE);
                let text_x = MARGIN + LOGO_SIZE + 12.0;
                canvas.set_fill_color(BRAND);
                canvas.text(
                    Font::Bold,
                    18.0,
                    text_x,
                    HEADER_TOP + 26.0,
                    &self.branding.organization_name,
                );
                canvas.set_fill_color(MUTED);
                canvas.text(
                    Font::Regular,
                    10.0,
                    text_x,
                    HEADER_TOP + 44.0,
                    &self.branding.tagline,
                );
            }
            Err(e) => {
                warn!(error = %e, "Logo unavailable, using text header");
                record_logo_fallback();
                canvas.set_fill_color(BRAND);
                canvas.text(
                    Font::Bold,
                    20.0,
                    MARGIN,
                    HEADER_TOP + 30.0,
                    &self.branding.organization_name,
                );
            }
        }

        canvas.set_stroke_color(BRAND);
        canvas.set_line_width(1.0);
        let rule_y = HEADER_TOP + LOGO_SIZE + 12.0;
        canvas.line(MARGIN, rule_y, canvas.width() - MARGIN, rule_y);
    }

    fn draw_footer(&self, canvas: &mut PdfCanvas) {
        let footer_y = canvas.height() - FOOTER_OFFSET;
        let right = canvas.width() - MARGIN;

        canvas.set_fill_color(MUTED);
        let disclaimer_width = canvas.width() / 2.0;
        let lines = crate::render::wrap_text(
            &self.branding.disclaimer,
            Font::Regular,
            8.0,
            disclaimer_width,
        );
        for (n, line) in lines.iter().enumerate() {
            canvas.text(Font::Regular, 8.0, MARGIN, footer_y + n as f32 * 10.0, line);
        }

        canvas.set_stroke_color(MUTED);
        canvas.set_line_width(0.75);
        canvas.line(right - 150.0, footer_y - 14.0, right, footer_y - 14.0);
        canvas.text_right(Font::Regular, 9.0, right, footer_y, &self.branding.signature_label);
    }
}

fn field_rows(index: &FieldIndex<'_>, fields: &[(&str, &[&str])]) -> Vec<TableRow> {
    fields
        .iter()
        .map(|(label, aliases)| TableRow::new(vec![label.to_string(), index.find_val(aliases)]))
        .collect()
}

fn key_value_table(rows: Vec<TableRow>) -> Table {
    Table {
        headers: vec!["Field".to_string(), "Details".to_string()],
        column_weights: vec![1.0, 2.0],
        rows,
        header_fill: BRAND,
    }
}

fn billing_table(charges: &ChargeTotals) -> Table {
    let rows = charges.rows();
    let last = rows.len() - 1;
    let rows = rows
        .iter()
        .enumerate()
        .map(|(i, (label, amount))| {
            let cells = vec![label.to_string(), format_amount(*amount)];
            if i == last {
                TableRow::emphasized(cells)
            } else {
                TableRow::new(cells)
            }
        })
        .collect();

    Table {
        headers: vec!["Description".to_string(), "Amount".to_string()],
        column_weights: vec![2.0, 1.0],
        rows,
        header_fill: BRAND,
    }
}

/// Heading plus table; returns the y below the table.
fn draw_section(canvas: &mut PdfCanvas, heading: &str, table: Table, top: f32, width: f32) -> f32 {
    canvas.set_fill_color(BRAND);
    canvas.text(Font::Bold, 12.0, MARGIN, top, heading);
    draw_table(canvas, &table, MARGIN, top + SECTION_HEADING_GAP, width)
}
