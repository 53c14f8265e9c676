//! Pre-submission checks for invoice drafts.

use crate::models::InvoiceDraft;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No patient is attached to the invoice")]
    MissingPatient,

    #[error("Required field `{0}` is empty")]
    MissingRequiredField(&'static str),

    #[error("Invoice has no line items")]
    NoLineItems,
}

impl ValidationError {
    /// Stable identifier returned to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingPatient => "missing_patient",
            ValidationError::MissingRequiredField(_) => "missing_required_field",
            ValidationError::NoLineItems => "no_line_items",
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Unprocessable {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Checks run in a fixed order; the first failure is returned.
///
/// 1. a patient with a non-blank id is attached
/// 2. `visit_id`, then `care_center`, are non-blank
/// 3. there is at least one line item
/// 4. every line item has a service name
pub fn validate_invoice_draft(draft: &InvoiceDraft) -> Result<(), ValidationError> {
    match &draft.patient {
        Some(patient) if !patient.patient_id.trim().is_empty() => {}
        _ => return Err(ValidationError::MissingPatient),
    }

    if draft.visit_id.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("visit_id"));
    }
    if draft.care_center.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("care_center"));
    }

    if draft.items.is_empty() {
        return Err(ValidationError::NoLineItems);
    }

    if draft
        .items
        .iter()
        .any(|item| item.service_name.trim().is_empty())
    {
        return Err(ValidationError::MissingRequiredField("service_name"));
    }

    Ok(())
}
