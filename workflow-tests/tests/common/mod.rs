//! Backend fixtures shared by the workflow tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use workflow_tests::WorkflowTestContext;

pub async fn setup() -> WorkflowTestContext {
    WorkflowTestContext::new()
        .await
        .expect("Failed to start care-frontend")
}

pub fn patient_json() -> Value {
    json!({ "id": "PAT-7", "name": "Rajan Pillai", "member_id": "CBE/77" })
}

pub fn catalog_json() -> Value {
    json!([
        {
            "id": "SRV-1",
            "name": "Home Nursing Visit",
            "price": "750",
            "provider": "Nurse Latha",
            "tax_type": "exclusive",
            "tax_amount": "135"
        },
        {
            "id": "SRV-2",
            "name": "Physiotherapy",
            "price": "600",
            "tax_type": "non_taxable"
        }
    ])
}
