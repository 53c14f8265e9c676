//! Draft editing tests for invoicing-service.

mod common;

use common::{input, perform_date, test_patient};
use invoicing_service::{
    CatalogItem, DraftError, InvoiceDraft, LineItemField, TaxType,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn new_draft_is_empty_for_patient() {
    let draft = InvoiceDraft::new(test_patient());
    assert_eq!(draft.patient, Some(test_patient()));
    assert!(draft.items.is_empty());
    assert_eq!(draft.totals().final_amount, Decimal::ZERO);
}

#[test]
fn add_item_derives_amount() {
    let mut draft = InvoiceDraft::new(test_patient());
    let line = draft.add_item(&input("500", "2", "50", TaxType::ExclusiveOfTax, "90"));
    assert_eq!(line.amount, dec!(1040));
    assert_eq!(draft.items.len(), 1);
}

#[test]
fn add_catalog_item_uses_catalog_price() {
    let mut draft = InvoiceDraft::new(test_patient());
    let catalog = CatalogItem {
        id: "SRV-7".to_string(),
        name: "Home nursing visit".to_string(),
        price: dec!(1200),
        provider: Some("Care team".to_string()),
        tax_type: TaxType::ExclusiveOfTax,
        tax_amount: dec!(216),
    };

    let line = draft.add_catalog_item(&catalog, perform_date());
    assert_eq!(line.service_name, "Home nursing visit");
    assert_eq!(line.quantity, 1);
    assert_eq!(line.amount, dec!(1416));
}

#[test]
fn updating_a_field_recomputes_amount() {
    let mut draft = InvoiceDraft::new(test_patient());
    draft.add_item(&input("500", "2", "50", TaxType::ExclusiveOfTax, "90"));

    let line = draft
        .update_item_field(0, LineItemField::TaxType, "inclusive")
        .unwrap();
    assert_eq!(line.amount, dec!(950));

    let line = draft
        .update_item_field(0, LineItemField::Quantity, "3")
        .unwrap();
    assert_eq!(line.amount, dec!(1450));

    assert_eq!(draft.totals().final_amount, dec!(1450));
}

#[test]
fn updating_with_garbage_coerces() {
    let mut draft = InvoiceDraft::new(test_patient());
    draft.add_item(&input("500", "2", "0", TaxType::NonTaxable, "0"));

    let line = draft
        .update_item_field(0, LineItemField::Price, "five hundred")
        .unwrap();
    assert_eq!(line.price, Decimal::ZERO);
    assert_eq!(line.amount, Decimal::ZERO);
}

#[test]
fn perform_date_must_be_iso() {
    let mut draft = InvoiceDraft::new(test_patient());
    draft.add_item(&input("500", "1", "0", TaxType::NonTaxable, "0"));

    let err = draft
        .update_item_field(0, LineItemField::PerformDate, "01/03/2024")
        .unwrap_err();
    assert_eq!(err, DraftError::InvalidDate("01/03/2024".to_string()));

    let line = draft
        .update_item_field(0, LineItemField::PerformDate, "2024-04-15")
        .unwrap();
    assert_eq!(line.perform_date.to_string(), "2024-04-15");
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut draft = InvoiceDraft::new(test_patient());
    draft.add_item(&input("100", "1", "0", TaxType::NonTaxable, "0"));

    assert_eq!(
        draft.remove_item(3).unwrap_err(),
        DraftError::ItemNotFound { index: 3, len: 1 }
    );
    assert!(draft
        .update_item_field(1, LineItemField::Price, "10")
        .is_err());
}

#[test]
fn remove_item_keeps_order_of_the_rest() {
    let mut draft = InvoiceDraft::new(test_patient());
    draft.add_item(&input("100", "1", "0", TaxType::NonTaxable, "0"));
    draft.add_item(&input("200", "1", "0", TaxType::NonTaxable, "0"));
    draft.add_item(&input("300", "1", "0", TaxType::NonTaxable, "0"));

    let removed = draft.remove_item(1).unwrap();
    assert_eq!(removed.price, dec!(200));
    let prices: Vec<_> = draft.items.iter().map(|i| i.price).collect();
    assert_eq!(prices, vec![dec!(100), dec!(300)]);
    assert_eq!(draft.totals().final_amount, dec!(400));
}

#[test]
fn bulk_discount_is_clamped() {
    let mut draft = InvoiceDraft::new(test_patient());
    draft.add_item(&input("1000", "1", "0", TaxType::NonTaxable, "0"));

    draft.set_bulk_discount("-200");
    assert_eq!(draft.bulk_discount, Decimal::ZERO);

    draft.set_bulk_discount("150");
    assert_eq!(draft.totals().final_amount, dec!(850));
}
