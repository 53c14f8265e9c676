//! Line amount and invoice total computation.
//!
//! Everything here is pure: no I/O, no clocks, no shared state. Invalid
//! numeric input never errors; it is coerced (money to 0, quantity to 1).

use crate::models::{InvoiceTotals, LineItem, LineItemInput, TaxType};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a money field. Unparsable or negative input becomes 0.
pub fn parse_money(raw: &str) -> Decimal {
    parse_decimal(raw)
        .filter(|value| value.is_sign_positive())
        .unwrap_or(Decimal::ZERO)
}

/// Parse a quantity field. Fractions are truncated; anything that does not
/// yield a whole number ≥ 1 becomes 1.
pub fn parse_quantity(raw: &str) -> u32 {
    parse_decimal(raw)
        .and_then(|value| value.trunc().to_u32())
        .filter(|quantity| *quantity >= 1)
        .unwrap_or(1)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// `price × quantity − discount`, plus `tax_amount` only for tax-exclusive
/// lines. Inclusive tax is already inside `price`.
pub fn line_amount(
    price: Decimal,
    quantity: u32,
    discount: Decimal,
    tax_type: TaxType,
    tax_amount: Decimal,
) -> Decimal {
    let gross = price.saturating_mul(Decimal::from(quantity));
    let net = gross.saturating_sub(discount);
    match tax_type {
        TaxType::ExclusiveOfTax => net.saturating_add(tax_amount),
        TaxType::InclusiveOfTax | TaxType::NonTaxable => net,
    }
}

/// Coerce the raw form fields and derive `amount`.
pub fn recompute_line_amount(input: &LineItemInput) -> LineItem {
    let price = parse_money(&input.price);
    let quantity = parse_quantity(&input.quantity);
    let discount = parse_money(&input.discount);
    let tax_amount = parse_money(&input.tax_amount);

    LineItem {
        service_name: input.service_name.trim().to_string(),
        provider: input
            .provider
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        perform_date: input.perform_date,
        price,
        quantity,
        discount,
        tax_type: input.tax_type,
        tax_amount,
        amount: line_amount(price, quantity, discount, input.tax_type, tax_amount),
    }
}

/// Re-derive `amount` on an already typed item, clamping fields back into
/// their domains first.
pub fn recompute(item: &LineItem) -> LineItem {
    let price = item.price.max(Decimal::ZERO);
    let quantity = item.quantity.max(1);
    let discount = item.discount.max(Decimal::ZERO);
    let tax_amount = item.tax_amount.max(Decimal::ZERO);

    LineItem {
        price,
        quantity,
        discount,
        tax_amount,
        amount: line_amount(price, quantity, discount, item.tax_type, tax_amount),
        ..item.clone()
    }
}

/// Aggregate `items` into invoice totals.
///
/// Sums stay unrounded; the net is rounded once, half away from zero, to a
/// whole currency unit. `bulk_discount` is taken as given; callers clamp it.
pub fn compute_totals(items: &[LineItem], bulk_discount: Decimal) -> InvoiceTotals {
    let mut cost = Decimal::ZERO;
    let mut discount = Decimal::ZERO;
    let mut reported_tax = Decimal::ZERO;
    let mut added_tax = Decimal::ZERO;

    for item in items {
        cost = cost.saturating_add(item.price.saturating_mul(Decimal::from(item.quantity)));
        discount = discount.saturating_add(item.discount);
        match item.tax_type {
            TaxType::ExclusiveOfTax => {
                reported_tax = reported_tax.saturating_add(item.tax_amount);
                added_tax = added_tax.saturating_add(item.tax_amount);
            }
            TaxType::InclusiveOfTax => {
                reported_tax = reported_tax.saturating_add(item.tax_amount);
            }
            TaxType::NonTaxable => {}
        }
    }

    let net = cost
        .saturating_sub(discount)
        .saturating_add(added_tax)
        .saturating_sub(bulk_discount);
    let rounded = net.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    InvoiceTotals {
        cost,
        discount,
        tax: reported_tax,
        bulk_discount,
        round_off: rounded - net,
        rounded,
        final_amount: rounded,
    }
}
