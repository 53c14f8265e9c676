//! Pricing engine over HTTP. Stateless; the UI calls these after every edit.

use crate::models::TotalsRequest;
use axum::Json;
use invoicing_service::pricing::recompute;
use invoicing_service::{compute_totals, recompute_line_amount, InvoiceTotals, LineItem, LineItemInput};
use rust_decimal::Decimal;

pub async fn price_line_item(Json(input): Json<LineItemInput>) -> Json<LineItem> {
    Json(recompute_line_amount(&input))
}

pub async fn invoice_totals(Json(request): Json<TotalsRequest>) -> Json<InvoiceTotals> {
    let items: Vec<LineItem> = request.items.iter().map(recompute).collect();
    Json(compute_totals(&items, request.bulk_discount.max(Decimal::ZERO)))
}
