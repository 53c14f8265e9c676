use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only view over a line-item sequence. Holds no state of its own;
/// recompute with [`crate::pricing::compute_totals`] on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Σ price × quantity.
    pub cost: Decimal,
    /// Σ line discounts.
    pub discount: Decimal,
    /// Σ tax amounts of taxable lines (inclusive and exclusive).
    pub tax: Decimal,
    pub bulk_discount: Decimal,
    /// Difference between `rounded` and the unrounded net.
    pub round_off: Decimal,
    pub rounded: Decimal,
    pub final_amount: Decimal,
}
