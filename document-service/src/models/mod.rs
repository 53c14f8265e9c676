mod branding;
mod discharge;

pub use branding::Branding;
pub use discharge::{format_amount, ChargeTotals, DischargeSummaryInput, RenderedDocument};
