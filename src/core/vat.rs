//! PVM (VAT) add and extract.

use super::amount::coerce_amount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

pub const STANDARD_RATE: Decimal = dec!(21);
pub const REDUCED_RATE: Decimal = dec!(9);
pub const SUPER_REDUCED_RATE: Decimal = dec!(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VatBreakdown {
    pub base: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
    /// Rate in percent, as supplied.
    pub rate: Decimal,
}

/// VAT on top of a net `base`.
pub fn add_vat(base: Decimal, rate_percent: Decimal) -> VatBreakdown {
    let base = coerce_amount(base);
    let rate = coerce_amount(rate_percent);
    let vat = base * (rate / dec!(100));
    VatBreakdown { base, vat, total: base + vat, rate }
}

/// VAT contained in a gross `total`.
pub fn extract_vat(total: Decimal, rate_percent: Decimal) -> VatBreakdown {
    let total = coerce_amount(total);
    let rate = coerce_amount(rate_percent);
    let base = total / (Decimal::ONE + rate / dec!(100));
    VatBreakdown { base, vat: total - base, total, rate }
}
