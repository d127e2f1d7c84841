//! Money helpers using rust_decimal for precision
//!
//! Totals are carried as exact `Decimal` values and only rounded at the
//! display/charge boundary (2 decimal places, half-up).

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to currency precision.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a monetary value to integer minor units (cents).
///
/// Rounds to currency precision first, so `28.815` charges as `2882`.
#[inline]
pub fn to_minor_units(value: Decimal) -> i64 {
    (round_money(value) * Decimal::ONE_HUNDRED)
        .to_i64()
        .unwrap_or_default()
}

/// Convert f64 to Decimal; non-finite or out-of-range values become 0.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}
