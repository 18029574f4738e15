//! Shared arithmetic and rounding helpers for the calculators.

use crate::error::AnalyticsError;
use configuration::MAX_PRECISION;
use rust_decimal::{Decimal, RoundingStrategy};

/// Turns the `None` of a checked `Decimal` operation into an `Overflow` error naming the quantity.
pub(crate) fn checked(value: Option<Decimal>, quantity: &str) -> Result<Decimal, AnalyticsError> {
    value.ok_or_else(|| AnalyticsError::Overflow(quantity.to_string()))
}

/// Divides `numerator` by `denominator`, rejecting a zero denominator up front.
pub(crate) fn checked_ratio(
    numerator: Decimal,
    denominator: Decimal,
    denominator_name: &str,
) -> Result<Decimal, AnalyticsError> {
    if denominator.is_zero() {
        return Err(AnalyticsError::InvalidDivisor(denominator_name.to_string()));
    }
    checked(numerator.checked_div(denominator), denominator_name)
}

pub fn ensure_precision(precision: u32) -> Result<u32, AnalyticsError> {
    if precision > MAX_PRECISION {
        return Err(AnalyticsError::InvalidPrecision(precision));
    }
    Ok(precision)
}

/// Rounds half away from zero to `precision` fractional digits.
pub fn round_half_up(value: Decimal, precision: u32) -> Result<Decimal, AnalyticsError> {
    let precision = ensure_precision(precision)?;
    Ok(value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero))
}
