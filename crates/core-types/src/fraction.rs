use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal value guaranteed to lie in the closed interval [0, 1].
///
/// ESG sub-scores, the composite ESG score and holding weights are all fractions.
/// The only way to obtain one is through `Fraction::new` (or deserialization, which
/// goes through the same check), so consumers can rely on the bound without
/// re-validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Fraction(Decimal);

impl Fraction {
    pub const ZERO: Fraction = Fraction(Decimal::ZERO);
    pub const ONE: Fraction = Fraction(Decimal::ONE);

    /// Validates `value` against [0, 1]. `field` names the offending input in the error.
    pub fn new(field: &str, value: Decimal) -> Result<Self, CoreError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(CoreError::OutOfRangeEsgInput {
                field: field.to_string(),
                value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Fraction {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Fraction::new("fraction", value)
    }
}

impl From<Fraction> for Decimal {
    fn from(fraction: Fraction) -> Self {
        fraction.0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
