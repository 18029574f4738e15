use crate::error::CoreError;
use crate::fraction::Fraction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five measurements needed to compute one entity's carbon liability.
///
/// No invariant is enforced here beyond the field types. A zero `total_energy_use`
/// is rejected by the calculator, which is the only place the division happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarbonInputs {
    pub total_energy_use: Decimal,
    pub total_co2_equivalents_emissions: Decimal,
    pub renewable_energy_purchased: Decimal,
    pub renewable_energy_produced: Decimal,
    pub carbon_credit_value: Decimal,
}

/// The three ESG sub-scores, each already validated to lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgInputs {
    pub environmental: Fraction,
    pub social: Fraction,
    pub governance: Fraction,
}

impl EsgInputs {
    /// Builds the inputs from raw decimals, rejecting any sub-score outside [0, 1].
    pub fn new(
        environmental: Decimal,
        social: Decimal,
        governance: Decimal,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            environmental: Fraction::new("environmental", environmental)?,
            social: Fraction::new("social", social)?,
            governance: Fraction::new("governance", governance)?,
        })
    }

    /// Sum of the three sub-scores.
    pub fn total(&self) -> Decimal {
        self.environmental.value() + self.social.value() + self.governance.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn esg_inputs_report_the_offending_field() {
        let err = EsgInputs::new(dec!(0.5), dec!(1.2), dec!(0.5)).unwrap_err();
        match err {
            CoreError::OutOfRangeEsgInput { field, value } => {
                assert_eq!(field, "social");
                assert_eq!(value, dec!(1.2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn esg_inputs_total() {
        let inputs = EsgInputs::new(dec!(0.002), dec!(0.4), dec!(0.8)).unwrap();
        assert_eq!(inputs.total(), dec!(1.202));
    }
}
