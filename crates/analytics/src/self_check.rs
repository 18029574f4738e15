//! Known-answer regression vectors for the carbon calculator.
//!
//! Both vectors have integer energy figures. Their expected values (-35 and -50)
//! only hold when the purchase ratio is evaluated in whole units, which floors
//! 10/1000 and 5/100 to zero. Under `RatioMode::Exact` the first vector yields
//! -34.875 and the check fails.

use crate::carbon::CarbonScoreCalculator;
use crate::error::AnalyticsError;
use core_types::CarbonInputs;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    pub case: &'static str,
    pub inputs: CarbonInputs,
    pub expected: Decimal,
}

pub fn known_answers() -> [KnownAnswer; 2] {
    [
        KnownAnswer {
            case: "over max discount factor",
            inputs: CarbonInputs {
                total_energy_use: dec!(1000),
                total_co2_equivalents_emissions: dec!(25),
                renewable_energy_purchased: dec!(10),
                renewable_energy_produced: dec!(20),
                carbon_credit_value: dec!(50),
            },
            expected: dec!(-35),
        },
        KnownAnswer {
            case: "under max discount factor",
            inputs: CarbonInputs {
                total_energy_use: dec!(100),
                total_co2_equivalents_emissions: dec!(10),
                renewable_energy_purchased: dec!(5),
                renewable_energy_produced: dec!(20),
                carbon_credit_value: dec!(50),
            },
            expected: dec!(-50),
        },
    ]
}

/// Evaluates every known-answer vector, stopping at the first mismatch.
pub fn self_check(calculator: &CarbonScoreCalculator) -> Result<(), AnalyticsError> {
    for vector in known_answers() {
        let actual = calculator.calculate(&vector.inputs)?;
        if actual != vector.expected {
            return Err(AnalyticsError::SelfCheckFailure {
                case: vector.case.to_string(),
                expected: vector.expected,
                actual,
            });
        }
        tracing::debug!(case = vector.case, %actual, "Known-answer vector passed.");
    }
    Ok(())
}
