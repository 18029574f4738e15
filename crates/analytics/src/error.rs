use core_types::CoreError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Calculation error: '{0}' is zero and cannot be used as a divisor")]
    InvalidDivisor(String),

    #[error("Self-check failed: invalid calculation when {case}, expected {expected}, but got {actual}")]
    SelfCheckFailure {
        case: String,
        expected: Decimal,
        actual: Decimal,
    },

    #[error("Rounding precision {0} exceeds the maximum of 28 fractional digits")]
    InvalidPrecision(u32),

    #[error("Calculator parameters are invalid: {0}")]
    InvalidParameters(String),

    #[error("Calculation error: arithmetic overflow while computing {0}")]
    Overflow(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
