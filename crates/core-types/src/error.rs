use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("ESG input '{field}' must lie in [0, 1], got {value}")]
    OutOfRangeEsgInput { field: String, value: Decimal },
}
