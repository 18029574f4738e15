use crate::error::AnalyticsError;
use crate::numeric::{ensure_precision, round_half_up};
use configuration::EsgSettings;
use core_types::{EsgInputs, Fraction};
use rust_decimal::Decimal;

pub const DEFAULT_PRECISION: u32 = 8;

/// Averages the environmental, social and governance sub-scores into one composite.
///
/// Inputs arrive as `Fraction`s, so the [0, 1] precondition is already met and the
/// mean (and its rounding) stays within the same interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EsgCompositeScorer {
    precision: u32,
}

impl Default for EsgCompositeScorer {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl EsgCompositeScorer {
    pub fn new(params: EsgSettings) -> Result<Self, AnalyticsError> {
        Ok(Self {
            precision: ensure_precision(params.precision)?,
        })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Composite score rounded to the scorer's configured precision.
    pub fn score(&self, inputs: &EsgInputs) -> Result<Fraction, AnalyticsError> {
        self.score_with_precision(inputs, self.precision)
    }

    /// Composite score rounded half-up to `precision` fractional digits.
    pub fn score_with_precision(
        &self,
        inputs: &EsgInputs,
        precision: u32,
    ) -> Result<Fraction, AnalyticsError> {
        let mean = inputs.total() / Decimal::from(3);
        let rounded = round_half_up(mean, precision)?;
        Ok(Fraction::new("esg score", rounded)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn esg(environmental: Decimal, social: Decimal, governance: Decimal) -> EsgInputs {
        EsgInputs::new(environmental, social, governance).unwrap()
    }

    #[test]
    fn rounds_to_eight_digits_by_default() {
        let scorer = EsgCompositeScorer::default();
        let score = scorer.score(&esg(dec!(0.002), dec!(0.4), dec!(0.8))).unwrap();
        assert_eq!(score.value(), dec!(0.40066667));
    }

    #[test]
    fn unweighted_mean() {
        let scorer = EsgCompositeScorer::default();
        assert_eq!(
            scorer.score(&esg(dec!(0.8), dec!(0.3), dec!(0.6))).unwrap().value(),
            dec!(0.56666667)
        );
        assert_eq!(
            scorer.score(&esg(dec!(0.008), dec!(0.002), dec!(1))).unwrap().value(),
            dec!(0.33666667)
        );
    }

    #[test]
    fn explicit_precision_overrides_default() {
        let scorer = EsgCompositeScorer::default();
        let inputs = esg(dec!(0.8), dec!(0.3), dec!(0.6));
        assert_eq!(scorer.score_with_precision(&inputs, 2).unwrap().value(), dec!(0.57));
        assert_eq!(scorer.score_with_precision(&inputs, 0).unwrap().value(), dec!(1));
    }

    #[test]
    fn extremes_stay_in_bounds() {
        let scorer = EsgCompositeScorer::default();
        assert_eq!(scorer.score(&esg(dec!(0), dec!(0), dec!(0))).unwrap(), Fraction::ZERO);
        assert_eq!(scorer.score(&esg(dec!(1), dec!(1), dec!(1))).unwrap(), Fraction::ONE);
    }

    #[test]
    fn configured_precision_is_validated() {
        let err = EsgCompositeScorer::new(EsgSettings { precision: 30 }).unwrap_err();
        assert_eq!(err, AnalyticsError::InvalidPrecision(30));

        let scorer = EsgCompositeScorer::new(EsgSettings { precision: 3 }).unwrap();
        assert_eq!(scorer.precision(), 3);
    }
}
