use crate::error::LoaderError;
use crate::record::BatchRecord;
use analytics::CarbonScoreCalculator;
use rust_decimal::Decimal;
use std::fmt;

/// A batch record paired with its carbon score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRecord {
    pub isin: String,
    pub score: Decimal,
}

/// Renders the batch output line `<ISIN>: <score>`, with the score unrounded.
impl fmt::Display for ScoredRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.isin, self.score)
    }
}

/// Scores every record in input order. The first failing record aborts the batch.
pub fn score_records(
    calculator: &CarbonScoreCalculator,
    records: &[BatchRecord],
) -> Result<Vec<ScoredRecord>, LoaderError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let score = calculator
                .calculate(&record.inputs())
                .map_err(|source| LoaderError::Calculation {
                    index,
                    isin: record.isin.clone(),
                    source,
                })?;
            Ok(ScoredRecord {
                isin: record.isin.clone(),
                score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsError;
    use rust_decimal_macros::dec;

    fn record(isin: &str, energy: Decimal) -> BatchRecord {
        BatchRecord {
            isin: isin.to_string(),
            total_energy_use: energy,
            total_co2_equivalents_emissions: dec!(25),
            renewable_energy_purchased: dec!(10),
            renewable_energy_produced: dec!(20),
            carbon_credit_value: dec!(50),
        }
    }

    #[test]
    fn output_lines_follow_input_order() {
        let records = vec![record("ZZZ", dec!(1000)), record("AAA", dec!(1000))];
        let scored = score_records(&CarbonScoreCalculator::default(), &records).unwrap();

        let lines: Vec<String> = scored.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["ZZZ: -35.0", "AAA: -35.0"]);
    }

    #[test]
    fn zero_energy_aborts_with_record_position() {
        let records = vec![record("OK", dec!(1000)), record("BROKEN", Decimal::ZERO)];
        let err = score_records(&CarbonScoreCalculator::default(), &records).unwrap_err();

        match err {
            LoaderError::Calculation { index, isin, source } => {
                assert_eq!(index, 1);
                assert_eq!(isin, "BROKEN");
                assert!(matches!(source, AnalyticsError::InvalidDivisor(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
