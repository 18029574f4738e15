use crate::enums::{AssetClass, HolderKind, InstrumentType};
use crate::error::CoreError;
use crate::fraction::Fraction;
use crate::inputs::EsgInputs;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single concrete entity an ESG score or a holding is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Holder {
    Instrument(Uuid),
    Company(Uuid),
    Portfolio(Uuid),
}

impl Holder {
    pub fn kind(&self) -> HolderKind {
        match self {
            Holder::Instrument(_) => HolderKind::Instrument,
            Holder::Company(_) => HolderKind::Company,
            Holder::Portfolio(_) => HolderKind::Portfolio,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Holder::Instrument(id) | Holder::Company(id) | Holder::Portfolio(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: Uuid,
    pub isin: String,
    pub name: String,
    pub instrument_type: InstrumentType,
    pub asset_class: AssetClass,
}

impl Instrument {
    pub fn new(
        isin: impl Into<String>,
        name: impl Into<String>,
        instrument_type: InstrumentType,
        asset_class: AssetClass,
    ) -> Result<Self, CoreError> {
        let isin = isin.into();
        let name = name.into();
        if isin.trim().is_empty() {
            return Err(CoreError::InvalidInput("isin".to_string(), "must not be empty".to_string()));
        }
        if name.trim().is_empty() {
            return Err(CoreError::InvalidInput("name".to_string(), "must not be empty".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            isin,
            name,
            instrument_type,
            asset_class,
        })
    }

    /// The holder reference for this instrument when it is itself composed of holdings (e.g. an ETF).
    pub fn as_holder(&self) -> Holder {
        Holder::Instrument(self.id)
    }
}

/// A weighted position of one holder in one instrument.
///
/// The weight is context for callers only; neither calculator consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub holder: Holder,
    pub instrument_id: Uuid,
    pub weight: Fraction,
}

impl Holding {
    pub fn new(holder: Holder, instrument_id: Uuid, weight: Decimal) -> Result<Self, CoreError> {
        let weight = Fraction::new("weight", weight).map_err(|_| {
            CoreError::InvalidInput("weight".to_string(), format!("{weight} is outside [0, 1]"))
        })?;
        Ok(Self {
            holder,
            instrument_id,
            weight,
        })
    }
}

/// One recorded ESG assessment of a holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgScoreRecord {
    pub holder: Holder,
    pub inputs: EsgInputs,
    pub created_at: DateTime<Utc>,
}

impl EsgScoreRecord {
    /// Returns the current score record for `holder`: the one created most recently.
    ///
    /// When two records share a creation time, the one appearing later in `records` wins.
    pub fn latest_for(holder: Holder, records: &[EsgScoreRecord]) -> Option<&EsgScoreRecord> {
        records
            .iter()
            .filter(|r| r.holder == holder)
            .fold(None, |current: Option<&EsgScoreRecord>, candidate| match current {
                Some(best) if best.created_at > candidate.created_at => Some(best),
                _ => Some(candidate),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn record(holder: Holder, environmental: Decimal, created_at: DateTime<Utc>) -> EsgScoreRecord {
        EsgScoreRecord {
            holder,
            inputs: EsgInputs::new(environmental, dec!(0.5), dec!(0.5)).unwrap(),
            created_at,
        }
    }

    #[test]
    fn holder_serializes_as_tagged_variant() {
        let id = Uuid::nil();
        let json = serde_json::to_value(Holder::Company(id)).unwrap();
        assert_eq!(json["kind"], "company");
        assert_eq!(json["id"], id.to_string());

        let back: Holder = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), HolderKind::Company);
        assert_eq!(back.id(), id);
    }

    #[test]
    fn latest_for_picks_most_recent_record_of_that_holder() {
        let apple = Holder::Company(Uuid::new_v4());
        let google = Holder::Company(Uuid::new_v4());
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let records = vec![
            record(apple, dec!(0.1), t0 + Duration::days(2)),
            record(google, dec!(0.9), t0 + Duration::days(5)),
            record(apple, dec!(0.3), t0 + Duration::days(3)),
            record(apple, dec!(0.2), t0),
        ];

        let latest = EsgScoreRecord::latest_for(apple, &records).unwrap();
        assert_eq!(latest.inputs.environmental.value(), dec!(0.3));
    }

    #[test]
    fn latest_for_breaks_ties_by_position() {
        let portfolio = Holder::Portfolio(Uuid::new_v4());
        let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let records = vec![record(portfolio, dec!(0.1), t0), record(portfolio, dec!(0.7), t0)];

        let latest = EsgScoreRecord::latest_for(portfolio, &records).unwrap();
        assert_eq!(latest.inputs.environmental.value(), dec!(0.7));
    }

    #[test]
    fn latest_for_unknown_holder_is_none() {
        let records = vec![record(Holder::Company(Uuid::new_v4()), dec!(0.1), Utc::now())];
        assert!(EsgScoreRecord::latest_for(Holder::Instrument(Uuid::new_v4()), &records).is_none());
    }

    #[test]
    fn holding_weight_must_be_a_fraction() {
        let etf = Instrument::new("ETF", "My ETF", InstrumentType::Etf, AssetClass::RealEstate).unwrap();
        let hq = Instrument::new("applehq1", "Apple Headquarters", InstrumentType::Mortgage, AssetClass::RealEstate)
            .unwrap();

        let holding = Holding::new(etf.as_holder(), hq.id, dec!(0.2)).unwrap();
        assert_eq!(holding.weight.value(), dec!(0.2));

        let err = Holding::new(etf.as_holder(), hq.id, dec!(1.1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref field, _) if field == "weight"));
    }

    #[test]
    fn instrument_requires_isin_and_name() {
        assert!(Instrument::new("", "Nameless", InstrumentType::Stock, AssetClass::Equity).is_err());
        assert!(Instrument::new("US0378331005", " ", InstrumentType::Stock, AssetClass::Equity).is_err());
    }
}
