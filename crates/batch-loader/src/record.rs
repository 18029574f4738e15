use crate::error::LoaderError;
use core_types::CarbonInputs;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// One row of the batch file. `isin` is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    #[serde(rename = "ISIN")]
    pub isin: String,
    #[serde(rename = "Total Energy Use", deserialize_with = "json_number")]
    pub total_energy_use: Decimal,
    #[serde(rename = "Total CO2 Equivalents Emissions", deserialize_with = "json_number")]
    pub total_co2_equivalents_emissions: Decimal,
    #[serde(rename = "Renewable Energy Purchased", deserialize_with = "json_number")]
    pub renewable_energy_purchased: Decimal,
    #[serde(rename = "Renewable Energy Produced", deserialize_with = "json_number")]
    pub renewable_energy_produced: Decimal,
    #[serde(rename = "Carbon Credit Value", deserialize_with = "json_number")]
    pub carbon_credit_value: Decimal,
}

impl BatchRecord {
    pub fn inputs(&self) -> CarbonInputs {
        CarbonInputs {
            total_energy_use: self.total_energy_use,
            total_co2_equivalents_emissions: self.total_co2_equivalents_emissions,
            renewable_energy_purchased: self.renewable_energy_purchased,
            renewable_energy_produced: self.renewable_energy_produced,
            carbon_credit_value: self.carbon_credit_value,
        }
    }
}

/// Accepts only JSON numbers; strings, booleans and nulls are rejected rather than coerced.
fn json_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(serde::de::Error::custom)
}

/// Parses the batch document: a JSON array of record objects.
///
/// Records are checked one by one so a bad row is reported by position and ISIN.
pub fn parse_records(json: &str) -> Result<Vec<BatchRecord>, LoaderError> {
    let rows: Vec<Value> = serde_json::from_str(json)?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let isin = row.get("ISIN").and_then(Value::as_str).map(str::to_string);
            serde_json::from_value::<BatchRecord>(row).map_err(|e| LoaderError::MalformedRecord {
                index,
                isin,
                reason: e.to_string(),
            })
        })
        .collect()
}
