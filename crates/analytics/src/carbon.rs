use crate::error::AnalyticsError;
use crate::numeric::{checked, checked_ratio};
use configuration::{CarbonSettings, RatioMode};
use core_types::CarbonInputs;
use rust_decimal::Decimal;

/// A stateless calculator for an entity's net carbon liability.
///
/// Emissions net of carbon credits are discounted according to the share of energy
/// bought from renewable sources (the discount is capped), and then reduced by an
/// uncapped offset for renewable energy produced in-house. A negative result means
/// the entity is net carbon-beneficial.
#[derive(Debug, Clone, Default)]
pub struct CarbonScoreCalculator {
    params: CarbonSettings,
}

impl CarbonScoreCalculator {
    /// Creates a new calculator with the given configuration parameters.
    pub fn new(params: CarbonSettings) -> Result<Self, AnalyticsError> {
        // Validate that the parameters are logical.
        if params.discount_factor < Decimal::ZERO {
            return Err(AnalyticsError::InvalidParameters(
                "discount_factor must not be negative".to_string(),
            ));
        }
        if params.max_discount_factor < Decimal::ZERO || params.max_discount_factor > Decimal::ONE {
            return Err(AnalyticsError::InvalidParameters(
                "max_discount_factor must be between 0 and 1".to_string(),
            ));
        }
        if params.co2_conversion_factor < Decimal::ZERO {
            return Err(AnalyticsError::InvalidParameters(
                "co2_conversion_factor must not be negative".to_string(),
            ));
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &CarbonSettings {
        &self.params
    }

    /// The share of purchased renewable energy in total energy use, evaluated per `RatioMode`.
    ///
    /// In `WholeUnits` mode the quotient is floored only when both operands are
    /// whole-number figures (zero scale, as a JSON integer parses). A figure written
    /// with a fractional part, even `1000.0`, gets the exact quotient.
    pub fn purchase_ratio(&self, inputs: &CarbonInputs) -> Result<Decimal, AnalyticsError> {
        let purchased = inputs.renewable_energy_purchased;
        let total = inputs.total_energy_use;
        let ratio = checked_ratio(purchased, total, "total_energy_use")?;
        Ok(match self.params.ratio_mode {
            RatioMode::WholeUnits if is_whole_figure(purchased) && is_whole_figure(total) => {
                ratio.floor()
            }
            RatioMode::WholeUnits | RatioMode::Exact => ratio,
        })
    }

    /// The effective discount: `min(discount_factor * purchase_ratio, max_discount_factor)`.
    pub fn discount_factor(&self, inputs: &CarbonInputs) -> Result<Decimal, AnalyticsError> {
        let ratio = self.purchase_ratio(inputs)?;
        let raw_discount = checked(self.params.discount_factor.checked_mul(ratio), "raw discount")?;
        Ok(raw_discount.min(self.params.max_discount_factor))
    }

    /// The main entry point: computes the net carbon score for one entity.
    ///
    /// # Errors
    ///
    /// `AnalyticsError::InvalidDivisor` when `total_energy_use` is zero, and
    /// `AnalyticsError::Overflow` if an intermediate value leaves the `Decimal` range.
    pub fn calculate(&self, inputs: &CarbonInputs) -> Result<Decimal, AnalyticsError> {
        let discount = self.discount_factor(inputs)?;

        // --- 1. Emissions net of credits, discounted ---
        let net_emissions = checked(
            inputs
                .total_co2_equivalents_emissions
                .checked_sub(inputs.carbon_credit_value),
            "net emissions",
        )?;
        let adjusted_emissions = checked(
            net_emissions.checked_mul(Decimal::ONE - discount),
            "adjusted emissions",
        )?;

        // --- 2. Offset for energy produced (uncapped) ---
        let production_offset = checked(
            self.params
                .co2_conversion_factor
                .checked_mul(inputs.renewable_energy_produced),
            "production offset",
        )?;

        let score = checked(
            adjusted_emissions.checked_sub(production_offset),
            "carbon score",
        )?;

        tracing::trace!(
            %discount,
            %adjusted_emissions,
            %production_offset,
            %score,
            "Carbon score calculated."
        );
        Ok(score)
    }
}

fn is_whole_figure(value: Decimal) -> bool {
    value.scale() == 0
}
