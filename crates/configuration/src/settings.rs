use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The largest number of fractional digits a `Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing section falls back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub carbon: CarbonSettings,
    pub esg: EsgSettings,
    pub logging: Logging,
}

/// How the purchased-renewables ratio is evaluated before the discount is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum RatioMode {
    /// When both operands are whole-number figures the ratio is floored, as the
    /// historical regression fixtures were produced with integer division. Any
    /// figure with a fractional part gives the exact quotient.
    #[default]
    WholeUnits,
    /// The ratio is the exact decimal quotient.
    Exact,
}

/// Parameters for the carbon liability calculation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarbonSettings {
    /// Weight applied to the purchased-renewables ratio (0.5 means half the ratio).
    pub discount_factor: Decimal,
    /// Upper bound of the effective discount. 0.8 corresponds to 80%.
    pub max_discount_factor: Decimal,
    /// Emissions offset per unit of renewable energy produced. Not capped.
    pub co2_conversion_factor: Decimal,
    pub ratio_mode: RatioMode,
    /// Run the known-answer vectors before any batch file is read.
    pub self_check_on_start: bool,
}

/// Parameters for the ESG composite score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EsgSettings {
    /// Fractional digits kept when rounding the composite score.
    pub precision: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub filter: String,
}

// --- Default Implementations ---

impl Default for CarbonSettings {
    fn default() -> Self {
        Self {
            discount_factor: dec!(0.5),
            max_discount_factor: dec!(0.8),
            co2_conversion_factor: dec!(0.5),
            ratio_mode: RatioMode::default(),
            self_check_on_start: true,
        }
    }
}

impl Default for EsgSettings {
    fn default() -> Self {
        Self { precision: 8 }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl CarbonSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discount_factor < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "carbon.discount_factor must not be negative".to_string(),
            ));
        }
        if self.max_discount_factor < Decimal::ZERO || self.max_discount_factor > Decimal::ONE {
            return Err(ConfigError::ValidationError(
                "carbon.max_discount_factor must be between 0 and 1".to_string(),
            ));
        }
        if self.co2_conversion_factor < Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "carbon.co2_conversion_factor must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl EsgSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "esg.precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Checks every section for values the calculators would reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.carbon.validate()?;
        self.esg.validate()?;
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
