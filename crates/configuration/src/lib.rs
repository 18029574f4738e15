//! # Configuration
//!
//! Strongly-typed settings for the calculators and the command-line front end.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed with `CARBON_ESG` (nested keys separated by `__`,
//! e.g. `CARBON_ESG__ESG__PRECISION=4`).

use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{CarbonSettings, Config, EsgSettings, Logging, MAX_PRECISION, RatioMode};

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "CARBON_ESG";

/// Loads the application configuration from `config.toml` in the working directory.
///
/// A missing file is not an error; the defaults and environment overrides still apply.
pub fn load_config() -> Result<Config, ConfigError> {
    build(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
}

/// Loads the application configuration from an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }
    build(config::File::from(path).required(true))
}

fn build<S>(file: S) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}
