//! # Batch Loader
//!
//! Reads the batch evaluation file (a JSON array of per-ISIN carbon figures),
//! turns each row into a typed `BatchRecord`, and scores the rows in order.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Adapter:** All parsing and type checking of external data happens
//!   here. The calculators only ever see strictly typed `CarbonInputs`.
//! - **No guessing:** A row with a missing or non-numeric field is reported as
//!   `LoaderError::MalformedRecord`; no defaults are substituted.

use std::path::{Path, PathBuf};

// Declare the modules that constitute this crate.
pub mod error;
pub mod record;
pub mod scoring;

// Re-export the key components to create a clean, public-facing API.
pub use error::LoaderError;
pub use record::{BatchRecord, parse_records};
pub use scoring::{ScoredRecord, score_records};

/// Where the batch file is looked up when no path is given.
pub const DEFAULT_BATCH_FILE: &str = "./carbon_calculation/data.json";

/// Reads and parses the batch file at `path`.
pub fn load_records(path: &Path) -> Result<Vec<BatchRecord>, LoaderError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    let records = parse_records(&contents)?;
    tracing::info!(path = %path.display(), count = records.len(), "Batch file loaded.");
    Ok(records)
}
