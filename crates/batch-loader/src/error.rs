use analytics::AnalyticsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read batch file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Batch file is not a JSON array of records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed record #{index} (ISIN {}): {reason}", .isin.as_deref().unwrap_or("unknown"))]
    MalformedRecord {
        index: usize,
        isin: Option<String>,
        reason: String,
    },

    #[error("Calculation failed for record #{index} (ISIN {isin}): {source}")]
    Calculation {
        index: usize,
        isin: String,
        #[source]
        source: AnalyticsError,
    },
}
