//! Error types for the mapforge library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mapforge operations.
///
/// Row-level problems (an unparsable coordinate, an unknown region token)
/// are never reported through this type. They are counted in a
/// [`SkipReport`](crate::features::SkipReport) instead.
#[derive(Debug, Error)]
pub enum MapforgeError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source has no header row to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// An explicitly requested column is missing from the dataset.
    #[error("Column '{column}' not found. Available headers: {headers:?}")]
    ColumnNotFound { column: String, headers: Vec<String> },

    /// No header could be identified as the region column.
    #[error("No country/region column found. Headers: {headers:?}")]
    NoRegionColumn { headers: Vec<String> },

    /// No header could be identified as the value column.
    #[error("No value column found. Headers: {headers:?}")]
    NoValueColumn { headers: Vec<String> },

    /// Neither lat/lon columns nor a geocodable region column were found.
    #[error("No lat/lon, country code or province column found. Headers: {headers:?}")]
    NoGeometryColumns { headers: Vec<String> },

    /// Every row was filtered out.
    #[error("No valid data: {0}")]
    EmptyResult(String),

    /// Too few paired observations for a correlation analysis.
    #[error("Insufficient data: need at least {required} paired values, found {found}")]
    InsufficientData { required: usize, found: usize },

    /// The two series handed to the correlation engine differ in length.
    #[error("Series length mismatch: {left} vs {right}")]
    SeriesLengthMismatch { left: usize, right: usize },

    /// A single regression model could not be fitted.
    #[error("Could not fit {model} model: {reason}")]
    Fit { model: &'static str, reason: String },

    /// A storage key or catalog file could not be used.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for mapforge operations.
pub type Result<T> = std::result::Result<T, MapforgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_lists_headers() {
        let err = MapforgeError::ColumnNotFound {
            column: "gdp".to_string(),
            headers: vec!["country".to_string(), "year".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'gdp'"));
        assert!(msg.contains("\"country\""));
        assert!(msg.contains("\"year\""));
    }
}
