//! Error types for the metabolism_forecast crate

use thiserror::Error;

/// Custom error types for the metabolism_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A required feature is absent, or there is no history to read it from
    #[error("Missing feature: {0}")]
    MissingFeature(String),

    /// The predictor failed or produced a non-finite value mid-run
    #[error("Prediction failure: {0}")]
    PredictionFailure(String),

    /// A caller-supplied parameter is out of its valid domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A model artifact's feature schema does not match the state schema
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON serialization or deserialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
