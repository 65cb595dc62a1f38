//! Error types for the SpecForge library.

use thiserror::Error;

/// Main error type for SpecForge operations.
#[derive(Debug, Error)]
pub enum SpecForgeError {
    /// A generation request that cannot be fulfilled as stated.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Error from the CSV library while tokenizing rows.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// External value provider failure.
    ///
    /// Never surfaced by the synthesizer itself (provider failures fall
    /// back to deterministic generation); available for provider
    /// implementations to report their own faults.
    #[error("Provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },
}

/// Result type alias for SpecForge operations.
pub type Result<T> = std::result::Result<T, SpecForgeError>;
