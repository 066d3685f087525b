//! Error types for the Extractor
//!
//! Extraction itself never fails: unusable answers degrade to an empty record
//! list. These errors cover the session around it.

use thiserror::Error;

/// Errors that can occur during an analysis session
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The analysis was cancelled before it finished
    #[error("Analysis cancelled")]
    Cancelled,

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading or writing files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Config(format!("Failed to parse TOML: {}", e))
    }
}
