//! Error types for lca-checker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Unknown material identifier, or a counterpart missing from the table
    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    /// Caller-side input that cannot be analyzed (e.g. non-numeric quantity)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Batch input error: {0}")]
    BatchInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
