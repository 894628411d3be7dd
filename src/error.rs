//! Error types for tocams

use thiserror::Error;

/// Main error type for tocams operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data error: {0}")]
    Data(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tocams operations
pub type Result<T> = std::result::Result<T, Error>;
