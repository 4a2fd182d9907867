//! Error types for scenario loading, evaluation and export

use thiserror::Error;

/// Errors raised by the scenario library
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario cannot be evaluated as given (e.g. an empty price sweep)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
