//! Errors produced when turning user input into a tempo.

use thiserror::Error;

/// Every variant means "invalid tempo": no results are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TempoError {
    /// Input text could not be read as a number
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Zero or negative tempo
    #[error("tempo must be greater than zero, got {0}")]
    NonPositive(f64),

    /// NaN or infinite tempo
    #[error("tempo must be a finite number")]
    NotFinite,
}

