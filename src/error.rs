//! Error types for regression operations.

use thiserror::Error;

/// Regression errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    /// Sample sequences are empty, mismatched, too short or non-finite.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Predictor has no spread, so the slope is undefined.
    #[error("degenerate input: variance of x is {var_x}")]
    DegenerateInput { var_x: f64 },
}

/// Result type for regression operations.
pub type Result<T> = std::result::Result<T, RegressionError>;
