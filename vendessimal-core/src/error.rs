//! Error taxonomy shared by every component of the grid pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised at the call that receives a bad parameter.
///
/// None of these are recoverable at runtime; they indicate a
/// configuration bug in the caller.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    #[error("invalid modulus: {0} (must be positive, and the product of both moduli must fit a residue code)")]
    InvalidModulus(u64),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
}

impl GridError {
    pub(crate) fn index(msg: impl Into<String>) -> Self {
        GridError::InvalidIndex(msg.into())
    }

    pub(crate) fn parameter(msg: impl Into<String>) -> Self {
        GridError::InvalidParameter(msg.into())
    }
}
