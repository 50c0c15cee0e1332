//! Utility errors

use thiserror::Error;

/// Errors raised by the utility helpers
#[derive(Debug, Error)]
pub enum UtilError {
    /// The input could not be parsed as an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type for utility operations
pub type UtilResult<T> = std::result::Result<T, UtilError>;
