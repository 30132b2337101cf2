//! Error types for the baby-jubjub library

use thiserror::Error;

/// Error types for baby-jubjub operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BabyJubjubError {
    #[error("Invalid coordinate: '{0}' is not a decimal integer")]
    InvalidCoordinate(String),

    #[error("Invalid coordinate: {0} is not below the field modulus")]
    CoordinateOutOfRange(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BabyJubjubError>;
