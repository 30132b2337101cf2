//! Error types for the eddsa-poseidon library

use baby_jubjub::BabyJubjubError;
use thiserror::Error;

/// Error types for EdDSA-Poseidon operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EddsaError {
    // ============ Input Coercion Errors ============
    #[error("Parameter '{name}' is none of the following types: {expected}")]
    TypeCoercion {
        name: &'static str,
        expected: &'static str,
    },

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    // ============ Point/Key Errors ============
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error(transparent)]
    Curve(#[from] BabyJubjubError),

    // ============ Encoding Errors ============
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("Scalar does not fit in 32 bytes")]
    ScalarOverflow,

    // ============ Hash Errors ============
    #[error("Poseidon hash error: {0}")]
    Hash(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EddsaError>;

impl EddsaError {
    /// Create an invalid point error with a message
    pub fn invalid_point(msg: impl Into<String>) -> Self {
        Self::InvalidPoint(msg.into())
    }
}
