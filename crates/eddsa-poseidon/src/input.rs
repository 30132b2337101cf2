//! Normalization of seeds and messages.
//!
//! Every surface form a caller may hold (text, `0x` hex, raw bytes, integers)
//! is one variant of [`Input`]. Each variant has exactly one normalization to
//! seed bytes and one to a message field element.

use crate::error::{EddsaError, Result};
use baby_jubjub::SNARK_FIELD_SIZE;
use num_bigint::BigUint;
use serde_json::Value;

/// Accepted type classes, as reported by coercion errors
pub const ACCEPTED_TYPES: &str = "bignumberish, string";

/// A seed or message in one of its accepted surface forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// UTF-8 text, used through its bytes
    Text(String),
    /// `0x`-prefixed hexadecimal integer
    Hex(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Non-negative integer
    Integer(BigUint),
}

impl Input {
    /// Builds an input from a dynamically typed JSON value.
    ///
    /// Non-negative integers become [`Input::Integer`], `0x` strings
    /// [`Input::Hex`], other strings [`Input::Text`] and arrays of byte values
    /// [`Input::Bytes`]. Anything else is rejected with a coercion error naming
    /// `name`.
    pub fn from_json(name: &'static str, value: &Value) -> Result<Self> {
        let unsupported = || EddsaError::TypeCoercion {
            name,
            expected: ACCEPTED_TYPES,
        };

        match value {
            Value::Number(n) => n
                .as_u64()
                .map(|n| Input::Integer(BigUint::from(n)))
                .ok_or_else(unsupported),
            Value::String(s) if is_hex_prefixed(s) => Ok(Input::Hex(s.clone())),
            Value::String(s) => Ok(Input::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(unsupported)
                })
                .collect::<Result<Vec<u8>>>()
                .map(Input::Bytes),
            Value::Bool(_) | Value::Null | Value::Object(_) => Err(unsupported()),
        }
    }

    /// Normalizes the input to the byte sequence hashed during key derivation.
    ///
    /// Hex and integer inputs use the minimal big-endian encoding of their
    /// value, so the same value always yields the same bytes.
    pub fn to_seed_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.as_bytes().to_vec()),
            Input::Bytes(bytes) => Ok(bytes.clone()),
            Input::Hex(hex) => Ok(parse_hex(hex)?.to_bytes_be()),
            Input::Integer(value) => Ok(value.to_bytes_be()),
        }
    }

    /// Normalizes the input to a message, reduced into the base field.
    ///
    /// Text and byte inputs are read as big-endian integers.
    pub fn to_message(&self) -> Result<BigUint> {
        let value = match self {
            Input::Text(text) => BigUint::from_bytes_be(text.as_bytes()),
            Input::Bytes(bytes) => BigUint::from_bytes_be(bytes),
            Input::Hex(hex) => parse_hex(hex)?,
            Input::Integer(value) => value.clone(),
        };
        Ok(value % &*SNARK_FIELD_SIZE)
    }
}

fn is_hex_prefixed(s: &str) -> bool {
    s.starts_with("0x") || s.starts_with("0X")
}

fn parse_hex(hex: &str) -> Result<BigUint> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| EddsaError::InvalidHex(hex.to_string()))
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&[u8]> for Input {
    fn from(value: &[u8]) -> Self {
        Input::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Input {
    fn from(value: &[u8; N]) -> Self {
        Input::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Input {
    fn from(value: [u8; N]) -> Self {
        Input::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Input {
    fn from(value: Vec<u8>) -> Self {
        Input::Bytes(value)
    }
}

impl From<u64> for Input {
    fn from(value: u64) -> Self {
        Input::Integer(BigUint::from(value))
    }
}

impl From<u128> for Input {
    fn from(value: u128) -> Self {
        Input::Integer(BigUint::from(value))
    }
}

impl From<BigUint> for Input {
    fn from(value: BigUint) -> Self {
        Input::Integer(value)
    }
}

impl From<&BigUint> for Input {
    fn from(value: &BigUint) -> Self {
        Input::Integer(value.clone())
    }
}

impl From<&Input> for Input {
    fn from(value: &Input) -> Self {
        value.clone()
    }
}
