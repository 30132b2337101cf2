use crate::error::EddsaError;
use baby_jubjub::{point_from_decimal, point_to_decimal, EdwardsAffine};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signature structure for EdDSA-Poseidon
///
/// Serialized as `{ "R8": ["<x>", "<y>"], "S": "<s>" }` with decimal strings.
/// Deserialization does not check that `R8` is on the curve nor that `S` is
/// below the subgroup order; verification and packing do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SignatureJson", into = "SignatureJson")]
pub struct Signature {
    /// R8 point on the curve
    pub r8: EdwardsAffine,
    /// Scalar S
    pub s: BigUint,
}

#[derive(Serialize, Deserialize)]
struct SignatureJson {
    #[serde(rename = "R8")]
    r8: [String; 2],
    #[serde(rename = "S")]
    s: String,
}

impl From<Signature> for SignatureJson {
    fn from(signature: Signature) -> Self {
        SignatureJson {
            r8: point_to_decimal(&signature.r8),
            s: signature.s.to_string(),
        }
    }
}

impl TryFrom<SignatureJson> for Signature {
    type Error = EddsaError;

    fn try_from(json: SignatureJson) -> Result<Self, Self::Error> {
        let [x, y] = &json.r8;
        let r8 = point_from_decimal(x, y)?;
        let s = BigUint::parse_bytes(json.s.trim().as_bytes(), 10).ok_or(
            EddsaError::TypeCoercion {
                name: "S",
                expected: "bignumberish",
            },
        )?;
        Ok(Signature { r8, s })
    }
}

/// Supported hashing algorithms for key derivation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashingAlgorithm {
    /// BLAKE-512 (original Blake algorithm)
    #[default]
    Blake512,
    /// BLAKE2b
    Blake2b,
}

impl fmt::Display for HashingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashingAlgorithm::Blake512 => write!(f, "blake512"),
            HashingAlgorithm::Blake2b => write!(f, "blake2b"),
        }
    }
}

impl FromStr for HashingAlgorithm {
    type Err = EddsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blake512" => Ok(HashingAlgorithm::Blake512),
            "blake2b" => Ok(HashingAlgorithm::Blake2b),
            _ => Err(EddsaError::TypeCoercion {
                name: "algorithm",
                expected: "blake512, blake2b",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baby_jubjub::{base8, SNARK_FIELD_SIZE};

    #[test]
    fn test_signature_json_shape() {
        let signature = Signature {
            r8: base8(),
            s: BigUint::from(42u32),
        };
        let json = serde_json::to_value(&signature).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "R8": [
                    "5299619240641551281634865583518297030282874472190772894086521144482721001553",
                    "16950150798460657717958625567821834550301663161624707787222815936182638968203"
                ],
                "S": "42"
            })
        );

        let parsed: Signature = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, signature);
    }

    #[test]
    fn test_signature_json_rejects_out_of_field_coordinate() {
        let json = serde_json::json!({
            "R8": [SNARK_FIELD_SIZE.to_string(), "1"],
            "S": "0"
        });
        assert!(serde_json::from_value::<Signature>(json).is_err());
    }

    #[test]
    fn test_signature_json_rejects_non_decimal_s() {
        let json = serde_json::json!({ "R8": ["0", "1"], "S": "0x10" });
        assert!(serde_json::from_value::<Signature>(json).is_err());
    }

    #[test]
    fn test_hashing_algorithm_names() {
        assert_eq!(HashingAlgorithm::default(), HashingAlgorithm::Blake512);
        assert_eq!(
            "Blake2b".parse::<HashingAlgorithm>().unwrap(),
            HashingAlgorithm::Blake2b
        );
        assert_eq!(HashingAlgorithm::Blake512.to_string(), "blake512");
        assert_eq!(
            serde_json::to_string(&HashingAlgorithm::Blake2b).unwrap(),
            "\"blake2b\""
        );
        assert!("sha256".parse::<HashingAlgorithm>().is_err());
    }
}
