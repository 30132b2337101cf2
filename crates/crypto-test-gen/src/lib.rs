//! Test vector generator for EdDSA-Poseidon
//!
//! The vectors cover key derivation, signing and the packed encodings, so
//! other implementations can be checked against this one byte for byte.

use baby_jubjub::{point_to_decimal, EdwardsAffine};
use eddsa_poseidon::Signature;
use serde::{Deserialize, Serialize};

/// Point on the Baby Jubjub curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointJson {
    pub x: String,
    pub y: String,
}

impl From<&EdwardsAffine> for PointJson {
    fn from(point: &EdwardsAffine) -> Self {
        let [x, y] = point_to_decimal(point);
        PointJson { x, y }
    }
}

/// EdDSA-Poseidon test vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdDSAPoseidonTestVector {
    pub name: String,
    pub description: String,
    pub vector_type: String,
    pub algorithm: String,
    pub data: EdDSAData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdDSAData {
    DerivePublicKey {
        private_key: String,
        private_key_bytes: String,
        secret_scalar: String,
        public_key: PointJson,
        packed_public_key: String,
    },
    SignVerify {
        private_key_bytes: String,
        message: String,
        public_key: PointJson,
        signature: Signature,
        valid: bool,
    },
    PackSignature {
        signature: Signature,
        packed: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use baby_jubjub::base8;

    #[test]
    fn test_point_json_from_point() {
        let json = PointJson::from(&base8());
        assert_eq!(
            json.x,
            "5299619240641551281634865583518297030282874472190772894086521144482721001553"
        );
        assert_eq!(
            json.y,
            "16950150798460657717958625567821834550301663161624707787222815936182638968203"
        );
    }
}
