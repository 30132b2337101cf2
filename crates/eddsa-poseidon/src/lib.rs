//! # EdDSA-Poseidon
//!
//! EdDSA signatures over the Baby Jubjub curve with a Poseidon challenge hash,
//! bit-compatible with zk-kit's EdDSA-Poseidon and circomlib's
//! `EdDSAPoseidonVerifier` circuit.
//!
//! ## Features
//!
//! - Key derivation from arbitrary seeds (text, hex, bytes or integers)
//! - Deterministic signing and verification
//! - Canonical 32-byte public keys and 64-byte signatures
//! - BLAKE-512 (default) or BLAKE2b scalar derivation
//!
//! ```no_run
//! use eddsa_poseidon::{derive_public_key, sign_message, verify_signature, HashingAlgorithm};
//!
//! let algorithm = HashingAlgorithm::Blake512;
//! let signature = sign_message("secret", 2u64, algorithm)?;
//! let public_key = derive_public_key("secret", algorithm)?;
//! assert!(verify_signature(2u64, &signature, &public_key)?);
//! # Ok::<(), eddsa_poseidon::EddsaError>(())
//! ```

mod codec;
mod eddsa;
mod error;
mod identity;
mod input;
mod types;
mod utils;

pub use codec::{
    pack_point, pack_point_to_biguint, pack_scalar, unpack_point, unpack_point_biguint,
    unpack_scalar, PACKED_LEN,
};
pub use eddsa::{
    derive_public_key, derive_secret_scalar, pack_public_key, pack_signature, sign_message,
    unpack_public_key, unpack_signature, verify_signature, PACKED_SIGNATURE_LEN,
};
pub use error::{EddsaError, Result};
pub use identity::{EdDSAPoseidon, SEED_LEN};
pub use input::{Input, ACCEPTED_TYPES};
pub use types::{HashingAlgorithm, Signature};

// Re-export commonly used types from dependencies
pub use baby_jubjub::{
    base8, in_curve, point_from_decimal, point_to_decimal, EdwardsAffine, SUBGROUP_ORDER,
};
pub use num_bigint::BigUint;
