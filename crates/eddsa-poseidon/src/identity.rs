use crate::eddsa::{derive_secret_scalar, pack_public_key, sign_message, verify_signature};
use crate::error::Result;
use crate::input::Input;
use crate::types::{HashingAlgorithm, Signature};
use baby_jubjub::{base8, biguint_to_edfr, mul_point_escalar, EdwardsAffine};
use num_bigint::BigUint;
use rand::Rng;
use std::fmt;

/// Length of a generated seed
pub const SEED_LEN: usize = 32;

/// A seed together with its derived keys.
///
/// Everything is computed once in the constructor; the value is immutable
/// afterwards and can be shared freely between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct EdDSAPoseidon {
    seed: Vec<u8>,
    secret_scalar: BigUint,
    public_key: EdwardsAffine,
    packed_public_key: BigUint,
    algorithm: HashingAlgorithm,
}

impl EdDSAPoseidon {
    /// Creates an identity from `seed`, or from a fresh random 32-byte seed
    /// when `seed` is `None`.
    pub fn new(seed: Option<Input>, algorithm: HashingAlgorithm) -> Result<Self> {
        let seed = match seed {
            Some(input) => input.to_seed_bytes()?,
            None => random_seed(),
        };

        let secret_scalar = derive_secret_scalar(seed.as_slice(), algorithm)?;
        let public_key = mul_point_escalar(&base8(), biguint_to_edfr(&secret_scalar));
        let packed_public_key = pack_public_key(&public_key)?;

        Ok(EdDSAPoseidon {
            seed,
            secret_scalar,
            public_key,
            packed_public_key,
            algorithm,
        })
    }

    /// Creates an identity from a fresh random seed.
    pub fn random(algorithm: HashingAlgorithm) -> Result<Self> {
        Self::new(None, algorithm)
    }

    pub fn seed(&self) -> &[u8] {
        &self.seed
    }

    pub fn secret_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    pub fn public_key(&self) -> &EdwardsAffine {
        &self.public_key
    }

    pub fn packed_public_key(&self) -> &BigUint {
        &self.packed_public_key
    }

    pub fn algorithm(&self) -> HashingAlgorithm {
        self.algorithm
    }

    /// Signs a message with the held seed.
    pub fn sign_message(&self, message: impl Into<Input>) -> Result<Signature> {
        sign_message(self.seed.as_slice(), message, self.algorithm)
    }

    /// Verifies a signature against the held public key.
    pub fn verify_signature(
        &self,
        message: impl Into<Input>,
        signature: &Signature,
    ) -> Result<bool> {
        verify_signature(message, signature, &self.public_key)
    }
}

impl fmt::Debug for EdDSAPoseidon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdDSAPoseidon")
            .field("seed", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("packed_public_key", &self.packed_public_key)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

fn random_seed() -> Vec<u8> {
    let mut seed = vec![0u8; SEED_LEN];
    rand::thread_rng().fill(&mut seed[..]);
    seed
}
