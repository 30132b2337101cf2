use crate::error::{EddsaError, Result};
use crate::types::HashingAlgorithm;
use ark_bn254::Fr as Bn254Fr;
use ark_ff::{BigInteger, PrimeField};
use blake::Blake;
use blake2::{Blake2b512, Digest};
use light_poseidon::{Poseidon, PoseidonHasher};
use num_bigint::BigUint;

/// Prunes a buffer to meet the specific requirements for using it as a private key.
///
/// ```text
/// buff[0] &= 0xf8   // Clear lowest 3 bits
/// buff[31] &= 0x7f  // Clear highest bit
/// buff[31] |= 0x40  // Set second-highest bit
/// ```
pub fn prune_buffer(buff: &mut [u8; 32]) {
    buff[0] &= 0xf8;
    buff[31] &= 0x7f;
    buff[31] |= 0x40;
}

/// Hashes input data using the specified algorithm.
/// Returns 64 bytes of hash output.
pub fn hash_input(data: &[u8], algorithm: HashingAlgorithm) -> [u8; 64] {
    let mut output = [0u8; 64];
    match algorithm {
        HashingAlgorithm::Blake512 => {
            // 512 is a supported digest size, so construction cannot fail
            let mut hasher = Blake::new(512).expect("Blake-512 is a supported digest size");
            hasher.update(data);
            hasher.finalise(&mut output);
        }
        HashingAlgorithm::Blake2b => {
            let mut hasher = Blake2b512::new();
            hasher.update(data);
            output.copy_from_slice(&hasher.finalize());
        }
    }
    output
}

/// Poseidon hash with 5 inputs, `poseidon5([R8.x, R8.y, A.x, A.y, message])`.
pub fn poseidon5(inputs: &[BigUint; 5]) -> Result<BigUint> {
    let fr_inputs: Vec<Bn254Fr> = inputs
        .iter()
        .map(|value| Bn254Fr::from_le_bytes_mod_order(&value.to_bytes_le()))
        .collect();

    let mut poseidon = Poseidon::<Bn254Fr>::new_circom(5)
        .map_err(|e| EddsaError::Hash(format!("failed to create hasher: {:?}", e)))?;

    let result = poseidon
        .hash(&fr_inputs)
        .map_err(|e| EddsaError::Hash(format!("{:?}", e)))?;

    Ok(BigUint::from_bytes_le(&result.into_bigint().to_bytes_le()))
}

/// Little-endian encoding of `value`, zero-padded to `N` bytes.
///
/// Returns `None` when the value does not fit.
pub fn to_le_fixed<const N: usize>(value: &BigUint) -> Option<[u8; N]> {
    let bytes = value.to_bytes_le();
    if bytes.len() > N {
        return None;
    }
    let mut out = [0u8; N];
    out[..bytes.len()].copy_from_slice(&bytes);
    Some(out)
}
