use crate::codec::{
    pack_point, pack_point_to_biguint, pack_scalar, unpack_point, unpack_point_biguint,
    unpack_scalar, PACKED_LEN,
};
use crate::error::{EddsaError, Result};
use crate::input::Input;
use crate::types::{HashingAlgorithm, Signature};
use crate::utils::{hash_input, poseidon5, prune_buffer, to_le_fixed};
use baby_jubjub::{
    add_point, base8, biguint_to_edfr, edfr_to_biguint, fq_to_biguint, in_curve,
    mul_by_cofactor, mul_point_escalar, EdwardsAffine, SUBGROUP_ORDER,
};
use num_bigint::BigUint;
use tracing::debug;

/// Length of a packed signature: packed R8 followed by S
pub const PACKED_SIGNATURE_LEN: usize = 2 * PACKED_LEN;

/// Clamped first half of the seed digest, plus the digest itself.
fn clamped_scalar(seed: &[u8], algorithm: HashingAlgorithm) -> (BigUint, [u8; 64]) {
    let hash = hash_input(seed, algorithm);

    let mut s_buff = [0u8; 32];
    s_buff.copy_from_slice(&hash[..32]);
    prune_buffer(&mut s_buff);

    (BigUint::from_bytes_le(&s_buff), hash)
}

/// `h = poseidon5([R8.x, R8.y, A.x, A.y, message])`
fn challenge(
    r8: &EdwardsAffine,
    public_key: &EdwardsAffine,
    message: &BigUint,
) -> Result<BigUint> {
    poseidon5(&[
        fq_to_biguint(&r8.x),
        fq_to_biguint(&r8.y),
        fq_to_biguint(&public_key.x),
        fq_to_biguint(&public_key.y),
        message.clone(),
    ])
}

/// Derives the secret scalar from a seed.
///
/// Process:
/// 1. hash(seed) -> 64 bytes
/// 2. Take the first 32 bytes and prune them
/// 3. Read as a little-endian integer
/// 4. Shift right by 3 (divide by the cofactor)
/// 5. Reduce modulo the subgroup order
pub fn derive_secret_scalar(
    seed: impl Into<Input>,
    algorithm: HashingAlgorithm,
) -> Result<BigUint> {
    let seed = seed.into().to_seed_bytes()?;
    let (s, _) = clamped_scalar(&seed, algorithm);

    Ok((s >> 3) % &*SUBGROUP_ORDER)
}

/// Derives the public key `Base8 * secret_scalar` from a seed.
pub fn derive_public_key(
    seed: impl Into<Input>,
    algorithm: HashingAlgorithm,
) -> Result<EdwardsAffine> {
    let s = derive_secret_scalar(seed, algorithm)?;
    Ok(mul_point_escalar(&base8(), biguint_to_edfr(&s)))
}

/// Signs a message with the key derived from `seed`.
///
/// Process:
/// 1. hash = hash_input(seed), s = prune(hash[..32])
/// 2. A = Base8 * (s >> 3)
/// 3. r = hash_input(hash[32..64] || message) mod l
/// 4. R8 = Base8 * r
/// 5. h = poseidon5([R8.x, R8.y, A.x, A.y, message])
/// 6. S = r + h * s mod l
///
/// The nonce depends only on the seed and the message.
pub fn sign_message(
    seed: impl Into<Input>,
    message: impl Into<Input>,
    algorithm: HashingAlgorithm,
) -> Result<Signature> {
    let seed = seed.into().to_seed_bytes()?;
    let message = message.into().to_message()?;

    let (s, hash) = clamped_scalar(&seed, algorithm);
    let base8_point = base8();
    let public_key = mul_point_escalar(&base8_point, biguint_to_edfr(&(&s >> 3)));

    // Messages are reduced into the field, so this only fails on a broken invariant
    let msg_buff = to_le_fixed::<32>(&message).ok_or_else(|| EddsaError::Length {
        expected: 32,
        actual: message.to_bytes_le().len(),
    })?;

    let mut r_input = Vec::with_capacity(64);
    r_input.extend_from_slice(&hash[32..64]);
    r_input.extend_from_slice(&msg_buff);
    let r_buff = hash_input(&r_input, algorithm);
    let r = biguint_to_edfr(&BigUint::from_bytes_le(&r_buff));

    let r8 = mul_point_escalar(&base8_point, r);

    let h = challenge(&r8, &public_key, &message)?;
    let s_result = r + biguint_to_edfr(&h) * biguint_to_edfr(&s);

    Ok(Signature {
        r8,
        s: edfr_to_biguint(&s_result),
    })
}

/// Verifies an EdDSA signature.
///
/// Verification:
/// 1. Check R8 and the public key are on the curve
/// 2. Check S < l
/// 3. h = poseidon5([R8.x, R8.y, A.x, A.y, message])
/// 4. Accept iff Base8 * S == R8 + A * (8 * h)
///
/// Malformed signatures and keys yield `Ok(false)`; the only error is a
/// message that cannot be coerced.
pub fn verify_signature(
    message: impl Into<Input>,
    signature: &Signature,
    public_key: &EdwardsAffine,
) -> Result<bool> {
    let message = message.into().to_message()?;

    if !in_curve(&signature.r8) {
        debug!("signature rejected: R8 is not on the curve");
        return Ok(false);
    }
    if !in_curve(public_key) {
        debug!("signature rejected: public key is not on the curve");
        return Ok(false);
    }
    if signature.s >= *SUBGROUP_ORDER {
        debug!("signature rejected: S is not below the subgroup order");
        return Ok(false);
    }

    let h = match challenge(&signature.r8, public_key, &message) {
        Ok(h) => h,
        Err(e) => {
            debug!(error = %e, "signature rejected: challenge hash failed");
            return Ok(false);
        }
    };

    let p_left = mul_point_escalar(&base8(), biguint_to_edfr(&signature.s));

    // (8h)·A, with the cofactor applied first so a small-order part of A vanishes
    let a8 = mul_by_cofactor(public_key);
    let p_right = add_point(&signature.r8, &mul_point_escalar(&a8, biguint_to_edfr(&h)));

    let valid = p_left == p_right;
    if !valid {
        debug!("signature rejected: verification equation does not hold");
    }
    Ok(valid)
}

/// Packs a public key into a single integer (32 little-endian bytes).
pub fn pack_public_key(public_key: &EdwardsAffine) -> Result<BigUint> {
    pack_point_to_biguint(public_key).map_err(|_| EddsaError::InvalidPublicKey)
}

/// Unpacks a public key from its integer form.
pub fn unpack_public_key(packed: &BigUint) -> Result<EdwardsAffine> {
    unpack_point_biguint(packed).map_err(|e| {
        debug!(error = %e, "failed to unpack public key");
        EddsaError::InvalidPublicKey
    })
}

/// Packs a signature into 64 bytes: packed R8 (32 bytes) || S (32 bytes, little-endian).
///
/// Fails when R8 is off the curve or S is not below the subgroup order. The
/// signature is not verified.
pub fn pack_signature(signature: &Signature) -> Result<[u8; PACKED_SIGNATURE_LEN]> {
    if signature.s >= *SUBGROUP_ORDER {
        return Err(EddsaError::InvalidSignature);
    }

    let packed_r8 = pack_point(&signature.r8).map_err(|_| EddsaError::InvalidSignature)?;
    let s_bytes = pack_scalar(&signature.s)?;

    let mut packed = [0u8; PACKED_SIGNATURE_LEN];
    packed[..PACKED_LEN].copy_from_slice(&packed_r8);
    packed[PACKED_LEN..].copy_from_slice(&s_bytes);

    Ok(packed)
}

/// Unpacks a signature from a 64-byte buffer.
///
/// Only R8 is validated. S is returned as stored, even when it is not below
/// the subgroup order; [`verify_signature`] rejects such values.
pub fn unpack_signature(packed: &[u8]) -> Result<Signature> {
    if packed.len() != PACKED_SIGNATURE_LEN {
        return Err(EddsaError::Length {
            expected: PACKED_SIGNATURE_LEN,
            actual: packed.len(),
        });
    }

    let mut r8_bytes = [0u8; PACKED_LEN];
    r8_bytes.copy_from_slice(&packed[..PACKED_LEN]);
    let mut s_bytes = [0u8; PACKED_LEN];
    s_bytes.copy_from_slice(&packed[PACKED_LEN..]);

    let r8 = unpack_point(&r8_bytes)?;
    let s = unpack_scalar(&s_bytes);

    Ok(Signature { r8, s })
}
