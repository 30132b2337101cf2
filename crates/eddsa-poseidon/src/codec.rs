//! Canonical compression of curve points and scalars.
//!
//! A packed point is 32 bytes: the little-endian `y` coordinate (254 bits)
//! with the sign of `x` stored in the most significant bit of byte 31.
//! Scalars are plain 32-byte little-endian integers.

use crate::error::{EddsaError, Result};
use crate::utils::to_le_fixed;
use ark_ff::{Field, Zero};
use baby_jubjub::{
    biguint_to_fq, fq_to_biguint, in_curve, is_negative, EdwardsAffine, Fq, SNARK_FIELD_SIZE,
};
use num_bigint::BigUint;
use tracing::trace;

/// Width of a packed point or scalar
pub const PACKED_LEN: usize = 32;

const SIGN_MASK: u8 = 0x80;

// a = 168700, d = 168696
const COEFF_A: u64 = 168700;
const COEFF_D: u64 = 168696;

/// Compresses an on-curve point to 32 bytes.
pub fn pack_point(point: &EdwardsAffine) -> Result<[u8; PACKED_LEN]> {
    if !in_curve(point) {
        return Err(EddsaError::invalid_point("point is not on the curve"));
    }

    let mut packed = to_le_fixed::<PACKED_LEN>(&fq_to_biguint(&point.y))
        .ok_or_else(|| EddsaError::invalid_point("y coordinate exceeds 32 bytes"))?;

    if is_negative(&point.x) {
        packed[31] |= SIGN_MASK;
    }

    Ok(packed)
}

/// Compresses an on-curve point and reads the 32 bytes as a little-endian integer.
pub fn pack_point_to_biguint(point: &EdwardsAffine) -> Result<BigUint> {
    Ok(BigUint::from_bytes_le(&pack_point(point)?))
}

/// Decompresses 32 bytes into a curve point.
///
/// Recovers `x` from `x^2 = (1 - y^2) / (a - d*y^2)` and picks the root whose
/// sign matches the stored bit.
pub fn unpack_point(packed: &[u8; PACKED_LEN]) -> Result<EdwardsAffine> {
    let x_sign = packed[31] & SIGN_MASK != 0;
    let mut y_bytes = *packed;
    y_bytes[31] &= !SIGN_MASK;

    let y_value = BigUint::from_bytes_le(&y_bytes);
    if y_value >= *SNARK_FIELD_SIZE {
        trace!("rejecting packed point: y coordinate out of range");
        return Err(EddsaError::invalid_point("y coordinate out of range"));
    }
    let y = biguint_to_fq(&y_value);

    let y2 = y.square();
    let denominator = Fq::from(COEFF_A) - Fq::from(COEFF_D) * y2;
    let inverse = denominator
        .inverse()
        .ok_or_else(|| EddsaError::invalid_point("denominator is zero"))?;
    let x2 = (Fq::ONE - y2) * inverse;

    let root = x2.sqrt().ok_or_else(|| {
        trace!("rejecting packed point: x^2 is not a quadratic residue");
        EddsaError::invalid_point("no x coordinate for this y")
    })?;

    let x = if root.is_zero() {
        if x_sign {
            return Err(EddsaError::invalid_point("sign bit set for x = 0"));
        }
        root
    } else if is_negative(&root) == x_sign {
        root
    } else {
        -root
    };

    let point = EdwardsAffine::new_unchecked(x, y);
    if !in_curve(&point) {
        return Err(EddsaError::invalid_point("unpacked point is not on the curve"));
    }

    Ok(point)
}

/// Decompresses a packed point given as an integer.
pub fn unpack_point_biguint(packed: &BigUint) -> Result<EdwardsAffine> {
    let bytes = to_le_fixed::<PACKED_LEN>(packed)
        .ok_or_else(|| EddsaError::invalid_point("packed value exceeds 32 bytes"))?;
    unpack_point(&bytes)
}

/// Encodes a scalar as 32 little-endian bytes. No range check against the
/// subgroup order is made.
pub fn pack_scalar(scalar: &BigUint) -> Result<[u8; PACKED_LEN]> {
    to_le_fixed::<PACKED_LEN>(scalar).ok_or(EddsaError::ScalarOverflow)
}

/// Decodes 32 little-endian bytes into a scalar, without range check.
pub fn unpack_scalar(bytes: &[u8; PACKED_LEN]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}
