//! Constants and conversions shared by Baby Jubjub consumers

use ark_ed_on_bn254::{Fq, Fr as EdFr};
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Order of the base field of Baby Jubjub (the SNARK field size).
/// This is the same as the scalar field order r of BN254/BN128
pub static SNARK_FIELD_SIZE: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("Failed to parse SNARK_FIELD_SIZE")
});

/// Prime order `l` of the subgroup generated by Base8
pub static SUBGROUP_ORDER: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"2736030358979909402780800718157159386076813972158567259200215660948447373041",
        10,
    )
    .expect("Failed to parse SUBGROUP_ORDER")
});

/// Reduce a BigUint into the base field
pub fn biguint_to_fq(value: &BigUint) -> Fq {
    Fq::from_le_bytes_mod_order(&value.to_bytes_le())
}

/// Canonical integer value of a base field element
pub fn fq_to_biguint(value: &Fq) -> BigUint {
    BigUint::from_bytes_le(&value.into_bigint().to_bytes_le())
}

/// Reduce a BigUint modulo the subgroup order
pub fn biguint_to_edfr(value: &BigUint) -> EdFr {
    EdFr::from_le_bytes_mod_order(&value.to_bytes_le())
}

/// Canonical integer value of a scalar field element
pub fn edfr_to_biguint(value: &EdFr) -> BigUint {
    BigUint::from_bytes_le(&value.into_bigint().to_bytes_le())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snark_field_size_matches_fq_modulus() {
        let modulus = BigUint::from_bytes_le(&Fq::MODULUS.to_bytes_le());
        assert_eq!(*SNARK_FIELD_SIZE, modulus);
    }

    #[test]
    fn test_subgroup_order_matches_edfr_modulus() {
        let modulus = BigUint::from_bytes_le(&EdFr::MODULUS.to_bytes_le());
        assert_eq!(*SUBGROUP_ORDER, modulus);
    }

    #[test]
    fn test_fq_conversion_reduces() {
        let value = BigUint::from(12345u64);
        assert_eq!(fq_to_biguint(&biguint_to_fq(&value)), value);

        let wrapped = &*SNARK_FIELD_SIZE + 7u32;
        assert_eq!(fq_to_biguint(&biguint_to_fq(&wrapped)), BigUint::from(7u32));
    }

    #[test]
    fn test_edfr_conversion_reduces() {
        let wrapped = &*SUBGROUP_ORDER + 3u32;
        assert_eq!(edfr_to_biguint(&biguint_to_edfr(&wrapped)), BigUint::from(3u32));
    }
}
