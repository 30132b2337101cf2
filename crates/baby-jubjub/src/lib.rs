//! Baby Jubjub Elliptic Curve
//!
//! This library provides Baby Jubjub curve operations compatible with EIP-2494.
//! Baby Jubjub is a twisted Edwards elliptic curve defined over the BN254 scalar field.
//!
//! It is deliberately small: the curve configuration, the prime-order base point
//! `Base8`, point arithmetic, the curve membership test and the sign convention
//! used by point compression.

mod constants;
mod error;

pub use constants::{
    biguint_to_edfr, biguint_to_fq, edfr_to_biguint, fq_to_biguint, SNARK_FIELD_SIZE,
    SUBGROUP_ORDER,
};
pub use error::{BabyJubjubError, Result};

use ark_ec::{
    models::CurveConfig,
    twisted_edwards::{Affine, MontCurveConfig, Projective, TECurveConfig},
    CurveGroup, PrimeGroup,
};
use ark_ff::{Field, MontFp, PrimeField};
use num_bigint::BigUint;

// Re-export ark_ed_on_bn254 types for convenience
pub use ark_ed_on_bn254::{Fq, Fr as EdFr};

/// Type aliases for Edwards curve points
pub type EdwardsAffine = Affine<BabyJubjubConfig>;
pub type EdwardsProjective = Projective<BabyJubjubConfig>;

/// Baby Jubjub curve configuration
/// Compatible with EIP-2494
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BabyJubjubConfig;

impl CurveConfig for BabyJubjubConfig {
    type BaseField = Fq;
    type ScalarField = EdFr;

    // h = 8
    const COFACTOR: &'static [u64] = &[8];

    // h^(-1) (mod r)
    const COFACTOR_INV: EdFr =
        MontFp!("2394026564107420727433200628387514462817212225638746351800188703329891451411");
}

// Twisted Edwards form
// ax^2 + y^2 = 1 + dx^2y^2
impl TECurveConfig for BabyJubjubConfig {
    // a = 168700
    const COEFF_A: Fq = MontFp!("168700");

    #[inline(always)]
    fn mul_by_a(elem: Self::BaseField) -> Self::BaseField {
        elem * <BabyJubjubConfig as TECurveConfig>::COEFF_A
    }

    // d = 168696
    const COEFF_D: Fq = MontFp!("168696");

    // Base8 is the generator so that all arithmetic stays in the prime-order subgroup
    const GENERATOR: EdwardsAffine = EdwardsAffine::new_unchecked(BASE_X, BASE_Y);

    type MontCurveConfig = BabyJubjubConfig;
}

// Montgomery form
// By^2 = x^3 + A x^2 + x
impl MontCurveConfig for BabyJubjubConfig {
    // A = 168698
    const COEFF_A: Fq = MontFp!("168698");
    // B = 1
    const COEFF_B: Fq = Fq::ONE;

    type TECurveConfig = BabyJubjubConfig;
}

/// Generator point x-coordinate (full group of order 8 * l)
pub const GENERATOR_X: Fq =
    MontFp!("995203441582195749578291179787384436505546430278305826713579947235728471134");
/// Generator point y-coordinate (full group of order 8 * l)
pub const GENERATOR_Y: Fq =
    MontFp!("5472060717959818805561601436314318772137091100104008585924551046643952123905");

/// Base8 x-coordinate (8 * generator)
pub const BASE_X: Fq =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");
/// Base8 y-coordinate (8 * generator)
pub const BASE_Y: Fq =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");

/// Base8 point, the generator of the prime-order subgroup.
pub fn base8() -> EdwardsAffine {
    EdwardsAffine::new_unchecked(BASE_X, BASE_Y)
}

/// The neutral element `(0, 1)`.
pub fn identity() -> EdwardsAffine {
    EdwardsAffine::zero()
}

/// Performs point addition on the Baby Jubjub elliptic curve
/// Let P1 = (x1, y1) and P2 = (x2, y2) be two arbitrary points of the curve.
/// Then P1 + P2 = (x3, y3) is calculated as:
/// x3 = (x1*y2 + y1*x2)/(1 + d*x1*x2*y1*y2)
/// y3 = (y1*y2 - a*x1*x2)/(1 - d*x1*x2*y1*y2)
pub fn add_point(p1: &EdwardsAffine, p2: &EdwardsAffine) -> EdwardsAffine {
    (*p1 + *p2).into_affine()
}

/// Multiplies `base` by the scalar `e`.
pub fn mul_point_escalar(base: &EdwardsAffine, e: EdFr) -> EdwardsAffine {
    let projective: EdwardsProjective = (*base).into();
    (projective * e).into_affine()
}

/// Multiplies `point` by the cofactor 8 as an integer, which removes any
/// small-order component.
pub fn mul_by_cofactor(point: &EdwardsAffine) -> EdwardsAffine {
    EdwardsProjective::from(*point)
        .mul_bigint(BabyJubjubConfig::COFACTOR)
        .into_affine()
}

/// Checks the curve equation `ax^2 + y^2 = 1 + dx^2y^2`.
///
/// This does not check subgroup membership.
pub fn in_curve(point: &EdwardsAffine) -> bool {
    point.is_on_curve()
}

/// Sign convention for compression: a field element is "negative" when its
/// canonical representative is greater than (p - 1) / 2.
pub fn is_negative(value: &Fq) -> bool {
    value.into_bigint() > Fq::MODULUS_MINUS_ONE_DIV_TWO
}

/// Coordinates of a point as decimal strings `[x, y]`.
pub fn point_to_decimal(point: &EdwardsAffine) -> [String; 2] {
    [
        fq_to_biguint(&point.x).to_string(),
        fq_to_biguint(&point.y).to_string(),
    ]
}

/// Builds a point from decimal string coordinates.
///
/// Each coordinate must be a canonical field element. Curve membership is
/// NOT checked here; callers that accept untrusted points use [`in_curve`].
pub fn point_from_decimal(x: &str, y: &str) -> Result<EdwardsAffine> {
    Ok(EdwardsAffine::new_unchecked(
        parse_coordinate(x)?,
        parse_coordinate(y)?,
    ))
}

fn parse_coordinate(value: &str) -> Result<Fq> {
    let parsed = BigUint::parse_bytes(value.trim().as_bytes(), 10)
        .ok_or_else(|| BabyJubjubError::InvalidCoordinate(value.to_string()))?;
    if parsed >= *SNARK_FIELD_SIZE {
        return Err(BabyJubjubError::CoordinateOutOfRange(value.to_string()));
    }
    Ok(biguint_to_fq(&parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{BigInteger, Zero};

    #[test]
    fn test_base_point_choice() {
        let g = EdwardsAffine::new_unchecked(GENERATOR_X, GENERATOR_Y);

        let cofactor = EdFr::from_be_bytes_mod_order(&[BabyJubjubConfig::COFACTOR[0] as u8]);
        let calculated_base_point = g * cofactor;

        assert_eq!(calculated_base_point, EdwardsProjective::from(base8()));
    }

    #[test]
    fn test_base8_order() {
        // l * Base8 is the neutral element; l wraps to zero in EdFr
        let order = biguint_to_edfr(&SUBGROUP_ORDER);
        assert!(order.is_zero());

        let l_minus_one = biguint_to_edfr(&(&*SUBGROUP_ORDER - 1u32));
        let almost = mul_point_escalar(&base8(), l_minus_one);
        assert_eq!(add_point(&almost, &base8()), identity());
    }

    #[test]
    fn test_base8_on_curve() {
        assert!(in_curve(&base8()));
        assert!(in_curve(&identity()));
    }

    #[test]
    fn test_add_point() {
        let p1 = EdwardsAffine::new_unchecked(
            MontFp!(
                "17777552123799933955779906779655732241715742912184938656739573121738514868268"
            ),
            MontFp!("2626589144620713026669568689430873010625803728049924121243784502389097019475"),
        );
        let p2 = EdwardsAffine::new_unchecked(
            MontFp!(
                "16540640123574156134436876038791482806971768689494387082833631921987005038935"
            ),
            MontFp!(
                "20819045374670962167435360035096875258406992893633759881276124905556507972311"
            ),
        );

        let result = add_point(&p1, &p2);
        let expected = p1 + p2;

        assert_eq!(EdwardsProjective::from(result), expected);
        assert!(in_curve(&result));
    }

    #[test]
    fn test_add_identity() {
        let p = mul_point_escalar(&base8(), EdFr::from(5u64));
        assert_eq!(add_point(&p, &identity()), p);
    }

    #[test]
    fn test_mul_point_escalar() {
        let scalar = EdFr::from(324u64);

        let result = mul_point_escalar(&base8(), scalar);
        let expected = EdwardsProjective::from(base8()) * scalar;

        assert_eq!(EdwardsProjective::from(result), expected);
        assert!(in_curve(&result));
    }

    #[test]
    fn test_fixed_scalar_111111() {
        let public_key = mul_point_escalar(&base8(), EdFr::from(111111u64));

        assert_eq!(
            point_to_decimal(&public_key),
            [
                "9221645876368174110961758157755419489792970878899130950662684756868821534630"
                    .to_string(),
                "21677522106472114192907581749333412416696788200272735806441075884691267290092"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_mul_by_cofactor_clears_torsion() {
        // (0, -1) has order 2
        let torsion = EdwardsAffine::new_unchecked(Fq::zero(), -Fq::ONE);
        assert!(in_curve(&torsion));
        assert_eq!(mul_by_cofactor(&torsion), identity());

        let point = mul_point_escalar(&base8(), EdFr::from(12345u64));
        let mixed = add_point(&point, &torsion);
        assert_ne!(mixed, point);
        assert_eq!(
            mul_by_cofactor(&mixed),
            mul_point_escalar(&point, EdFr::from(8u64))
        );
    }

    #[test]
    fn test_in_curve_rejects_off_curve_point() {
        let invalid_point = EdwardsAffine::new_unchecked(Fq::ONE, Fq::zero());
        assert!(!in_curve(&invalid_point));
    }

    #[test]
    fn test_is_negative_boundary() {
        let half = BigUint::from_bytes_le(&Fq::MODULUS_MINUS_ONE_DIV_TWO.to_bytes_le());
        assert!(!is_negative(&biguint_to_fq(&half)));
        assert!(is_negative(&biguint_to_fq(&(&half + 1u32))));
        assert!(!is_negative(&Fq::zero()));
        assert!(is_negative(&-Fq::ONE));
    }

    #[test]
    fn test_point_decimal_roundtrip() {
        let point = mul_point_escalar(&base8(), EdFr::from(42u64));
        let [x, y] = point_to_decimal(&point);
        assert_eq!(point_from_decimal(&x, &y).unwrap(), point);
    }

    #[test]
    fn test_point_from_decimal_rejects_garbage() {
        assert_eq!(
            point_from_decimal("12ab", "1"),
            Err(BabyJubjubError::InvalidCoordinate("12ab".to_string()))
        );

        let modulus = SNARK_FIELD_SIZE.to_string();
        assert_eq!(
            point_from_decimal("0", &modulus),
            Err(BabyJubjubError::CoordinateOutOfRange(modulus.clone()))
        );
    }
}
