//! Pure Rust implementation of group operations on the GOST R 34.10-2001
//! CryptoPro-A curve.
//!
//! Curve parameters can be found in [RFC 4357 § 11.4]:
//! id-GostR3410-2001-CryptoPro-A-ParamSet.
//!
//! [RFC 4357 § 11.4]: https://datatracker.ietf.org/doc/html/rfc4357#section-11.4

pub(crate) mod field;
pub(crate) mod scalar;

pub use self::scalar::Scalar;

use self::field::FieldElement;
use crate::Gost256;
use elliptic_curve::{CurveArithmetic, PrimeCurveArithmetic};
use primeorder::{point_arithmetic, PrimeCurveParams};

/// Elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<Gost256>;

/// Elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<Gost256>;

impl CurveArithmetic for Gost256 {
    type AffinePoint = AffinePoint;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl PrimeCurveArithmetic for Gost256 {
    type CurveGroup = ProjectivePoint;
}

/// Adapted from [RFC 4357 § 11.4]: id-GostR3410-2001-CryptoPro-A-ParamSet.
///
/// [RFC 4357 § 11.4]: https://datatracker.ietf.org/doc/html/rfc4357#section-11.4
impl PrimeCurveParams for Gost256 {
    type FieldElement = FieldElement;
    type PointArithmetic = point_arithmetic::EquationAIsMinusThree;

    /// a = -3 (0xFFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFD94)
    const EQUATION_A: FieldElement = FieldElement::from_u64(3).neg();

    /// b = 166 (0xA6)
    const EQUATION_B: FieldElement = FieldElement::from_u64(166);

    /// Base point.
    ///
    /// ```text
    /// Gₓ = 0x00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000001
    /// Gᵧ = 0x8D91E471 E0989CDA 27DF505A 453F2B76 35294F2D DF23E3B1 22ACC99C 9E9F1E14
    /// ```
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::ONE,
        FieldElement::from_hex_vartime(
            "8d91e471e0989cda27df505a453f2b7635294f2ddf23e3b122acc99c9e9f1e14",
        ),
    );
}
