//! Support for verifying GOST R 34.10-2001 signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. Verify that r and s lie in [1, q-1]; verification failed if not
//! 2. Compute e = H(M) interpreted as a little-endian integer, mod q,
//!    and v = e⁻¹ mod q
//! 3. Compute z1 = sv mod q and z2 = -rv mod q
//! 4. Compute the point C = z1·G + z2·Q; verification failed if C is the
//!    point at infinity
//! 5. Verification passes iff x(C) mod q equals r
//! ```

#![allow(non_snake_case)]

use super::{digest_scalar, Signature};
use crate::{AffinePoint, EncodedPoint, Gost256, ProjectivePoint, PublicKey, Scalar};
use elliptic_curve::{
    ops::{LinearCombination, Reduce},
    point::AffineCoordinates,
    sec1::ToEncodedPoint,
    Group,
};
use gost94::{digest::Digest, Gost94CryptoPro};
use signature::{hazmat::PrehashVerifier, Error, Result, Verifier};

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// GOST R 34.10-2001 public key used for verifying signatures are valid for
/// a given message.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature
/// - [`PrehashVerifier`]: verify the low-level raw output bytes of a message digest
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Signer's public key.
    public_key: PublicKey,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a public key.
    pub fn new(public_key: PublicKey) -> Result<Self> {
        Ok(Self { public_key })
    }

    /// Initialize [`VerifyingKey`] from a SEC1-encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let public_key = PublicKey::from_sec1_bytes(bytes).map_err(|_| Error::new())?;
        Self::new(public_key)
    }

    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns an [`Error`] if the given affine point is the additive identity
    /// (a.k.a. point at infinity).
    pub fn from_affine(affine: AffinePoint) -> Result<Self> {
        let public_key = PublicKey::from_affine(affine).map_err(|_| Error::new())?;
        Self::new(public_key)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        self.public_key.as_affine()
    }

    /// Convert this [`VerifyingKey`] into the
    /// `Elliptic-Curve-Point-to-Octet-String` encoding described in
    /// SEC 1: Elliptic Curve Cryptography (Version 2.0) section 2.3.3
    /// (page 10).
    ///
    /// <http://www.secg.org/sec1-v2.pdf>
    #[cfg(feature = "alloc")]
    pub fn to_sec1_bytes(&self) -> Box<[u8]> {
        self.public_key.to_sec1_bytes()
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> Result<()> {
        // 1. r and s in [1, q-1]: checked when the signature was parsed.
        let (r, s) = signature.split_scalars();

        // 2. e = H(M) as a little-endian integer mod q, v = e⁻¹ mod q.
        //
        // A digest congruent to zero has no inverse; such signatures cannot
        // verify and are rejected here.
        let e = digest_scalar(prehash)?;
        let v = Option::<Scalar>::from(e.invert()).ok_or_else(Error::new)?;

        // 3. z1 = sv mod q, z2 = -rv mod q.
        let z1 = *s * v;
        let z2 = -(*r * v);

        // 4. C = z1·G + z2·Q.
        let C = ProjectivePoint::lincomb(&[
            (ProjectivePoint::generator(), z1),
            (ProjectivePoint::from(&self.public_key), z2),
        ]);

        if C.is_identity().into() {
            return Err(Error::new());
        }

        // 5. Valid iff x(C) mod q = r.
        if Scalar::reduce_bytes(&C.to_affine().x()) == *r {
            Ok(())
        } else {
            Err(Error::new())
        }
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> Result<()> {
        let hash = Gost94CryptoPro::digest(msg);
        self.verify_prehash(&hash, signature)
    }
}

//
// Other trait impls
//

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifying_key: &VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl ToEncodedPoint<Gost256> for VerifyingKey {
    fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        self.as_affine().to_encoded_point(compress)
    }
}
