//! Support for GOST R 34.10-2001 signing.
//!
//! ## Algorithm
//!
//! ```text
//! 1. Compute e = H(M) interpreted as a little-endian integer, mod q
//! 2. Pick a random nonce k in [1, q-1] via a random number generator
//! 3. Compute the elliptic curve point C = kG, r = x(C) mod q;
//!    return to 2 if r = 0
//! 4. Compute s = (ke + dr) mod q; return to 2 if s = 0
//! 5. The digital signature of M is (r, s)
//! ```

#![allow(non_snake_case)]

use super::{digest_scalar, BasePointMultiplier, GeneratorMultiplier, Signature, VerifyingKey};
use crate::{FieldBytes, NonZeroScalar, PublicKey, Scalar, SecretKey};
use core::fmt::{self, Debug};
use elliptic_curve::{
    ff::PrimeField,
    ops::Reduce,
    point::AffineCoordinates,
    subtle::{Choice, ConstantTimeEq},
};
use gost94::{digest::Digest, Gost94CryptoPro};
use signature::{
    hazmat::RandomizedPrehashSigner, rand_core::CryptoRngCore, Error, KeypairRef,
    RandomizedSigner, Result,
};

#[cfg(feature = "getrandom")]
use {
    rand_core::OsRng,
    signature::{hazmat::PrehashSigner, Signer},
};

/// GOST R 34.10-2001 secret key used for signing messages and producing
/// signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`RandomizedSigner`]: sign a message using this key and a provided
///   cryptographically secure random number generator
/// - [`RandomizedPrehashSigner`]: sign the low-level raw output bytes of a
///   message digest
///
/// With the `getrandom` feature enabled, [`Signer`] and [`PrehashSigner`]
/// are also available; they draw the per-signature nonce from the operating
/// system's random number generator.
#[derive(Clone)]
pub struct SigningKey<M = GeneratorMultiplier> {
    /// Secret scalar.
    secret_scalar: NonZeroScalar,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,

    /// Base-point multiplication strategy used for computing `k·G`.
    multiplier: M,
}

impl SigningKey {
    /// Create a signing key from a secret key.
    pub fn new(secret_key: &SecretKey) -> Result<Self> {
        Self::from_nonzero_scalar(secret_key.to_nonzero_scalar())
    }

    /// Parse signing key from big endian-encoded bytes.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        Self::from_slice(bytes)
    }

    /// Parse signing key from big endian-encoded byte slice containing a
    /// secret scalar value.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let secret_scalar = NonZeroScalar::try_from(slice).map_err(|_| Error::new())?;
        Self::from_nonzero_scalar(secret_scalar)
    }

    /// Create a signing key from a non-zero scalar.
    pub fn from_nonzero_scalar(secret_scalar: NonZeroScalar) -> Result<Self> {
        let public_key = PublicKey::from_secret_scalar(&secret_scalar);
        let verifying_key = VerifyingKey::new(public_key)?;
        Ok(Self {
            secret_scalar,
            verifying_key,
            multiplier: GeneratorMultiplier,
        })
    }
}

impl<M> SigningKey<M> {
    /// Replace the base-point multiplication strategy used when signing,
    /// leaving the key material untouched.
    pub fn with_multiplier<N: BasePointMultiplier>(self, multiplier: N) -> SigningKey<N> {
        SigningKey {
            secret_scalar: self.secret_scalar,
            verifying_key: self.verifying_key,
            multiplier,
        }
    }

    /// Serialize as bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_scalar.to_bytes()
    }

    /// Borrow the secret [`NonZeroScalar`] value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_nonzero_scalar(&self) -> &NonZeroScalar {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

//
// `*Signer` trait impls
//

impl<M: BasePointMultiplier> RandomizedPrehashSigner<Signature> for SigningKey<M> {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> Result<Signature> {
        let e = digest_scalar(prehash)?;
        let d = self.secret_scalar;

        // Rejection sampling: draw a fresh nonce until the resulting r and s
        // are both non-zero. The loop is unbounded per the standard; capping
        // it would couple the iteration count to the key material.
        loop {
            let mut k_bytes = FieldBytes::default();
            rng.try_fill_bytes(&mut k_bytes).map_err(|_| Error::new())?;

            let k = match Option::<Scalar>::from(Scalar::from_repr(k_bytes)) {
                Some(k) if !bool::from(k.is_zero()) => k,
                _ => continue,
            };

            let C = self.multiplier.mul_base_point(&k).to_affine();
            let r = Scalar::reduce_bytes(&C.x());
            if r.is_zero().into() {
                continue;
            }

            let s = k * e + r * *d;
            if s.is_zero().into() {
                continue;
            }

            return Signature::from_scalars(r, s);
        }
    }
}

impl<M: BasePointMultiplier> RandomizedSigner<Signature> for SigningKey<M> {
    fn try_sign_with_rng(&self, rng: &mut impl CryptoRngCore, msg: &[u8]) -> Result<Signature> {
        let hash = Gost94CryptoPro::digest(msg);
        self.sign_prehash_with_rng(rng, &hash)
    }
}

#[cfg(feature = "getrandom")]
impl<M: BasePointMultiplier> PrehashSigner<Signature> for SigningKey<M> {
    fn sign_prehash(&self, prehash: &[u8]) -> Result<Signature> {
        self.sign_prehash_with_rng(&mut OsRng, prehash)
    }
}

#[cfg(feature = "getrandom")]
impl<M: BasePointMultiplier> Signer<Signature> for SigningKey<M> {
    fn try_sign(&self, msg: &[u8]) -> Result<Signature> {
        self.try_sign_with_rng(&mut OsRng, msg)
    }
}

//
// Other trait impls
//

impl<M> AsRef<VerifyingKey> for SigningKey<M> {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl<M> ConstantTimeEq for SigningKey<M> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_scalar.ct_eq(&other.secret_scalar)
    }
}

impl<M> Debug for SigningKey<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison
impl<M> Eq for SigningKey<M> {}
impl<M> PartialEq for SigningKey<M> {
    fn eq(&self, other: &SigningKey<M>) -> bool {
        self.ct_eq(other).into()
    }
}

impl<M: BasePointMultiplier> KeypairRef for SigningKey<M> {
    type VerifyingKey = VerifyingKey;
}
