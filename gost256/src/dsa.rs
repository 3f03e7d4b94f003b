//! GOST R 34.10-2001 digital signature algorithm.
//!
//! ## Usage
//!
//! NOTE: requires the `dsa` crate feature enabled, and `rand_core` dependency
//! with `getrandom` feature enabled.
//!
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand_core::OsRng; // requires 'getrandom` feature
//! use gost256::{
//!     dsa::{Signature, SigningKey, signature::Signer},
//!     SecretKey
//! };
//!
//! // Signing
//! let secret_key = SecretKey::try_from_rng(&mut OsRng)?; // serialize with `::to_bytes()`
//! let signing_key = SigningKey::new(&secret_key)?;
//! let verifying_key_bytes = signing_key.verifying_key().to_sec1_bytes();
//! let message = b"test message";
//! let signature: Signature = signing_key.sign(message);
//!
//! // Verifying
//! use gost256::dsa::{VerifyingKey, signature::Verifier};
//!
//! let verifying_key = VerifyingKey::from_sec1_bytes(&verifying_key_bytes)?;
//! verifying_key.verify(message, &signature)?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "arithmetic")]
mod signing;
#[cfg(feature = "arithmetic")]
mod verifying;

pub use signature;

#[cfg(feature = "arithmetic")]
pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{FieldBytes, Gost256, NonZeroScalar};
use core::fmt::{self, Debug};
use signature::{Error, Result, SignatureEncoding};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "arithmetic")]
use {
    crate::{ProjectivePoint, Scalar},
    elliptic_curve::{
        array::typenum::Unsigned,
        ops::{MulByGenerator, Reduce},
        Curve,
    },
};

/// GOST R 34.10-2001 signature serialized as bytes.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// Primitive scalar type (works without the `arithmetic` feature).
type ScalarPrimitive = elliptic_curve::ScalarPrimitive<Gost256>;

/// GOST R 34.10-2001 signature.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Signature {
    r: ScalarPrimitive,
    s: ScalarPrimitive,
}

impl Signature {
    /// Size of an encoded GOST R 34.10-2001 signature in bytes.
    pub const BYTE_SIZE: usize = 64;

    /// Parse a signature from a byte array.
    ///
    /// Both scalars must lie in `[1, q − 1]`; anything else is rejected, so
    /// out-of-range `r`/`s` never reach the verification equations.
    pub fn from_bytes(bytes: &SignatureBytes) -> Result<Self> {
        let (r_bytes, s_bytes) = bytes.split_at(Self::BYTE_SIZE / 2);
        let r = ScalarPrimitive::from_slice(r_bytes).map_err(|_| Error::new())?;
        let s = ScalarPrimitive::from_slice(s_bytes).map_err(|_| Error::new())?;

        if r.is_zero().into() || s.is_zero().into() {
            return Err(Error::new());
        }

        Ok(Self { r, s })
    }

    /// Parse a signature from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SignatureBytes::try_from(bytes)
            .map_err(|_| Error::new())?
            .try_into()
    }

    /// Create a [`Signature`] from the serialized `r` and `s` scalar values
    /// which comprise the signature.
    #[inline]
    pub fn from_scalars(r: impl Into<FieldBytes>, s: impl Into<FieldBytes>) -> Result<Self> {
        Self::try_from(r.into().concat(s.into()).as_slice())
    }

    /// Serialize this signature as bytes: big-endian `r` followed by
    /// big-endian `s`.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut ret = [0; Self::BYTE_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(Self::BYTE_SIZE / 2);
        r_bytes.copy_from_slice(&self.r.to_bytes());
        s_bytes.copy_from_slice(&self.s.to_bytes());
        ret
    }

    /// Bytes for the `r` component of a signature.
    pub fn r_bytes(&self) -> FieldBytes {
        self.r.to_bytes()
    }

    /// Bytes for the `s` component of a signature.
    pub fn s_bytes(&self) -> FieldBytes {
        self.s.to_bytes()
    }

    /// Convert this signature into a byte vector.
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

#[cfg(feature = "arithmetic")]
impl Signature {
    /// Get the `r` component of this signature.
    pub fn r(&self) -> NonZeroScalar {
        #[allow(clippy::unwrap_used)] // checked at parse time
        NonZeroScalar::new(self.r.into()).unwrap()
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> NonZeroScalar {
        #[allow(clippy::unwrap_used)] // checked at parse time
        NonZeroScalar::new(self.s.into()).unwrap()
    }

    /// Split the signature into its `r` and `s` scalars.
    pub fn split_scalars(&self) -> (NonZeroScalar, NonZeroScalar) {
        (self.r(), self.s())
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gost256::dsa::Signature(")?;

        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        Self::BYTE_SIZE
    }
}

impl TryFrom<SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(signature: SignatureBytes) -> Result<Signature> {
        Signature::from_bytes(&signature)
    }
}

impl TryFrom<&SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(signature: &SignatureBytes) -> Result<Signature> {
        Signature::from_bytes(signature)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_slice(bytes)
    }
}

/// Strategy for computing the per-signature point `k·G` from the base point.
///
/// Signing is the only operation that multiplies the generator by a secret
/// scalar, and the best way to do so depends on the deployment: the default
/// [`GeneratorMultiplier`] reuses the precomputed generator machinery, which
/// amortizes well when one key signs many messages. An alternative strategy
/// can be swapped in via [`SigningKey::with_multiplier`] without touching any
/// of the protocol logic.
#[cfg(feature = "arithmetic")]
pub trait BasePointMultiplier {
    /// Compute `k·G` for the curve generator `G`.
    fn mul_base_point(&self, k: &Scalar) -> ProjectivePoint;
}

/// Default base-point multiplication strategy, backed by the generator
/// multiplication path of the underlying curve arithmetic (precomputed
/// tables when the `precomputed-tables` feature is enabled).
#[cfg(feature = "arithmetic")]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GeneratorMultiplier;

#[cfg(feature = "arithmetic")]
impl BasePointMultiplier for GeneratorMultiplier {
    fn mul_base_point(&self, k: &Scalar) -> ProjectivePoint {
        ProjectivePoint::mul_by_generator(k)
    }
}

/// Convert a message digest to a scalar.
///
/// GOST R 34.10-2001 interprets the digest as a little-endian integer, so the
/// bytes are reversed before being read as a big-endian magnitude and reduced
/// modulo the group order.
#[cfg(feature = "arithmetic")]
pub(crate) fn digest_scalar(prehash: &[u8]) -> Result<Scalar> {
    if prehash.len() != <Gost256 as Curve>::FieldBytesSize::USIZE {
        return Err(Error::new());
    }

    let mut e_bytes = FieldBytes::default();
    e_bytes.copy_from_slice(prehash);
    e_bytes.reverse();
    Ok(Scalar::reduce_bytes(&e_bytes))
}
