//! GOST R 34.10-2001 signature tests.

#![cfg(all(feature = "dsa", feature = "getrandom"))]

use elliptic_curve::ops::Reduce;
use gost256::{
    dsa::{
        signature::{
            hazmat::{PrehashSigner, PrehashVerifier, RandomizedPrehashSigner},
            Signer, Verifier,
        },
        BasePointMultiplier, Signature, SigningKey, VerifyingKey,
    },
    NonZeroScalar, ProjectivePoint, Scalar,
};
use hex_literal::hex;
use proptest::prelude::*;
use rand_core::{CryptoRng, RngCore};
use std::collections::BTreeSet;

/// Secret scalar for the signing-side test vector.
const D_BYTES: [u8; 32] = hex!("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20");

/// Nonce bytes drawn by [`FixedRng`] for the signing-side test vector.
const K_BYTES: [u8; 32] = hex!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa55555555555555555555555555555555");

/// 32-byte message digest (any preimage; the prehash layer is hash-agnostic).
const DIGEST: [u8; 32] = hex!("54edb9793b75080cfe8573e6e9520db419fb311368102746e90af006ce764e6c");

/// Expected signature for (D_BYTES, K_BYTES, DIGEST), computed independently
/// with an arbitrary-precision model of the CryptoPro-A curve.
const SIG: [u8; 64] = hex!(
    "4efe2db0fd23eced00c2c4b2a0c4ab39dfa69c4bffc10c298eae8ac6c9db4240" // r
    "c18a82918ec9bd809e62580ba22c755e49078675e3cb44ddb64b95af87367f7d" // s
);

/// Uncompressed SEC1 encoding of the public key matching `D_BYTES`.
const PUBLIC_KEY: [u8; 65] = hex!(
    "04aa35ef69a2f782b0c399c4899854b621035d4cbec229f6f3d3d7fd99b4ee7b1b"
    "ff9c1a2a6673e1b7092fa4f4eed0196c00eb16665c33090f1f6205ffc80c2688"
);

/// Verify-only vector: public key, digest, and matching signature.
const PUBLIC_KEY_2: [u8; 65] = hex!(
    "04039bd00c1f35c517b0b3c30e440d9a9727e8550de44dc941830ad2969f4c0229"
    "204367036647895c3aad5d172e72ebfb71b30e357dfcc6eb27d6d12fa7d21b37"
);
const DIGEST_2: [u8; 32] = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
const SIG_2: [u8; 64] = hex!(
    "b708b1fdc5b2ecd7fcb7010dc86d83de24e5f22f2f4ba76d8cd1b3a26543936b"
    "3837fb62000d2ee1c4994c42e04cfd64afe6fbaa98699bde3fe709abf4f86cef"
);

/// Group order, big-endian.
const ORDER: [u8; 32] = hex!("ffffffffffffffffffffffffffffffff6c611070995ad10045841b09b761b893");

const MSG: &[u8] = b"testing";

/// RNG which replays a fixed sequence of 32-byte blocks, for reproducing
/// signatures with a known nonce.
struct FixedRng<'a> {
    blocks: &'a [[u8; 32]],
    pos: usize,
}

impl<'a> FixedRng<'a> {
    fn new(blocks: &'a [[u8; 32]]) -> Self {
        Self { blocks, pos: 0 }
    }
}

impl RngCore for FixedRng<'_> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let block = &self.blocks[self.pos];
        self.pos += 1;
        dst.copy_from_slice(&block[..dst.len()]);
    }
}

impl CryptoRng for FixedRng<'_> {}

fn signing_key_vector() -> SigningKey {
    SigningKey::from_bytes(&D_BYTES.into()).unwrap()
}

#[test]
fn sign_prehash_test_vector() {
    let sk = signing_key_vector();
    assert_eq!(sk.verifying_key().to_sec1_bytes().as_ref(), &PUBLIC_KEY[..]);

    let sig = sk
        .sign_prehash_with_rng(&mut FixedRng::new(&[K_BYTES]), &DIGEST)
        .unwrap();
    assert_eq!(sig.to_bytes(), SIG);

    // the same nonce sequence reproduces the same signature
    let sig2 = sk
        .sign_prehash_with_rng(&mut FixedRng::new(&[K_BYTES]), &DIGEST)
        .unwrap();
    assert_eq!(sig, sig2);

    sk.verifying_key().verify_prehash(&DIGEST, &sig).unwrap();
}

#[test]
fn rejected_nonces_are_resampled() {
    // first draw is not a canonical scalar (>= q), second is zero; both must
    // be discarded before the vector nonce is consumed
    let blocks = &[[0xff; 32], [0; 32], K_BYTES];
    let sig = signing_key_vector()
        .sign_prehash_with_rng(&mut FixedRng::new(blocks), &DIGEST)
        .unwrap();
    assert_eq!(sig.to_bytes(), SIG);
}

#[test]
fn verify_prehash_test_vector() {
    let vk = VerifyingKey::from_sec1_bytes(&PUBLIC_KEY_2).unwrap();
    let sig = Signature::from_slice(&SIG_2).unwrap();
    vk.verify_prehash(&DIGEST_2, &sig).unwrap();

    // verification is a pure function of its arguments
    vk.verify_prehash(&DIGEST_2, &sig).unwrap();
}

#[test]
fn tampered_digest_rejected() {
    let vk = VerifyingKey::from_sec1_bytes(&PUBLIC_KEY_2).unwrap();
    let sig = Signature::from_slice(&SIG_2).unwrap();

    let mut digest = DIGEST_2;
    digest[7] ^= 1;
    assert!(vk.verify_prehash(&digest, &sig).is_err());
}

#[test]
fn wrong_public_key_rejected() {
    let vk = VerifyingKey::from_sec1_bytes(&PUBLIC_KEY).unwrap();
    let sig = Signature::from_slice(&SIG_2).unwrap();
    assert!(vk.verify_prehash(&DIGEST_2, &sig).is_err());
}

#[test]
fn out_of_range_signature_components_rejected() {
    let valid = &SIG[32..];

    for r in [&[0u8; 32][..], &ORDER[..]] {
        let bytes = [r, valid].concat();
        assert!(Signature::from_slice(&bytes).is_err());
    }

    for s in [&[0u8; 32][..], &ORDER[..]] {
        let bytes = [&SIG[..32], s].concat();
        assert!(Signature::from_slice(&bytes).is_err());
    }
}

#[test]
fn digest_congruent_to_zero_rejected() {
    // e = q reduces to zero, which has no inverse; verification must fail
    // cleanly rather than panic
    let mut digest = ORDER;
    digest.reverse();

    let vk = VerifyingKey::from_sec1_bytes(&PUBLIC_KEY_2).unwrap();
    let sig = Signature::from_slice(&SIG_2).unwrap();
    assert!(vk.verify_prehash(&digest, &sig).is_err());
}

#[test]
fn invalid_key_material_rejected() {
    // zero scalar
    assert!(SigningKey::from_slice(&[0; 32]).is_err());
    // scalar >= group order
    assert!(SigningKey::from_slice(&ORDER).is_err());
    // identity / malformed points
    assert!(VerifyingKey::from_sec1_bytes(&[0]).is_err());
    assert!(VerifyingKey::from_sec1_bytes(&[]).is_err());
}

#[test]
fn wrong_prehash_length_rejected() {
    let sk = signing_key_vector();
    assert!(sk
        .sign_prehash_with_rng(&mut FixedRng::new(&[K_BYTES]), &DIGEST[..31])
        .is_err());

    let vk = VerifyingKey::from_sec1_bytes(&PUBLIC_KEY_2).unwrap();
    let sig = Signature::from_slice(&SIG_2).unwrap();
    assert!(vk.verify_prehash(&DIGEST_2[..16], &sig).is_err());
}

#[test]
fn distinct_nonces_across_signatures() {
    let sk = signing_key_vector();
    let mut seen = BTreeSet::new();

    for i in 0u32..2000 {
        let mut digest = DIGEST;
        digest[..4].copy_from_slice(&i.to_be_bytes());

        let sig = sk.sign_prehash(&digest).unwrap();
        assert!(seen.insert(sig.r_bytes()), "repeated r: nonce reuse");
    }
}

/// Textbook double-and-add via the group law, substituted through the
/// multiplier seam.
struct DoubleAndAdd;

impl BasePointMultiplier for DoubleAndAdd {
    fn mul_base_point(&self, k: &Scalar) -> ProjectivePoint {
        ProjectivePoint::generator() * k
    }
}

#[test]
fn substituted_multiplier_matches_default() {
    let sk = signing_key_vector().with_multiplier(DoubleAndAdd);
    let sig = sk
        .sign_prehash_with_rng(&mut FixedRng::new(&[K_BYTES]), &DIGEST)
        .unwrap();
    assert_eq!(sig.to_bytes(), SIG);
    sk.verifying_key().verify_prehash(&DIGEST, &sig).unwrap();
}

prop_compose! {
    fn signing_key()(bytes in any::<[u8; 32]>()) -> SigningKey {
        loop {
            let scalar = Scalar::reduce_bytes(&bytes.into());
            if let Some(scalar) = Option::from(NonZeroScalar::new(scalar)) {
                return SigningKey::from_nonzero_scalar(scalar).unwrap();
            }
        }
    }
}

proptest! {
    #[test]
    fn sign_and_verify(sk in signing_key()) {
        let signature = sk.sign(MSG);
        prop_assert!(sk.verifying_key().verify(MSG, &signature).is_ok());
    }

    #[test]
    fn reject_invalid_signature(sk in signing_key(), byte in 0usize..64, bit in 0usize..8) {
        let mut signature_bytes = sk.sign(MSG).to_bytes();

        // tweak signature to make it invalid
        signature_bytes[byte] ^= 1 << bit;

        let signature = Signature::from_bytes(&signature_bytes).unwrap();
        prop_assert!(sk.verifying_key().verify(MSG, &signature).is_err());
    }
}
