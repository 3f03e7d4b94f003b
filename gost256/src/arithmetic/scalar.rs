//! Scalar field elements modulo the group order q.

use crate::{FieldBytes, FieldBytesEncoding, Gost256, ORDER_HEX, U256};
use core::ops::{Shr, ShrAssign};
use elliptic_curve::{
    bigint::Limb,
    ff::PrimeField,
    ops::Reduce,
    scalar::{FromUintUnchecked, IsHigh},
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, CtOption},
    Curve as _, ScalarPrimitive,
};

primefield::monty_field_params!(
    name: ScalarParams,
    modulus: ORDER_HEX,
    uint: U256,
    byte_order: primefield::ByteOrder::BigEndian,
    multiplicative_generator: 5,
    doc: "Montgomery parameters for the GOST CryptoPro-A group order `q`"
);

primefield::monty_field_element!(
    name: Scalar,
    params: ScalarParams,
    uint: U256,
    doc: "Element in the scalar field modulo the GOST CryptoPro-A group order `q`"
);

primefield::monty_field_arithmetic!(
    name: Scalar,
    params: ScalarParams,
    uint: U256
);

impl Scalar {
    /// Right shifts the scalar.
    ///
    /// Note: not constant-time with respect to the `shift` parameter.
    pub fn shr_vartime(&self, shift: u32) -> Scalar {
        Self::from_uint_unchecked(self.to_canonical().wrapping_shr_vartime(shift))
    }
}

impl AsRef<Scalar> for Scalar {
    fn as_ref(&self) -> &Scalar {
        self
    }
}

impl FromUintUnchecked for Scalar {
    type Uint = U256;

    fn from_uint_unchecked(uint: Self::Uint) -> Self {
        Self::from_uint_unchecked(uint)
    }
}

impl IsHigh for Scalar {
    fn is_high(&self) -> Choice {
        const MODULUS_SHR1: U256 = Gost256::ORDER.shr_vartime(1);
        self.to_canonical().ct_gt(&MODULUS_SHR1)
    }
}

impl Shr<usize> for Scalar {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shr_vartime(rhs as u32)
    }
}

impl Shr<usize> for &Scalar {
    type Output = Scalar;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shr_vartime(rhs as u32)
    }
}

impl ShrAssign<usize> for Scalar {
    fn shr_assign(&mut self, rhs: usize) {
        *self = *self >> rhs;
    }
}

impl Reduce<U256> for Scalar {
    type Bytes = FieldBytes;

    fn reduce(w: U256) -> Self {
        let (r, underflow) = w.sbb(&Gost256::ORDER, Limb::ZERO);
        let underflow = Choice::from((underflow.0 >> (Limb::BITS - 1)) as u8);
        Self::from_uint_unchecked(U256::conditional_select(&w, &r, !underflow))
    }

    #[inline]
    fn reduce_bytes(bytes: &FieldBytes) -> Self {
        let w = <U256 as FieldBytesEncoding<Gost256>>::decode_field_bytes(bytes);
        Self::reduce(w)
    }
}

impl From<ScalarPrimitive<Gost256>> for Scalar {
    fn from(w: ScalarPrimitive<Gost256>) -> Self {
        Scalar::from(&w)
    }
}

impl From<&ScalarPrimitive<Gost256>> for Scalar {
    fn from(w: &ScalarPrimitive<Gost256>) -> Scalar {
        Scalar::from_uint_unchecked(*w.as_uint())
    }
}

impl From<Scalar> for ScalarPrimitive<Gost256> {
    fn from(scalar: Scalar) -> ScalarPrimitive<Gost256> {
        ScalarPrimitive::from(&scalar)
    }
}

impl From<&Scalar> for ScalarPrimitive<Gost256> {
    fn from(scalar: &Scalar) -> ScalarPrimitive<Gost256> {
        #[allow(clippy::unwrap_used)] // scalar is always in range
        ScalarPrimitive::new(scalar.into()).unwrap()
    }
}
