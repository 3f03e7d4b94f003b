//! Field arithmetic modulo p = 2²⁵⁶ − 617.

use crate::U256;
use elliptic_curve::{
    ff::PrimeField,
    subtle::{Choice, ConstantTimeEq, CtOption},
};

/// Constant representing the modulus serialized as hex.
const MODULUS_HEX: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd97";

primefield::monty_field_params!(
    name: FieldParams,
    modulus: MODULUS_HEX,
    uint: U256,
    byte_order: primefield::ByteOrder::BigEndian,
    multiplicative_generator: 7,
    doc: "Montgomery parameters for the GOST CryptoPro-A field modulus `p = 2^256 − 617`"
);

primefield::monty_field_element!(
    name: FieldElement,
    params: FieldParams,
    uint: U256,
    doc: "Element in the GOST CryptoPro-A finite field modulo `p = 2^256 − 617`"
);

primefield::monty_field_arithmetic!(
    name: FieldElement,
    params: FieldParams,
    uint: U256
);

#[cfg(test)]
mod tests {
    use super::{FieldElement, U256};
    primefield::test_primefield!(FieldElement, U256);
}
