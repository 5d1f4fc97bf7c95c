//! Read-only bit access for arbitrary-precision integers.
//!
//! A [BigInt] is laid out as minimal two's-complement little-endian bytes, so
//! its width depends on the value. Bit indices are checked against that
//! encoded length. There is no setter: flipping a bit can change the
//! encoded length, which has no fixed-width meaning.

use num_bigint::BigInt;

use crate::{
    bits::{self, BitSequence},
    errors::Result,
};

/// Minimal two's-complement little-endian bytes of `value`.
pub fn to_bytes(value: &BigInt) -> Vec<u8> {
    value.to_signed_bytes_le()
}

/// Inverse of [to_bytes]. An empty slice decodes to zero.
pub fn bytes_to(bytes: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_le(bytes)
}

/// Bit width of the encoded value, always a multiple of 8.
pub fn width(value: &BigInt) -> usize {
    to_bytes(value).len() * 8
}

/// Flags of the encoded value, LSB first, [width] long.
pub fn to_bits(value: &BigInt) -> BitSequence {
    bits::bytes_to_bits(&to_bytes(value))
}

/// Packs `bits` into bytes and reads them as two's-complement. A trailing
/// partial byte is zero-extended, which makes its top flag a magnitude bit.
pub fn bits_to(bits: &[bool]) -> BigInt {
    bytes_to(&bits::bits_to_bytes(bits))
}

/// Reads bit `index` of the encoded value.
pub fn get_bit(value: &BigInt, index: usize) -> Result<bool> {
    bits::read_bit_at(&to_bytes(value), index)
}
