//! Conversions between fixed-width primitives, byte layouts and bit
//! sequences, plus single-bit accessors.
//!
//! Bit `i` of a value is bit `i % 8` of byte `i / 8` of its little-endian
//! layout, so bit 0 is always the least significant bit.

use crate::{
    bits::{self, BitSequence},
    errors::{BitError, Result},
    layout::{Primitive, layout_from_slice},
};

/// Canonical little-endian bytes of `value`.
pub fn to_bytes<T: Primitive>(value: T) -> T::Layout {
    value.to_layout()
}

/// Decodes a canonical layout. `bytes` must be exactly `T::BYTES` long.
pub fn bytes_to<T: Primitive>(bytes: &[u8]) -> Result<T> {
    T::from_layout(layout_from_slice::<T>(bytes)?)
}

/// The `T::WIDTH` bit flags of `value`, index 0 being the least significant bit.
pub fn to_bits<T: Primitive>(value: T) -> BitSequence {
    bits::bytes_to_bits(value.to_layout().as_ref())
}

/// Assembles a `T` from an arbitrary number of flags.
///
/// The input is first normalized to `T::WIDTH` entries: excess trailing
/// entries are dropped and missing entries are filled with `false` at the
/// low-index end (see [bits::normalize]).
pub fn bits_to<T: Primitive>(bits: &[bool]) -> Result<T> {
    T::from_bit_flags(&bits::normalize(bits, T::WIDTH))
}

/// Reads bit `index` of `value`.
pub fn get_bit<T: Primitive>(value: T, index: usize) -> Result<bool> {
    check_index::<T>(index)?;
    bits::read_bit_at(value.to_layout().as_ref(), index)
}

/// Returns a copy of `value` with bit `index` set to `bit`.
pub fn set_bit<T: Primitive>(value: T, index: usize, bit: bool) -> Result<T> {
    check_index::<T>(index)?;

    let mut layout = value.to_layout();
    bits::write_bit_at(layout.as_mut(), index, bit)?;
    T::from_layout(layout)
}

fn check_index<T: Primitive>(index: usize) -> Result<()> {
    if index >= T::WIDTH {
        return Err(BitError::OutOfRange {
            index,
            width: T::WIDTH,
        });
    }

    Ok(())
}
