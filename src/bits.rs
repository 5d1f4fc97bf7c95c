//! Low-level bit utilities: single bytes to and from bit flags, and bit
//! addressing inside byte slices.
//!
//! Bits are addressed in LSB-first order: bit 0 is the low bit of the first
//! byte, bit 8 the low bit of the second byte, and so on.

use std::borrow::Cow;

use crate::errors::{BitError, Result};

/// Ordered bit flags; the flag at position `i` has weight `2^(i % 8)` within
/// byte `i / 8`.
pub type BitSequence = Vec<bool>;

/// Expands a byte into its 8 flags, index 0 being the least significant bit.
pub fn byte_to_bits(b: u8) -> [bool; 8] {
    let mut out = [false; 8];
    for (i, flag) in out.iter_mut().enumerate() {
        *flag = (b >> i) & 1 == 1;
    }

    out
}

/// Folds bit flags into a byte. Inputs that are not exactly 8 flags long are
/// first brought to width with [normalize].
pub fn bits_to_byte(bits: &[bool]) -> u8 {
    normalize(bits, 8)
        .iter()
        .rev()
        .fold(0u8, |acc, &bit| (acc << 1) | bit as u8)
}

/// Brings `bits` to exactly `width` entries.
///
/// Longer input keeps its first `width` entries. Shorter input is padded with
/// `false` at the low-index end, so the given flags end up in the high
/// positions of the result.
pub fn normalize(bits: &[bool], width: usize) -> Cow<'_, [bool]> {
    match bits.len() {
        len if len == width => Cow::Borrowed(bits),
        len if len > width => {
            log::trace!("truncating {len} bits to width {width}");
            Cow::Borrowed(&bits[..width])
        }
        len => {
            log::trace!("padding {len} bits to width {width}");
            let mut padded = vec![false; width - len];
            padded.extend_from_slice(bits);
            Cow::Owned(padded)
        }
    }
}

/// Expands every byte of `data` into 8 flags, byte-major and bit-minor.
pub fn bytes_to_bits(data: &[u8]) -> BitSequence {
    data.iter().flat_map(|&b| byte_to_bits(b)).collect()
}

/// Packs flags into bytes, 8 per byte. A trailing partial byte has its
/// missing high bits cleared.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let n_bytes = bits.len().div_ceil(8);
    let mut out = vec![0u8; n_bytes];

    for (i, &bit) in bits.iter().enumerate() {
        out[i / 8] |= (bit as u8) << (i % 8);
    }

    out
}

/// Reads the bit at `bit_pos` (0 = LSB of first byte).
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> Result<bool> {
    if bit_pos >= data.len() * 8 {
        return Err(BitError::OutOfRange {
            index: bit_pos,
            width: data.len() * 8,
        });
    }

    let byte_index = bit_pos / 8;
    let bit_index = bit_pos % 8;

    Ok((data[byte_index] >> bit_index) & 1 == 1)
}

/// Sets or clears the bit at `bit_pos`, leaving every other bit untouched.
pub fn write_bit_at(data: &mut [u8], bit_pos: usize, bit: bool) -> Result<()> {
    if bit_pos >= data.len() * 8 {
        return Err(BitError::OutOfRange {
            index: bit_pos,
            width: data.len() * 8,
        });
    }

    let mask = 1u8 << (bit_pos % 8);
    let byte = &mut data[bit_pos / 8];
    if bit {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }

    Ok(())
}
