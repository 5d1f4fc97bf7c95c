//! A 128-bit scaled decimal: sign, a power-of-ten scale and a 96-bit
//! unsigned magnitude. The value is `(-1)^negative * mantissa / 10^scale`.
//!
//! ## Layout
//!
//! Four 32-bit words, each little-endian, 16 bytes in total:
//!
//! | word | content |
//! |---|---|
//! | 0 | flags: scale in bits 16..=23, sign in bit 31, all other bits zero |
//! | 1 | magnitude bits 0..32 |
//! | 2 | magnitude bits 32..64 |
//! | 3 | magnitude bits 64..96 |

use std::fmt;

use crate::{
    errors::{BitError, Result},
    layout::{Primitive, bytes_to_words, words_to_bytes},
};

/// Largest scale a decimal can carry.
pub const MAX_SCALE: u8 = 28;

/// Largest magnitude, `2^96 - 1`.
pub const MAX_MANTISSA: u128 = (1 << 96) - 1;

const SCALE_SHIFT: u32 = 16;
const SCALE_MASK: u32 = 0x00FF_0000;
const SIGN_MASK: u32 = 0x8000_0000;

/// Signed 96-bit magnitude scaled by a power of ten, `(-1)^sign * m / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimal {
    negative: bool,
    scale: u8,
    lo: u32,
    mid: u32,
    hi: u32,
}

impl Decimal {
    /// Positive zero with scale 0; its layout is all zero bytes.
    pub const ZERO: Decimal = Decimal {
        negative: false,
        scale: 0,
        lo: 0,
        mid: 0,
        hi: 0,
    };

    /// Builds a decimal from its parts. Fails if `scale` exceeds [MAX_SCALE]
    /// or `mantissa` does not fit in 96 bits.
    pub fn new(negative: bool, scale: u8, mantissa: u128) -> Result<Self> {
        if scale > MAX_SCALE {
            return Err(BitError::InvalidDecimal("scale above 28"));
        }
        if mantissa > MAX_MANTISSA {
            return Err(BitError::InvalidDecimal("mantissa wider than 96 bits"));
        }

        Ok(Decimal {
            negative,
            scale,
            lo: mantissa as u32,
            mid: (mantissa >> 32) as u32,
            hi: (mantissa >> 64) as u32,
        })
    }

    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// The unsigned 96-bit magnitude.
    pub fn mantissa(&self) -> u128 {
        ((self.hi as u128) << 64) | ((self.mid as u128) << 32) | (self.lo as u128)
    }

    /// Splits into the flags word followed by the low, middle and high
    /// magnitude words.
    pub fn to_words(self) -> [u32; 4] {
        let mut flags = (self.scale as u32) << SCALE_SHIFT;
        if self.negative {
            flags |= SIGN_MASK;
        }

        [flags, self.lo, self.mid, self.hi]
    }

    /// Inverse of [Decimal::to_words]. Fails when the flags word has bits set
    /// outside the sign and scale fields, or a scale above [MAX_SCALE].
    pub fn from_words(words: [u32; 4]) -> Result<Self> {
        let [flags, lo, mid, hi] = words;

        if flags & !(SIGN_MASK | SCALE_MASK) != 0 {
            return Err(BitError::InvalidDecimal("reserved flag bits set"));
        }

        let scale = ((flags & SCALE_MASK) >> SCALE_SHIFT) as u8;
        if scale > MAX_SCALE {
            return Err(BitError::InvalidDecimal("scale above 28"));
        }

        Ok(Decimal {
            negative: flags & SIGN_MASK != 0,
            scale,
            lo,
            mid,
            hi,
        })
    }
}

impl Primitive for Decimal {
    const WIDTH: usize = 128;

    type Layout = [u8; 16];

    fn to_layout(self) -> Self::Layout {
        let mut layout = [0u8; 16];
        layout.copy_from_slice(&words_to_bytes(&self.to_words()));
        layout
    }

    fn from_layout(layout: Self::Layout) -> Result<Self> {
        let words = bytes_to_words(&layout)?;
        Decimal::from_words([words[0], words[1], words[2], words[3]])
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa().to_string();
        let scale = self.scale as usize;

        if self.negative {
            f.write_str("-")?;
        }

        if scale == 0 {
            return f.write_str(&digits);
        }

        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{int}.{frac}")
        } else {
            write!(f, "0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }
}
