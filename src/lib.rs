//! # primbits
//!
//! Bit-exact conversion between fixed-width primitives, their canonical
//! little-endian byte layouts and explicit sequences of bit flags, plus
//! single-bit get/set accessors and stepped range generators.
//!
//! Supported fixed-width types are the 8 to 128-bit integers, `f32`, `f64`,
//! `char` and [decimal::Decimal]. Arbitrary-precision integers get a
//! read-only surface in [big] (feature `bigint`, on by default).
//!
//! Bit `i` of a value is bit `i % 8` of byte `i / 8` of its layout, so bit 0
//! is the least significant bit.
//!
//! ## Example
//!
//! ```
//! use primbits::codec::{bits_to, get_bit, set_bit, to_bits, to_bytes};
//!
//! let bits = to_bits(0xB2u8);
//! assert_eq!(bits, [false, true, false, false, true, true, false, true]);
//! assert_eq!(bits_to::<u8>(&bits), Ok(0xB2));
//!
//! assert_eq!(get_bit(178u8, 1), Ok(true));
//! assert_eq!(set_bit(178u8, 0, true), Ok(179));
//! assert_eq!(to_bytes(-1i32), [0xFF; 4]);
//!
//! let letters: Vec<char> = primbits::sequence::character::range('a', 'd', 1)
//!     .unwrap()
//!     .collect();
//! assert_eq!(letters, ['a', 'b', 'c']);
//! ```

#[cfg(feature = "bigint")]
pub mod big;
pub mod bits;
pub mod codec;
pub mod decimal;
pub mod errors;
pub mod layout;
pub mod sequence;

pub use bits::BitSequence;
pub use decimal::Decimal;
pub use errors::{BitError, Result};
pub use layout::Primitive;
