//! Canonical byte layouts of the fixed-width primitives.
//!
//! Every supported type is laid out little-endian: byte 0 holds the least
//! significant 8 bits. The bit-level functions in [crate::codec] are built on
//! top of these layouts.

use crate::errors::{BitError, Result};

/// A fixed-width value with a canonical little-endian byte layout.
pub trait Primitive: Copy {
    /// Width in bits.
    const WIDTH: usize;
    /// Width in bytes.
    const BYTES: usize = Self::WIDTH / 8;

    /// Byte buffer holding one encoded value, always `[u8; Self::BYTES]`.
    type Layout: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Encodes the value into its canonical layout.
    fn to_layout(self) -> Self::Layout;

    /// Decodes a canonical layout. Fails only for types where some bit
    /// patterns are not values (`char`, [crate::decimal::Decimal]).
    fn from_layout(layout: Self::Layout) -> Result<Self>;

    /// Assembles a value from exactly `WIDTH` flags, bit 0 landing in the
    /// least significant position.
    fn from_bit_flags(bits: &[bool]) -> Result<Self> {
        let mut layout = Self::Layout::default();
        for (byte, chunk) in layout.as_mut().iter_mut().zip(bits.chunks(8)) {
            *byte = crate::bits::bits_to_byte(chunk);
        }
        Self::from_layout(layout)
    }
}

/// Copies `bytes` into a layout buffer, checking the length first.
pub(crate) fn layout_from_slice<T: Primitive>(bytes: &[u8]) -> Result<T::Layout> {
    if bytes.len() != T::BYTES {
        return Err(BitError::LengthMismatch {
            expected: T::BYTES,
            actual: bytes.len(),
        });
    }

    let mut layout = T::Layout::default();
    layout.as_mut().copy_from_slice(bytes);
    Ok(layout)
}

macro_rules! impl_int_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Primitive for $t {
                const WIDTH: usize = <$t>::BITS as usize;

                type Layout = [u8; std::mem::size_of::<$t>()];

                fn to_layout(self) -> Self::Layout {
                    self.to_le_bytes()
                }

                fn from_layout(layout: Self::Layout) -> Result<Self> {
                    Ok(<$t>::from_le_bytes(layout))
                }

                fn from_bit_flags(bits: &[bool]) -> Result<Self> {
                    Ok(bits
                        .iter()
                        .rev()
                        .fold(0 as $t, |acc, &bit| (acc << 1) | bit as $t))
                }
            }
        )*
    };
}

impl_int_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

impl Primitive for f32 {
    const WIDTH: usize = 32;

    type Layout = [u8; 4];

    fn to_layout(self) -> Self::Layout {
        self.to_le_bytes()
    }

    fn from_layout(layout: Self::Layout) -> Result<Self> {
        Ok(f32::from_le_bytes(layout))
    }
}

impl Primitive for f64 {
    const WIDTH: usize = 64;

    type Layout = [u8; 8];

    fn to_layout(self) -> Self::Layout {
        self.to_le_bytes()
    }

    fn from_layout(layout: Self::Layout) -> Result<Self> {
        Ok(f64::from_le_bytes(layout))
    }
}

impl Primitive for char {
    const WIDTH: usize = 32;

    type Layout = [u8; 4];

    fn to_layout(self) -> Self::Layout {
        u32::from(self).to_le_bytes()
    }

    fn from_layout(layout: Self::Layout) -> Result<Self> {
        let code = u32::from_le_bytes(layout);
        char::from_u32(code).ok_or(BitError::InvalidChar(code))
    }
}

/// Splits `bytes` into little-endian 32-bit words.
pub fn bytes_to_words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(BitError::LengthMismatch {
            expected: bytes.len().next_multiple_of(4),
            actual: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Joins 32-bit words into bytes, each word little-endian, in word order.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(<u8 as Primitive>::BYTES, 1);
        assert_eq!(<i16 as Primitive>::BYTES, 2);
        assert_eq!(<f32 as Primitive>::BYTES, 4);
        assert_eq!(<char as Primitive>::BYTES, 4);
        assert_eq!(<u64 as Primitive>::BYTES, 8);
        assert_eq!(<i128 as Primitive>::WIDTH, 128);
    }

    #[test]
    fn test_negative_one_layout() {
        assert_eq!((-1i32).to_layout(), [0xFF; 4]);
    }

    #[test]
    fn test_little_endian() {
        assert_eq!(0x0102_0304u32.to_layout(), [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(1.0f64.to_layout(), [0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
    }

    #[test]
    fn test_char_layout() {
        assert_eq!('a'.to_layout(), [0x61, 0, 0, 0]);
        assert_eq!(char::from_layout([0x61, 0, 0, 0]), Ok('a'));
        assert_eq!(
            char::from_layout([0x00, 0xD8, 0, 0]),
            Err(BitError::InvalidChar(0xD800))
        );
    }

    #[test]
    fn test_int_from_bit_flags() {
        let bits = [false, true, false, false, true, true, false, true];
        assert_eq!(u8::from_bit_flags(&bits), Ok(178));
        assert_eq!(i8::from_bit_flags(&bits), Ok(178u8 as i8));
    }

    #[test]
    fn test_float_from_bit_flags() {
        let bits = crate::bits::bytes_to_bits(&1.5f32.to_le_bytes());
        assert_eq!(f32::from_bit_flags(&bits), Ok(1.5));
    }

    #[test]
    fn test_layout_from_slice() {
        assert_eq!(layout_from_slice::<u16>(&[1, 2]), Ok([1, 2]));
        assert_eq!(
            layout_from_slice::<u16>(&[1, 2, 3]),
            Err(BitError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_words() {
        let bytes = [1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];
        let words = bytes_to_words(&bytes).unwrap();
        assert_eq!(words, vec![1, u32::MAX]);
        assert_eq!(words_to_bytes(&words), bytes.to_vec());
        assert_eq!(
            bytes_to_words(&[1, 2, 3]),
            Err(BitError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }
}
