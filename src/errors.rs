//! Error types for conversions, bit access and range generation.

use thiserror::Error;

/// Errors produced by the conversion and sequence functions of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitError {
    /// An argument has a value the operation cannot work with (e.g. a zero step).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A bit index is not below the width of the value it addresses.
    #[error("bit index {index} out of range for width {width}")]
    OutOfRange { index: usize, width: usize },

    /// A byte slice does not have the length the target layout requires.
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The four-word layout does not describe a valid decimal.
    #[error("invalid decimal layout: {0}")]
    InvalidDecimal(&'static str),

    /// The 32-bit pattern is not a Unicode scalar value.
    #[error("{0:#x} is not a unicode scalar value")]
    InvalidChar(u32),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BitError>;
