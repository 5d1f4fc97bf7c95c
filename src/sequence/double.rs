//! Ranges over `f64`.

use super::{FloatRange, float_count, float_range};
use crate::errors::Result;

/// Smallest positive `f64` (the first subnormal).
pub const DEFAULT_STEP: f64 = f64::from_bits(1);

/// Values `start + k * step` for `k = 0, 1, ...`, each strictly before `end`.
pub fn range(start: f64, end: f64, step: f64) -> Result<FloatRange<f64>> {
    float_range(start, end, step)
}

/// Number of values [range] yields for the same arguments: roughly
/// `ceil(|end - start| / |step|)` when `step` points towards `end`, corrected
/// so that no value reaches `end` after rounding.
pub fn count(start: f64, end: f64, step: f64) -> Result<u64> {
    float_count(start, end, step)
}
