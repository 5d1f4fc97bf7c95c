//! Ranges over `f32`.

use super::{FloatRange, float_count, float_range};
use crate::errors::Result;

/// Smallest positive `f32` (the first subnormal).
pub const DEFAULT_STEP: f32 = f32::from_bits(1);

/// Values `start + k * step` for `k = 0, 1, ...`, each strictly before `end`.
pub fn range(start: f32, end: f32, step: f32) -> Result<FloatRange<f32>> {
    float_range(start, end, step)
}

/// Number of values [range] yields for the same arguments. The estimate
/// `ceil(|end - start| / |step|)` is taken in `f64` and then corrected
/// against the `f32` values, so none of them reaches `end`.
pub fn count(start: f32, end: f32, step: f32) -> Result<u64> {
    float_count(start, end, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_steps() {
        let step = 0.5f32;
        let values: Vec<f32> = range(1.0, 1.0 + 3.0 * step, step).unwrap().collect();
        assert_eq!(values, vec![1.0, 1.5, 2.0]);
        assert_eq!(count(1.0, 1.0 + 3.0 * step, step), Ok(3));
    }

    #[test]
    fn test_three_inexact_steps() {
        let step = 0.1f32;
        let end = 1.0 + 3.0 * step;
        let values: Vec<f32> = range(1.0, end, step).unwrap().collect();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|&v| v < end));
        assert_eq!(count(1.0, end, step), Ok(3));
    }

    #[test]
    fn test_default_step_from_zero() {
        let values: Vec<f32> = range(0.0, 4.0 * DEFAULT_STEP, DEFAULT_STEP)
            .unwrap()
            .collect();
        assert_eq!(values.len(), 4);
        assert_eq!(values[3], 3.0 * DEFAULT_STEP);
    }

    #[test]
    fn test_descending() {
        assert_eq!(count(0.0, -1.0, -0.25), Ok(4));
        assert_eq!(range(0.0, -1.0, -0.25).unwrap().last(), Some(-0.75));
    }

    #[test]
    fn test_wrong_direction() {
        assert_eq!(count(0.0, -1.0, 0.25), Ok(0));
        assert_eq!(range(0.0, -1.0, 0.25).unwrap().next(), None);
    }
}
