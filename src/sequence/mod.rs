//! Stepped ranges over floating-point and character values.
//!
//! Every generator comes paired with a closed-form `count` that returns the
//! exact number of elements the matching `range` call yields. A range is
//! empty whenever `step` does not point from `start` towards `end`, and
//! `end` itself is never produced. A zero step is an error.
//!
//! Floating ranges compute element `k` as `start + k * step`, rounded once
//! to the element type, so rounding error does not build up along the
//! sequence. Their count starts from `ceil(|end - start| / |step|)` and is
//! then corrected against those element values, so the last element is
//! always strictly before `end`. The count also bounds iteration: with a step
//! too small to move the value (e.g. [double::DEFAULT_STEP] far from zero)
//! the sequence still ends.

pub mod character;
pub mod double;
pub mod single;

use std::{cmp::Ordering, iter::FusedIterator};

use crate::errors::{BitError, Result};

/// Floating-point types a [FloatRange] can step over.
pub trait Float: Copy + PartialOrd + std::fmt::Debug {
    const ZERO: Self;

    fn to_f64(self) -> f64;

    /// Rounds to the nearest value of this type.
    fn from_f64(value: f64) -> Self;
}

impl Float for f32 {
    const ZERO: Self = 0.0;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Float for f64 {
    const ZERO: Self = 0.0;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Element `k` of the range starting at `start`.
fn value_at<F: Float>(start: F, step: F, k: u64) -> F {
    if k == 0 {
        // 0 * inf would be NaN
        return start;
    }
    F::from_f64(start.to_f64() + k as f64 * step.to_f64())
}

/// Whether `value` has reached or passed `end` in the direction of `step`.
/// A NaN value (e.g. `-inf + inf`) counts as having reached it.
fn reaches_end<F: Float>(value: F, end: F, step: F) -> bool {
    let still_before = if step > F::ZERO {
        Ordering::Less
    } else {
        Ordering::Greater
    };
    value.partial_cmp(&end) != Some(still_before)
}

/// Smallest `k` in `lo..=hi` for which `reaches(k)` holds, or `hi` when none
/// does. `reaches` must be monotone in `k`.
fn first_reaching(mut lo: u64, mut hi: u64, reaches: impl Fn(u64) -> bool) -> u64 {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if reaches(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}

pub(crate) fn float_count<F: Float>(start: F, end: F, step: F) -> Result<u64> {
    if step == F::ZERO {
        return Err(BitError::InvalidArgument("step cannot be zero"));
    }

    let heads_toward_end = (step > F::ZERO && start < end) || (step < F::ZERO && start > end);
    if !heads_toward_end {
        return Ok(0);
    }

    // `as` saturates, so a ratio beyond u64 (tiny step) clamps to u64::MAX.
    // `start` itself always precedes `end`, even when the ratio underflows.
    let ratio = (end.to_f64() - start.to_f64()) / step.to_f64();
    let estimate = (ratio.abs().ceil() as u64).max(1);

    // Rounding in the ratio or in the elements can leave the estimate off by
    // a few; settle it on the first element that reaches `end`.
    let reaches = |k: u64| reaches_end(value_at(start, step, k), end, step);
    let count = if reaches(estimate - 1) {
        first_reaching(1, estimate - 1, reaches)
    } else if estimate < u64::MAX && !reaches(estimate) {
        first_reaching(estimate + 1, u64::MAX, reaches)
    } else {
        estimate
    };

    Ok(count)
}

pub(crate) fn float_range<F: Float>(start: F, end: F, step: F) -> Result<FloatRange<F>> {
    let len = float_count(start, end, step)?;

    if len > 1 && value_at(start, step, 1) == start {
        log::debug!("step {step:?} is absorbed by start {start:?}; range repeats its first value");
    }

    Ok(FloatRange {
        start,
        step,
        index: 0,
        len,
    })
}

/// Iterator over a floating range, yielding `start + k * step` for
/// `k` in `0..count`. Clone it to restart from the current position.
#[derive(Debug, Clone)]
pub struct FloatRange<F> {
    start: F,
    step: F,
    index: u64,
    len: u64,
}

impl<F> FloatRange<F> {
    /// Number of elements still to be yielded.
    pub fn remaining(&self) -> u64 {
        self.len - self.index
    }
}

impl<F: Float> Iterator for FloatRange<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        if self.index == self.len {
            return None;
        }

        let current = value_at(self.start, self.step, self.index);
        self.index += 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = usize::try_from(self.remaining());
        (hint.unwrap_or(usize::MAX), hint.ok())
    }
}

impl<F: Float> FusedIterator for FloatRange<F> {}
