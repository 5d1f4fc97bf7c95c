//! Ranges over `char`.
//!
//! Steps are counted in Unicode scalar values: the surrogate block
//! U+D800..=U+DFFF is not part of the sequence, so `'\u{D7FF}'` is followed
//! directly by `'\u{E000}'`.

use std::iter::FusedIterator;

use crate::errors::{BitError, Result};

/// One scalar value.
pub const DEFAULT_STEP: i32 = 1;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xE000;
const SURROGATE_LEN: u32 = SURROGATE_END - SURROGATE_START;

/// Position of `c` among all scalar values.
fn scalar_index(c: char) -> i64 {
    let code = u32::from(c);
    if code >= SURROGATE_END {
        (code - SURROGATE_LEN) as i64
    } else {
        code as i64
    }
}

fn from_scalar_index(index: i64) -> Option<char> {
    let code = u32::try_from(index).ok()?;
    if code >= SURROGATE_START {
        char::from_u32(code.checked_add(SURROGATE_LEN)?)
    } else {
        char::from_u32(code)
    }
}

/// Characters `start, start + step, ...` strictly before `end`.
pub fn range(start: char, end: char, step: i32) -> Result<CharRange> {
    Ok(CharRange {
        next: scalar_index(start),
        step: step as i64,
        remaining: count(start, end, step)?,
    })
}

/// Number of characters [range] yields for the same arguments.
pub fn count(start: char, end: char, step: i32) -> Result<u64> {
    if step == 0 {
        return Err(BitError::InvalidArgument("step cannot be zero"));
    }

    let distance = scalar_index(end) - scalar_index(start);
    if distance == 0 || distance.signum() != (step as i64).signum() {
        return Ok(0);
    }

    Ok(distance.unsigned_abs().div_ceil(step.unsigned_abs() as u64))
}

/// Iterator over a character range. Clone it to restart from the current
/// position.
#[derive(Debug, Clone)]
pub struct CharRange {
    next: i64,
    step: i64,
    remaining: u64,
}

impl Iterator for CharRange {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.remaining == 0 {
            return None;
        }

        let current = from_scalar_index(self.next)?;
        self.next += self.step;
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CharRange {}

impl FusedIterator for CharRange {}
