//! Zero-padding of sequences to a power-of-two length.

use crate::matrix::{ComplexValue, ZERO};
use crate::Error;

/// Length the padder grows a sequence of `len` samples to.
///
/// `len` itself when it is already a power of two, otherwise
/// `2^ceil(log2 len)`. Zero has no padded length.
pub fn padded_len(len: usize) -> Result<usize, Error> {
    if len == 0 {
        return Err(Error::EmptySequence);
    }
    Ok(len.next_power_of_two())
}

/// Extend `input` with zeros up to the next power-of-two length.
///
/// Power-of-two input is returned unchanged (as a fresh copy).
pub fn pad_to_power_of_two(input: &[ComplexValue]) -> Result<Vec<ComplexValue>, Error> {
    let target = padded_len(input.len())?;
    Ok(extend_with_zeros(input, target))
}

/// Copy `input` into a vector of `target` samples, filling the tail with zeros.
pub(crate) fn extend_with_zeros(input: &[ComplexValue], target: usize) -> Vec<ComplexValue> {
    let mut out = Vec::with_capacity(target.max(input.len()));
    out.extend_from_slice(input);
    out.resize(target.max(input.len()), ZERO);
    out
}
