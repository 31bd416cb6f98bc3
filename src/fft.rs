//! Recursive radix-2 decimation-in-time FFT over complex sequences.
//!
//! The transform splits a sequence into its even and odd positions, transforms
//! both halves recursively and recombines them with the twiddle factors
//! `e^{-2πik/N}`. How lengths that are not a power of two are handled is
//! selected by [`PaddingPolicy`]:
//!
//! - `PadOnce` zero-pads once at the top and returns the exact DFT of the
//!   padded sequence (length grows to the next power of two).
//! - `Strict` rejects such lengths.
//! - `Legacy` re-pads inside the recursion but keeps the caller's length `N`
//!   for the twiddles and the result, recombining `N / 2` pairs (integer
//!   division). The output is then not a true DFT, and for odd `N` the last
//!   bin is never written and stays zero.
//!
//! For power-of-two lengths all three policies perform the same arithmetic.

use std::f64::consts::PI;

use rustfft::num_complex::Complex;

use crate::config::PaddingPolicy;
use crate::matrix::{ComplexValue, ZERO};
use crate::pad::{extend_with_zeros, pad_to_power_of_two};
use crate::Error;

/// Forward FFT of `input` under the given padding policy.
///
/// Returns a freshly allocated sequence; `input` is never modified.
pub fn fft1d(input: &[ComplexValue], policy: PaddingPolicy) -> Result<Vec<ComplexValue>, Error> {
    if input.is_empty() {
        return Err(Error::EmptySequence);
    }
    match policy {
        PaddingPolicy::PadOnce => Ok(radix2(&pad_to_power_of_two(input)?)),
        PaddingPolicy::Strict => {
            if !input.len().is_power_of_two() {
                return Err(Error::NonPowerOfTwo { len: input.len() });
            }
            Ok(radix2(input))
        }
        PaddingPolicy::Legacy => Ok(legacy(input)),
    }
}

/// Length of the sequence [`fft1d`] returns for an input of `len` samples.
pub fn output_len(len: usize, policy: PaddingPolicy) -> Result<usize, Error> {
    if len == 0 {
        return Err(Error::EmptySequence);
    }
    match policy {
        PaddingPolicy::PadOnce => Ok(len.next_power_of_two()),
        PaddingPolicy::Strict if !len.is_power_of_two() => Err(Error::NonPowerOfTwo { len }),
        PaddingPolicy::Strict | PaddingPolicy::Legacy => Ok(len),
    }
}

/// Twiddle factor `e^{-2πik/n}`.
#[inline]
fn twiddle(k: usize, n: usize) -> ComplexValue {
    let angle = (-2.0 * PI * k as f64) / n as f64;
    Complex::new(angle.cos(), angle.sin())
}

fn split_even_odd(input: &[ComplexValue]) -> (Vec<ComplexValue>, Vec<ComplexValue>) {
    let even = input.iter().step_by(2).copied().collect();
    let odd = input.iter().skip(1).step_by(2).copied().collect();
    (even, odd)
}

/// Butterfly recombination for a transform of length `n`.
///
/// Writes `result[k]` and `result[k + n/2]` for `k < n/2` (integer
/// division); any other slot of `result` is left as it was.
fn combine(even: &[ComplexValue], odd: &[ComplexValue], n: usize, result: &mut [ComplexValue]) {
    let half = n / 2;
    for k in 0..half {
        let odd_part = twiddle(k, n) * odd[k];
        result[k] = even[k] + odd_part;
        result[k + half] = even[k] - odd_part;
    }
}

/// Radix-2 core. `input.len()` must be a power of two.
fn radix2(input: &[ComplexValue]) -> Vec<ComplexValue> {
    let n = input.len();
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return input.to_vec();
    }
    let (even, odd) = split_even_odd(input);
    let even = radix2(&even);
    let odd = radix2(&odd);
    let mut result = vec![ZERO; n];
    combine(&even, &odd, n, &mut result);
    result
}

fn legacy(input: &[ComplexValue]) -> Vec<ComplexValue> {
    let n = input.len();
    if n <= 1 {
        return input.to_vec();
    }
    let padded;
    let working = if n.is_power_of_two() {
        input
    } else {
        padded = extend_with_zeros(input, n.next_power_of_two());
        &padded[..]
    };
    let (even, odd) = split_even_odd(working);
    let even = legacy(&even);
    let odd = legacy(&odd);
    let mut result = vec![ZERO; n];
    combine(&even, &odd, n, &mut result);
    result
}
