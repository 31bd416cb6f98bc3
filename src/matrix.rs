//! Complex sample containers: single values, sequences and row matrices.
//!
//! A [`ComplexMatrix`] is a list of rows of equal length. Its `width` is the
//! row count and its `height` the row length, so an image of `w × h` pixels
//! becomes `w` rows of `h` samples (row index = image `x`, row position =
//! image `y`).

use rustfft::num_complex::Complex;

use crate::Error;

/// A single complex sample or coefficient.
pub type ComplexValue = Complex<f64>;

/// Ordered run of samples or frequency bins.
pub type ComplexSequence = Vec<ComplexValue>;

/// The zero value used for padding and unwritten bins.
pub const ZERO: ComplexValue = Complex { re: 0.0, im: 0.0 };

/// Magnitude `sqrt(re² + im²)` of a coefficient.
#[inline]
pub fn magnitude(c: ComplexValue) -> f64 {
    (c.re * c.re + c.im * c.im).sqrt()
}

/// Rectangular grid of complex values stored as rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexMatrix {
    rows: Vec<ComplexSequence>,
}

impl ComplexMatrix {
    /// Build a matrix from rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<ComplexSequence>) -> Result<Self, Error> {
        let expected = match rows.first() {
            Some(first) => first.len(),
            None => return Err(Error::EmptyMatrix),
        };
        if expected == 0 {
            return Err(Error::EmptyMatrix);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(Error::RaggedMatrix {
                row,
                expected,
                found,
            });
        }
        Ok(Self { rows })
    }

    /// Build a real-valued matrix (imaginary parts zero) from an intensity
    /// sampler called once per `(x, y)`.
    pub fn from_intensities<F>(width: usize, height: usize, mut sample: F) -> Result<Self, Error>
    where
        F: FnMut(usize, usize) -> u8,
    {
        let rows = (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| Complex::new(sample(x, y) as f64, 0.0))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn width(&self) -> usize {
        self.rows.len()
    }

    /// Length of every row.
    pub fn height(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[ComplexSequence] {
        &self.rows
    }

    pub fn row(&self, x: usize) -> &[ComplexValue] {
        &self.rows[x]
    }

    pub fn get(&self, x: usize, y: usize) -> ComplexValue {
        self.rows[x][y]
    }

    /// Gather position `y` from every row into a new sequence of length `width`.
    pub fn column(&self, y: usize) -> ComplexSequence {
        self.rows.iter().map(|row| row[y]).collect()
    }

    /// Per-cell magnitudes in row order.
    pub fn magnitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flatten().map(|&c| magnitude(c))
    }
}
