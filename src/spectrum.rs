//! Rendering of a coefficient matrix as a normalized 8-bit magnitude grid.

use tracing::debug;

use crate::matrix::ComplexMatrix;

/// Grayscale intensities, one per matrix cell, laid out like the matrix
/// (`width` rows of `height` values).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    height: usize,
    values: Vec<u8>,
}

impl IntensityGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.values[x * self.height + y]
    }

    /// All intensities, `x` major.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn max(&self) -> u8 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// Result of rendering: the grid and the magnitude it was normalized by.
#[derive(Debug, Clone)]
pub struct Spectrum {
    pub grid: IntensityGrid,
    pub max_magnitude: f64,
}

/// Render `coefficients` as intensities `floor(|c| / max|c| * 255)`.
///
/// A matrix whose largest magnitude is zero renders as all zeros.
pub fn render(coefficients: &ComplexMatrix) -> Spectrum {
    let max_magnitude = coefficients.magnitudes().fold(0.0f64, f64::max);

    let values: Vec<u8> = if max_magnitude > 0.0 {
        coefficients
            .magnitudes()
            .map(|m| ((m / max_magnitude) * 255.0).floor() as u8)
            .collect()
    } else {
        vec![0; coefficients.width() * coefficients.height()]
    };
    debug!(
        width = coefficients.width(),
        height = coefficients.height(),
        max_magnitude,
        "spectrum rendered"
    );

    Spectrum {
        grid: IntensityGrid {
            width: coefficients.width(),
            height: coefficients.height(),
            values,
        },
        max_magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::ComplexValue;
    use rustfft::num_complex::Complex;

    fn matrix(rows: &[&[(f64, f64)]]) -> ComplexMatrix {
        ComplexMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&(re, im)| Complex::new(re, im)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_worked_example() {
        let m = matrix(&[&[(40.0, 0.0), (0.0, 0.0)], &[(0.0, 0.0), (0.0, 0.0)]]);
        let spectrum = render(&m);
        assert_eq!(spectrum.max_magnitude, 40.0);
        assert_eq!(spectrum.grid.get(0, 0), 255);
        assert_eq!(spectrum.grid.values(), &[255, 0, 0, 0]);
    }

    #[test]
    fn test_floor_normalization() {
        let m = matrix(&[&[(3.0, 4.0), (0.0, 2.5)], &[(-1.0, 0.0), (0.0, 0.0)]]);
        let spectrum = render(&m);
        assert_eq!(spectrum.max_magnitude, 5.0);
        // 2.5/5*255 = 127.5, 1/5*255 = 51
        assert_eq!(spectrum.grid.values(), &[255, 127, 51, 0]);
    }

    #[test]
    fn test_zero_energy_is_all_zero() {
        let m = ComplexMatrix::from_rows(vec![vec![ComplexValue::default(); 3]; 2]).unwrap();
        let spectrum = render(&m);
        assert_eq!(spectrum.max_magnitude, 0.0);
        assert_eq!(spectrum.grid.width(), 2);
        assert_eq!(spectrum.grid.height(), 3);
        assert!(spectrum.grid.values().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(render(&matrix(&[&[(0.0, -0.1)]])).grid.values(), &[255]);
        assert_eq!(render(&matrix(&[&[(0.0, 0.0)]])).grid.values(), &[0]);
    }

    #[test]
    fn test_maximum_reached() {
        let m = matrix(&[&[(1.0, 1.0), (7.0, 0.0), (0.5, 0.0)]]);
        let grid = render(&m).grid;
        assert_eq!(grid.max(), 255);
        assert_eq!(grid.get(0, 1), 255);
    }
}
