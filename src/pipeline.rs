//! End-to-end run: sample the source image, transform, render, write.
//!
//! The sink runs last, after the transform and rendering have succeeded, so a
//! failing run never leaves a partial spectrum file behind.

use std::path::PathBuf;

use tracing::{info, trace};

use crate::config::SpectrumConfig;
use crate::fft2d::fft2d;
use crate::image_io;
use crate::matrix::{ComplexMatrix, ComplexValue};
use crate::spectrum::{render, IntensityGrid};
use crate::Error;

/// In-memory output of [`transform`].
#[derive(Debug, Clone)]
pub struct SpectrumOutput {
    pub coefficients: ComplexMatrix,
    pub grid: IntensityGrid,
    pub max_magnitude: f64,
}

/// What a completed [`run`] produced.
#[derive(Debug, Clone)]
pub struct SpectrumSummary {
    /// Source dimensions `(width, height)`.
    pub source_dims: (usize, usize),
    /// Spectrum image dimensions `(width, height)`.
    pub spectrum_dims: (usize, usize),
    pub max_magnitude: f64,
    /// Zero-frequency coefficient.
    pub dc: ComplexValue,
    pub output: PathBuf,
}

/// Transform a sample matrix and render its magnitude spectrum.
pub fn transform(samples: &ComplexMatrix, config: &SpectrumConfig) -> Result<SpectrumOutput, Error> {
    let coefficients = fft2d(samples, config.padding)?;
    let spectrum = render(&coefficients);
    Ok(SpectrumOutput {
        coefficients,
        grid: spectrum.grid,
        max_magnitude: spectrum.max_magnitude,
    })
}

/// Read `config.input`, compute its spectrum and write it to `config.output`.
pub fn run(config: &SpectrumConfig) -> Result<SpectrumSummary, Error> {
    info!(input = %config.input.display(), padding = %config.padding, "computing spectrum");
    let samples = image_io::read_samples(&config.input, config.channel)?;
    let output = transform(&samples, config)?;

    for (index, row) in output.coefficients.rows().iter().enumerate() {
        trace!(index, ?row, "coefficients");
    }

    image_io::write_spectrum(&output.grid, &config.output)?;

    let summary = SpectrumSummary {
        source_dims: (samples.width(), samples.height()),
        spectrum_dims: (output.grid.height(), output.grid.width()),
        max_magnitude: output.max_magnitude,
        dc: output.coefficients.get(0, 0),
        output: config.output.clone(),
    };
    info!(
        output = %summary.output.display(),
        width = summary.spectrum_dims.0,
        height = summary.spectrum_dims.1,
        max_magnitude = summary.max_magnitude,
        "2-D FFT spectrum written"
    );
    Ok(summary)
}
