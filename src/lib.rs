//! 2-D FFT magnitude spectrum of grayscale images.
//!
//! Samples an image into a complex matrix, applies a recursive radix-2
//! Cooley-Tukey FFT along the rows and then the columns, and renders the
//! coefficient magnitudes as an 8-bit grayscale image normalized to the
//! strongest coefficient.
//!
//! # Example
//!
//! ```
//! use spectrum_rs::{fft2d, render, ComplexMatrix, PaddingPolicy};
//!
//! let samples = ComplexMatrix::from_intensities(2, 2, |_, _| 10).unwrap();
//! let coefficients = fft2d(&samples, PaddingPolicy::PadOnce).unwrap();
//! assert!((coefficients.get(0, 0).re - 40.0).abs() < 1e-12);
//!
//! let spectrum = render(&coefficients);
//! assert_eq!(spectrum.grid.values(), &[255, 0, 0, 0]);
//! ```

use std::path::PathBuf;

pub mod config;
pub mod fft;
pub mod fft2d;
pub mod image_io;
pub mod matrix;
pub mod pad;
pub mod pipeline;
pub mod spectrum;

pub use config::{PaddingPolicy, SampleChannel, SpectrumConfig};
pub use fft::fft1d;
pub use fft2d::fft2d;
pub use matrix::{ComplexMatrix, ComplexSequence, ComplexValue};
pub use pad::pad_to_power_of_two;
pub use pipeline::{run, transform, SpectrumSummary};
pub use spectrum::{render, IntensityGrid, Spectrum};

/// Errors returned by transform and I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sequence is empty")]
    EmptySequence,

    #[error("matrix has no cells")]
    EmptyMatrix,

    #[error("row {row} has length {found} (expected {expected})")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("length {len} is not a power of two")]
    NonPowerOfTwo { len: usize },

    #[error("cannot read source image {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write spectrum image {}: {source}", path.display())]
    SinkUnwritable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("spectrum of {width}x{height} does not fit in an image")]
    ImageTooLarge { width: usize, height: usize },

    #[error("unknown padding policy: {0} (expected pad-once, strict or legacy)")]
    InvalidPolicy(String),

    #[error("unknown sample channel: {0} (expected red or luma)")]
    InvalidChannel(String),
}
