//! Image source and sink around the `image` codecs.
//!
//! The source samples one channel of a decoded bitmap into a real-valued
//! [`ComplexMatrix`] (row index = pixel `x`). The sink writes an
//! [`IntensityGrid`] as an opaque gray RGBA image, reading grid cell `[y][x]`
//! for pixel `(x, y)`.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use crate::config::SampleChannel;
use crate::matrix::ComplexMatrix;
use crate::spectrum::IntensityGrid;
use crate::Error;

/// Decode the image at `path` and sample it.
pub fn read_samples(path: &Path, channel: SampleChannel) -> Result<ComplexMatrix, Error> {
    let image = image::open(path).map_err(|source| Error::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), %channel, "source decoded");
    sample_image(&image, channel)
}

/// Sample `image` into a matrix of `width` rows of `height` intensities.
pub fn sample_image(image: &DynamicImage, channel: SampleChannel) -> Result<ComplexMatrix, Error> {
    let (width, height) = (image.width(), image.height());
    match channel {
        SampleChannel::Red => {
            let rgba = image.to_rgba8();
            ComplexMatrix::from_intensities(width as usize, height as usize, |x, y| {
                rgba.get_pixel(x as u32, y as u32).0[0]
            })
        }
        SampleChannel::Luma => {
            let luma = image.to_luma8();
            ComplexMatrix::from_intensities(width as usize, height as usize, |x, y| {
                luma.get_pixel(x as u32, y as u32).0[0]
            })
        }
    }
}

/// Convert `grid` to an image, each intensity replicated on R, G and B with
/// full opacity.
///
/// Pixel `(x, y)` shows grid cell `(y, x)`, so the image is `grid.height()`
/// pixels wide and `grid.width()` pixels high. For a grid rendered from
/// [`fft2d`](crate::fft2d::fft2d) output this puts frequency `(u, v)` at pixel
/// `(u, v)`, matching the source orientation.
pub fn spectrum_image(grid: &IntensityGrid) -> Result<RgbaImage, Error> {
    let too_large = || Error::ImageTooLarge {
        width: grid.height(),
        height: grid.width(),
    };
    let width = u32::try_from(grid.height()).map_err(|_| too_large())?;
    let height = u32::try_from(grid.width()).map_err(|_| too_large())?;
    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let v = grid.get(y as usize, x as usize);
        Rgba([v, v, v, 255])
    }))
}

/// Write `grid` to `path`; the format follows the file extension.
///
/// The image is fully encoded in memory before `path` is opened, so an
/// encoding failure leaves any existing file untouched.
pub fn write_spectrum(grid: &IntensityGrid, path: &Path) -> Result<(), Error> {
    let sink_error = |source| Error::SinkUnwritable {
        path: path.to_path_buf(),
        source,
    };
    let image = spectrum_image(grid)?;
    let format = ImageFormat::from_path(path).map_err(sink_error)?;
    let mut encoded = Cursor::new(Vec::new());
    image.write_to(&mut encoded, format).map_err(sink_error)?;
    let bytes = encoded.into_inner();
    fs::write(path, &bytes).map_err(|e| sink_error(ImageError::IoError(e)))?;
    debug!(path = %path.display(), format = ?format, bytes = bytes.len(), "spectrum written");
    Ok(())
}
