//! Pipeline integration tests: write a real image, run, read the spectrum back.

use image::{Rgb, RgbImage, Rgba};
use spectrum_rs::{run, Error, PaddingPolicy, SampleChannel, SpectrumConfig};
use tempfile::{tempdir, TempDir};

fn config(dir: &TempDir, padding: PaddingPolicy) -> SpectrumConfig {
    SpectrumConfig {
        input: dir.path().join("input.png"),
        output: dir.path().join("fft_spectrum.png"),
        padding,
        channel: SampleChannel::Red,
    }
}

// --- End-to-end ---

#[test]
fn test_constant_image_single_dc_pixel() {
    let dir = tempdir().unwrap();
    let cfg = config(&dir, PaddingPolicy::PadOnce);
    // Only the red channel is sampled; green and blue must not matter.
    RgbImage::from_fn(4, 4, |x, y| Rgb([10, (x * 40) as u8, (y * 60) as u8]))
        .save(&cfg.input)
        .unwrap();

    let summary = run(&cfg).unwrap();
    assert_eq!(summary.source_dims, (4, 4));
    assert_eq!(summary.spectrum_dims, (4, 4));
    assert!((summary.max_magnitude - 160.0).abs() < 1e-9);
    assert!((summary.dc.re - 160.0).abs() < 1e-9);

    let out = image::open(&cfg.output).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), (4, 4));
    for (x, y, px) in out.enumerate_pixels() {
        let expected = if (x, y) == (0, 0) { 255 } else { 0 };
        assert_eq!(px, &Rgba([expected, expected, expected, 255]), "pixel ({x},{y})");
    }
}

#[test]
fn test_non_square_padded_output() {
    let dir = tempdir().unwrap();
    let cfg = config(&dir, PaddingPolicy::PadOnce);
    RgbImage::from_fn(6, 3, |x, y| Rgb([((x * 17 + y * 29) % 256) as u8, 0, 0]))
        .save(&cfg.input)
        .unwrap();

    let summary = run(&cfg).unwrap();
    assert_eq!(summary.source_dims, (6, 3));
    assert_eq!(summary.spectrum_dims, (8, 4));
    let out = image::open(&cfg.output).unwrap();
    assert_eq!((out.width(), out.height()), (8, 4));
    assert_eq!(out.to_rgba8().get_pixel(0, 0).0[0], 255);
}

#[test]
fn test_spectrum_keeps_source_orientation() {
    let dir = tempdir().unwrap();
    let cfg = config(&dir, PaddingPolicy::Strict);
    // Varies along x only, so every frequency with v != 0 is empty.
    RgbImage::from_fn(4, 2, |x, _| Rgb([(x * 40) as u8, 0, 0]))
        .save(&cfg.input)
        .unwrap();

    let summary = run(&cfg).unwrap();
    assert_eq!(summary.spectrum_dims, (4, 2));
    let out = image::open(&cfg.output).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), (4, 2));
    assert_eq!(out.get_pixel(0, 0).0[0], 255);
    assert!(out.get_pixel(1, 0).0[0] > 0);
    for x in 0..4 {
        assert_eq!(out.get_pixel(x, 1), &Rgba([0, 0, 0, 255]), "pixel ({x},1)");
    }
}

#[test]
fn test_legacy_keeps_source_dimensions() {
    let dir = tempdir().unwrap();
    let cfg = config(&dir, PaddingPolicy::Legacy);
    RgbImage::from_fn(5, 3, |x, _| Rgb([(x * 50) as u8, 0, 0]))
        .save(&cfg.input)
        .unwrap();

    let summary = run(&cfg).unwrap();
    assert_eq!(summary.spectrum_dims, (5, 3));
    let out = image::open(&cfg.output).unwrap();
    assert_eq!((out.width(), out.height()), (5, 3));
}

#[test]
fn test_black_image_renders_black() {
    let dir = tempdir().unwrap();
    let cfg = config(&dir, PaddingPolicy::Strict);
    RgbImage::new(8, 8).save(&cfg.input).unwrap();

    let summary = run(&cfg).unwrap();
    assert_eq!(summary.max_magnitude, 0.0);
    let out = image::open(&cfg.output).unwrap().to_rgba8();
    assert!(out.pixels().all(|p| p == &Rgba([0, 0, 0, 255])));
}

// --- Failures leave no output ---

#[test]
fn test_undecodable_source() {
    let dir = tempdir().unwrap();
    let cfg = config(&dir, PaddingPolicy::PadOnce);
    std::fs::write(&cfg.input, b"not an image at all").unwrap();

    let result = run(&cfg);
    assert!(matches!(result, Err(Error::SourceUnreadable { .. })));
    assert!(!cfg.output.exists());
}

#[test]
fn test_strict_rejection_writes_nothing() {
    let dir = tempdir().unwrap();
    let cfg = config(&dir, PaddingPolicy::Strict);
    RgbImage::from_pixel(3, 4, Rgb([1, 2, 3])).save(&cfg.input).unwrap();

    let result = run(&cfg);
    assert!(matches!(result, Err(Error::NonPowerOfTwo { .. })));
    assert!(!cfg.output.exists());
}

#[test]
fn test_unwritable_sink() {
    let dir = tempdir().unwrap();
    let mut cfg = config(&dir, PaddingPolicy::PadOnce);
    cfg.output = dir.path().join("missing-dir").join("out.png");
    RgbImage::from_pixel(2, 2, Rgb([9, 9, 9])).save(&cfg.input).unwrap();

    assert!(matches!(run(&cfg), Err(Error::SinkUnwritable { .. })));
}
