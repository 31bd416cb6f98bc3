//! Compute the 2-D FFT magnitude spectrum of an image.
//!
//! Usage: fft_spectrum [input] [output]
//!
//! Defaults come from `SpectrumConfig::from_env` (`SPECTRUM_INPUT`,
//! `SPECTRUM_OUTPUT`, `SPECTRUM_PADDING`, `SPECTRUM_CHANNEL`); positional
//! arguments override the paths. Log verbosity follows `RUST_LOG`.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use spectrum_rs::SpectrumConfig;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stdout().is_terminal());
    Registry::default().with(filter).with(fmt_layer).init();
}

fn run() -> anyhow::Result<()> {
    let mut config = SpectrumConfig::from_env().context("invalid SPECTRUM_* environment")?;
    let mut args = std::env::args_os().skip(1);
    if let Some(input) = args.next() {
        config.input = PathBuf::from(input);
    }
    if let Some(output) = args.next() {
        config.output = PathBuf::from(output);
    }

    let summary = spectrum_rs::run(&config)
        .with_context(|| format!("spectrum of {} failed", config.input.display()))?;
    println!(
        "2-D FFT done: {}x{} -> {}x{} spectrum, max magnitude {:.3}, DC {:.3}, written to {}",
        summary.source_dims.0,
        summary.source_dims.1,
        summary.spectrum_dims.0,
        summary.spectrum_dims.1,
        summary.max_magnitude,
        summary.dc,
        summary.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
