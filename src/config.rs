//! Run configuration: file locations, padding policy, sampled channel.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::Error;

/// Default source image read by the binary.
pub const DEFAULT_INPUT: &str = "input.jpg";

/// Default spectrum image written by the binary.
pub const DEFAULT_OUTPUT: &str = "fft_spectrum.png";

/// How the transform treats sequence lengths that are not a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Zero-pad once to the next power of two; output grows to that length.
    #[default]
    PadOnce,
    /// Reject non-power-of-two lengths with [`Error::NonPowerOfTwo`].
    Strict,
    /// Re-pad at every recursion level and keep the original length.
    /// Butterflies run over integer `N / 2`, so the trailing bin of an odd
    /// length stays zero. Not a mathematically exact DFT.
    Legacy,
}

impl fmt::Display for PaddingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingPolicy::PadOnce => write!(f, "pad-once"),
            PaddingPolicy::Strict => write!(f, "strict"),
            PaddingPolicy::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for PaddingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pad-once" | "pad_once" | "padonce" => Ok(PaddingPolicy::PadOnce),
            "strict" => Ok(PaddingPolicy::Strict),
            "legacy" => Ok(PaddingPolicy::Legacy),
            other => Err(Error::InvalidPolicy(other.to_string())),
        }
    }
}

/// Which channel of the decoded bitmap becomes the sample intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleChannel {
    /// Red byte of the RGBA pixel.
    #[default]
    Red,
    /// Luma of the pixel.
    Luma,
}

impl fmt::Display for SampleChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleChannel::Red => write!(f, "red"),
            SampleChannel::Luma => write!(f, "luma"),
        }
    }
}

impl FromStr for SampleChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(SampleChannel::Red),
            "luma" | "gray" | "grey" => Ok(SampleChannel::Luma),
            other => Err(Error::InvalidChannel(other.to_string())),
        }
    }
}

/// Spectrum run configuration.
#[derive(Debug, Clone)]
pub struct SpectrumConfig {
    /// Source image path (default: `input.jpg`).
    pub input: PathBuf,
    /// Spectrum image path (default: `fft_spectrum.png`).
    pub output: PathBuf,
    /// Non-power-of-two handling (default: pad once).
    pub padding: PaddingPolicy,
    /// Sampled channel (default: red).
    pub channel: SampleChannel,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            padding: PaddingPolicy::default(),
            channel: SampleChannel::default(),
        }
    }
}

impl SpectrumConfig {
    /// Defaults overridden by `SPECTRUM_INPUT`, `SPECTRUM_OUTPUT`,
    /// `SPECTRUM_PADDING` and `SPECTRUM_CHANNEL` when set and non-empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(input) = get("SPECTRUM_INPUT") {
            config.input = PathBuf::from(input);
        }
        if let Some(output) = get("SPECTRUM_OUTPUT") {
            config.output = PathBuf::from(output);
        }
        if let Some(padding) = get("SPECTRUM_PADDING") {
            config.padding = padding.parse()?;
        }
        if let Some(channel) = get("SPECTRUM_CHANNEL") {
            config.channel = channel.parse()?;
        }
        Ok(config)
    }
}
