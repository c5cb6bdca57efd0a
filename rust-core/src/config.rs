//! Pipeline configuration

use crate::error::{FrequencyDataError, Result};
use std::fmt;
use std::str::FromStr;

/// Default number of samples per analysis window
pub const DEFAULT_WINDOW_SIZE: usize = 1024;

/// Default number of adjacent magnitude bins averaged into one band
pub const DEFAULT_REDUCTION_FACTOR: usize = 32;

/// How interleaved multi-channel audio is turned into one analysis signal
///
/// Mono input is passed through unchanged under either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    /// Average all channels of each frame into one sample
    #[default]
    Mixdown,

    /// Analyze a single channel (zero-based index)
    Select(u16),
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelMode::Mixdown => write!(f, "mixdown"),
            ChannelMode::Select(index) => write!(f, "{}", index),
        }
    }
}

impl FromStr for ChannelMode {
    type Err = FrequencyDataError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("mixdown") || s.eq_ignore_ascii_case("mix") {
            return Ok(ChannelMode::Mixdown);
        }

        s.parse::<u16>().map(ChannelMode::Select).map_err(|_| {
            FrequencyDataError::Configuration(format!(
                "channel must be 'mixdown' or a channel index, got '{}'",
                s
            ))
        })
    }
}

/// Frequency reduction configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducerConfig {
    /// Samples per non-overlapping window (must be > 0)
    pub window_size: usize,

    /// Magnitude bins averaged per output band (must be > 0)
    pub reduction_factor: usize,

    /// Multi-channel handling
    pub channel_mode: ChannelMode,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            reduction_factor: DEFAULT_REDUCTION_FACTOR,
            channel_mode: ChannelMode::Mixdown,
        }
    }
}

impl ReducerConfig {
    pub fn new(window_size: usize, reduction_factor: usize) -> Self {
        Self {
            window_size,
            reduction_factor,
            ..Self::default()
        }
    }

    pub fn with_channel_mode(mut self, channel_mode: ChannelMode) -> Self {
        self.channel_mode = channel_mode;
        self
    }

    /// Reject parameters that would make windowing or grouping degenerate
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(FrequencyDataError::Configuration(
                "window_size must be a positive integer".to_string(),
            ));
        }
        if self.reduction_factor == 0 {
            return Err(FrequencyDataError::Configuration(
                "reduction_factor must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of magnitude bins kept per window (lower half of the spectrum)
    pub fn num_bins(&self) -> usize {
        self.window_size / 2
    }

    /// Number of averaged bands per window: ceil(num_bins / reduction_factor)
    pub fn num_bands(&self) -> usize {
        self.num_bins().div_ceil(self.reduction_factor)
    }
}
