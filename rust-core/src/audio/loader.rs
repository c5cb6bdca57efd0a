//! WAV file loading with hound
//!
//! Samples are passed through as decoded: integer PCM keeps its integer
//! value, float PCM is widened to f64. No resampling, no normalization.

use crate::error::{FrequencyDataError, Result};
use hound::{SampleFormat, WavReader};
use std::io::Read;
use std::path::Path;

/// Decoded audio signal
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    /// Sample rate in Hz
    sample_rate: u32,

    /// Number of interleaved channels
    channels: u16,

    /// Interleaved samples, frame-major
    samples: Vec<f64>,
}

impl AudioSignal {
    /// Create a signal from already-decoded interleaved samples
    pub fn new(sample_rate: u32, channels: u16, samples: Vec<f64>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(FrequencyDataError::Configuration(
                "sample rate must be positive".to_string(),
            ));
        }
        if channels == 0 {
            return Err(FrequencyDataError::Configuration(
                "channel count must be positive".to_string(),
            ));
        }

        Ok(Self {
            sample_rate,
            channels,
            samples,
        })
    }

    /// Create a mono signal
    pub fn mono(sample_rate: u32, samples: Vec<f64>) -> Result<Self> {
        Self::new(sample_rate, 1, samples)
    }

    /// Load a WAV file from disk
    ///
    /// Missing, unreadable and malformed files all surface as `Decode`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        // Reader (and its file handle) is dropped when decoding returns
        let reader = WavReader::open(path).map_err(|source| FrequencyDataError::Decode {
            origin: origin.clone(),
            source,
        })?;

        Self::decode(reader, &origin)
    }

    /// Decode a WAV stream from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let origin = "<reader>";
        let reader = WavReader::new(reader).map_err(|source| FrequencyDataError::Decode {
            origin: origin.to_string(),
            source,
        })?;

        Self::decode(reader, origin)
    }

    fn decode<R: Read>(mut reader: WavReader<R>, origin: &str) -> Result<Self> {
        let spec = reader.spec();
        let decode_err = |source| FrequencyDataError::Decode {
            origin: origin.to_string(),
            source,
        };

        let samples: Vec<f64> = match spec.sample_format {
            SampleFormat::Float => reader
                .samples::<f32>()
                .map(|s| s.map(f64::from))
                .collect::<std::result::Result<_, _>>()
                .map_err(decode_err)?,
            SampleFormat::Int => reader
                .samples::<i32>()
                .map(|s| s.map(f64::from))
                .collect::<std::result::Result<_, _>>()
                .map_err(decode_err)?,
        };

        log::debug!(
            "Decoded {}: {} Hz, {} channel(s), {}-bit {:?}, {} samples",
            origin,
            spec.sample_rate,
            spec.channels,
            spec.bits_per_sample,
            spec.sample_format,
            samples.len()
        );

        Self::new(spec.sample_rate, spec.channels, samples)
    }

    /// Get sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get channel count
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Get interleaved samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of complete frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    pub fn is_mono(&self) -> bool {
        self.channels == 1
    }
}
