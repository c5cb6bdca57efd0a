//! Windowed spectrum reduction
//!
//! Combines the windower, FFT engine and band averaging. No window function
//! is applied before the transform, so spectral leakage is left in the
//! output, and magnitudes stay linear (no dB scaling).

use super::bands::{band_start_frequencies, reduce_magnitudes};
use super::fft::FftEngine;
use super::windower::{remainder_len, window_count, windows};
use crate::config::ReducerConfig;
use crate::document::FrequencyData;
use crate::error::Result;
use rayon::prelude::*;

/// Short-time spectrum reducer
pub struct SpectrumReducer {
    window_size: usize,
    reduction_factor: usize,
    fft_engine: FftEngine,
}

impl SpectrumReducer {
    /// Create new reducer
    ///
    /// Fails with `Configuration` if either parameter is zero.
    pub fn new(config: &ReducerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            window_size: config.window_size,
            reduction_factor: config.reduction_factor,
            fft_engine: FftEngine::new(config.window_size)?,
        })
    }

    /// Reduce a single window of exactly `window_size` samples
    pub fn reduce_window(&mut self, window: &[f64]) -> Result<Vec<f64>> {
        let magnitudes = self.fft_engine.half_spectrum_magnitude(window)?;
        Ok(reduce_magnitudes(&magnitudes, self.reduction_factor))
    }

    /// Reduce every complete window of `samples`
    ///
    /// Windows are transformed in parallel; each worker gets its own copy of
    /// the FFT buffers. Row order always follows window order.
    pub fn reduce(&self, samples: &[f64]) -> Result<FrequencyData> {
        log::debug!(
            "Reducing {} windows of {} samples ({} trailing samples dropped)",
            window_count(samples.len(), self.window_size),
            self.window_size,
            remainder_len(samples.len(), self.window_size)
        );

        let reduction_factor = self.reduction_factor;
        let rows = windows(samples, self.window_size)
            .map_init(
                || self.fft_engine.clone(),
                |engine, window| {
                    let magnitudes = engine.half_spectrum_magnitude(window)?;
                    Ok(reduce_magnitudes(&magnitudes, reduction_factor))
                },
            )
            .collect::<Result<Vec<Vec<f64>>>>()?;

        FrequencyData::from_rows(rows, self.num_bands())
    }

    /// Lower-edge frequency in Hz of each output band
    pub fn band_frequencies_hz(&self, sample_rate: f64) -> Vec<f64> {
        band_start_frequencies(self.window_size, self.reduction_factor, sample_rate)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn reduction_factor(&self) -> usize {
        self.reduction_factor
    }

    /// Number of bands per reduced spectrum
    pub fn num_bands(&self) -> usize {
        (self.window_size / 2).div_ceil(self.reduction_factor)
    }
}
