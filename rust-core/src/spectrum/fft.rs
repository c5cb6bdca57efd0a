//! FFT engine using realfft for real-valued signals
//!
//! Produces the unnormalized forward transform, X[k] = Σ x[n]·e^(-2πikn/N),
//! and keeps only the lower half of the bins.

use crate::error::{FrequencyDataError, Result};
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine for fixed-size real windows
///
/// Cloning shares the FFT plan but gives the clone its own buffers, so one
/// engine per worker thread is cheap.
#[derive(Clone)]
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer (clobbered by each transform)
    input_buffer: Vec<f64>,

    /// Reusable output buffer, fft_size/2 + 1 bins
    output_buffer: Vec<Complex<f64>>,

    /// Reusable scratch space for the transform
    scratch: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, must be > 0)
    pub fn new(fft_size: usize) -> Result<Self> {
        if fft_size == 0 {
            return Err(FrequencyDataError::Configuration(
                "FFT size must be positive".to_string(),
            ));
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();
        let scratch = r2c.make_scratch_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
            scratch,
        })
    }

    /// Compute magnitudes of the lower half of the spectrum
    ///
    /// # Arguments
    /// * `window` - Exactly `fft_size` samples
    ///
    /// # Returns
    /// |X[k]| for k = 0..fft_size/2 (Nyquist bin excluded)
    pub fn half_spectrum_magnitude(&mut self, window: &[f64]) -> Result<Vec<f64>> {
        if window.len() != self.fft_size {
            return Err(FrequencyDataError::Transform(format!(
                "window has {} samples, engine expects {}",
                window.len(),
                self.fft_size
            )));
        }

        self.input_buffer.copy_from_slice(window);

        self.r2c
            .process_with_scratch(
                &mut self.input_buffer,
                &mut self.output_buffer,
                &mut self.scratch,
            )
            .map_err(|e| FrequencyDataError::Transform(e.to_string()))?;

        Ok(self.output_buffer[..self.num_bins()]
            .iter()
            .map(|c| c.norm())
            .collect())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of retained bins (fft_size / 2)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }
}
