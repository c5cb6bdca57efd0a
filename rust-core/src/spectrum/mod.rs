//! Short-time spectral analysis with FFT

pub mod fft;
pub mod windower;
pub mod bands;
pub mod analysis;

pub use fft::FftEngine;
pub use windower::{windows, window_count};
pub use bands::reduce_magnitudes;
pub use analysis::SpectrumReducer;
