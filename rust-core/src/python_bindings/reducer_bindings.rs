//! Python bindings for spectrum reduction

use numpy::{PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::prelude::*;
use std::path::PathBuf;

use crate::config::{ChannelMode, ReducerConfig, DEFAULT_REDUCTION_FACTOR, DEFAULT_WINDOW_SIZE};
use crate::spectrum::SpectrumReducer;

/// Reduce a WAV file and write the JSON document
///
/// Args:
///     file_path: Input WAV file
///     output_path: Output JSON file (created or overwritten)
///     window_size: Samples per window (default: 1024)
///     reduction_factor: Bins averaged per band (default: 32)
///     channel: Channel index to analyze, or None to mix down
///
/// Returns:
///     Reduced spectra as a (windows, bands) numpy array
#[pyfunction]
#[pyo3(signature = (
    file_path,
    output_path,
    window_size = DEFAULT_WINDOW_SIZE,
    reduction_factor = DEFAULT_REDUCTION_FACTOR,
    channel = None,
))]
pub fn process_audio<'py>(
    py: Python<'py>,
    file_path: PathBuf,
    output_path: PathBuf,
    window_size: usize,
    reduction_factor: usize,
    channel: Option<u16>,
) -> PyResult<&'py PyArray2<f64>> {
    let channel_mode = channel.map_or(ChannelMode::Mixdown, ChannelMode::Select);
    let config =
        ReducerConfig::new(window_size, reduction_factor).with_channel_mode(channel_mode);

    let data = py.allow_threads(|| crate::process_audio(&file_path, &output_path, &config))?;

    Ok(PyArray2::from_owned_array(py, data.into_array()))
}

/// Spectrum reducer exposed to Python
#[pyclass(name = "SpectrumReducer")]
pub struct PySpectrumReducer {
    reducer: SpectrumReducer,
}

#[pymethods]
impl PySpectrumReducer {
    /// Create a new spectrum reducer
    ///
    /// Args:
    ///     window_size: Samples per window
    ///     reduction_factor: Bins averaged per band
    #[new]
    #[pyo3(signature = (
        window_size = DEFAULT_WINDOW_SIZE,
        reduction_factor = DEFAULT_REDUCTION_FACTOR,
    ))]
    fn new(window_size: usize, reduction_factor: usize) -> PyResult<Self> {
        let config = ReducerConfig::new(window_size, reduction_factor);
        Ok(Self {
            reducer: SpectrumReducer::new(&config)?,
        })
    }

    /// Reduce a mono signal
    ///
    /// Args:
    ///     signal: 1-D numpy array of samples
    ///
    /// Returns:
    ///     Reduced spectra as a (windows, bands) numpy array
    fn reduce<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray2<f64>> {
        let data = match signal.as_slice() {
            Ok(samples) => self.reducer.reduce(samples)?,
            // Strided views need a contiguous copy
            Err(_) => self.reducer.reduce(&signal.as_array().to_vec())?,
        };

        Ok(PyArray2::from_owned_array(py, data.into_array()))
    }

    /// Lower-edge frequency of each band in Hz
    fn band_frequencies_hz<'py>(
        &self,
        py: Python<'py>,
        sample_rate: f64,
    ) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.reducer.band_frequencies_hz(sample_rate))
    }

    #[getter]
    fn window_size(&self) -> usize {
        self.reducer.window_size()
    }

    #[getter]
    fn reduction_factor(&self) -> usize {
        self.reducer.reduction_factor()
    }

    #[getter]
    fn num_bands(&self) -> usize {
        self.reducer.num_bands()
    }
}
