//! Frequency Data - reduced short-time spectra for audio visualizers
//!
//! Reads a WAV file, splits it into non-overlapping windows, takes the
//! magnitude of the lower half of each window's DFT, averages adjacent bins
//! into bands and writes the result as a JSON array of arrays.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod audio;
pub mod config;
pub mod document;
pub mod error;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use audio::AudioSignal;
pub use config::{ChannelMode, ReducerConfig};
pub use document::FrequencyData;
pub use error::{FrequencyDataError, Result};
pub use spectrum::SpectrumReducer;

use std::path::Path;

/// Reduce an already-decoded signal
pub fn analyze_signal(signal: &AudioSignal, config: &ReducerConfig) -> Result<FrequencyData> {
    let reducer = SpectrumReducer::new(config)?;
    let samples = audio::select_channel(signal, config.channel_mode)?;

    log::debug!(
        "Analyzing {:.2}s at {} Hz: window {} samples, {} bands per window",
        signal.duration_secs(),
        signal.sample_rate(),
        config.window_size,
        reducer.num_bands()
    );
    if log::log_enabled!(log::Level::Debug) {
        let bands = reducer.band_frequencies_hz(f64::from(signal.sample_rate()));
        if let (Some(first), Some(last)) = (bands.first(), bands.last()) {
            log::debug!("Band lower edges span {:.1} Hz to {:.1} Hz", first, last);
        }
    }

    reducer.reduce(&samples)
}

/// Run the whole pipeline: load `input`, reduce, write JSON to `output`
///
/// Configuration is validated before any file is touched.
pub fn process_audio(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ReducerConfig,
) -> Result<FrequencyData> {
    config.validate()?;

    let signal = AudioSignal::load(input)?;
    let data = analyze_signal(&signal, config)?;

    let output = output.as_ref();
    data.write_json(output)?;
    log::info!("Reduced frequency data saved to {}", output.display());

    Ok(data)
}
