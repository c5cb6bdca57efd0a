//! Frequency-axis reduction by bucketed averaging

/// Average consecutive groups of `reduction_factor` magnitudes
///
/// The last group may be shorter and is averaged over what it holds.
/// Panics if `reduction_factor` is zero.
pub fn reduce_magnitudes(magnitudes: &[f64], reduction_factor: usize) -> Vec<f64> {
    magnitudes
        .chunks(reduction_factor)
        .map(|group| group.iter().sum::<f64>() / group.len() as f64)
        .collect()
}

/// Lower-edge frequency in Hz of each reduced band
///
/// Band `b` starts at bin `b * reduction_factor`, and each bin spans
/// `sample_rate / window_size` Hz.
pub fn band_start_frequencies(
    window_size: usize,
    reduction_factor: usize,
    sample_rate: f64,
) -> Vec<f64> {
    let bin_width = sample_rate / window_size as f64;
    (0..window_size / 2)
        .step_by(reduction_factor)
        .map(|bin| bin as f64 * bin_width)
        .collect()
}
