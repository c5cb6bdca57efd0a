//! Multi-channel to single-channel conversion

use super::loader::AudioSignal;
use crate::config::ChannelMode;
use crate::error::{FrequencyDataError, Result};
use std::borrow::Cow;

/// Produce the single-channel sample sequence to analyze
///
/// Mono signals are borrowed as-is. A trailing partial frame is dropped.
pub fn select_channel(signal: &AudioSignal, mode: ChannelMode) -> Result<Cow<'_, [f64]>> {
    let channels = signal.channels() as usize;

    if let ChannelMode::Select(index) = mode {
        if index >= signal.channels() {
            return Err(FrequencyDataError::Configuration(format!(
                "channel {} requested but signal has {} channel(s)",
                index, channels
            )));
        }
    }

    if signal.is_mono() {
        return Ok(Cow::Borrowed(signal.samples()));
    }

    let frames = signal.samples().chunks_exact(channels);
    let mono: Vec<f64> = match mode {
        ChannelMode::Mixdown => {
            log::debug!("Mixing {} channels down to mono", channels);
            frames
                .map(|frame| frame.iter().sum::<f64>() / channels as f64)
                .collect()
        }
        ChannelMode::Select(index) => {
            log::debug!("Selecting channel {} of {}", index, channels);
            frames.map(|frame| frame[index as usize]).collect()
        }
    };

    Ok(Cow::Owned(mono))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo() -> AudioSignal {
        // L = 1, 3, 5 ; R = 3, 5, 7 ; plus one dangling sample
        AudioSignal::new(8000, 2, vec![1.0, 3.0, 3.0, 5.0, 5.0, 7.0, 9.0]).unwrap()
    }

    #[test]
    fn test_mono_is_borrowed() {
        let signal = AudioSignal::mono(8000, vec![1.0, 2.0, 3.0]).unwrap();
        let samples = select_channel(&signal, ChannelMode::Mixdown).unwrap();

        assert!(matches!(samples, Cow::Borrowed(_)));
        assert_eq!(&*samples, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mixdown_averages_frames() {
        let signal = stereo();
        let samples = select_channel(&signal, ChannelMode::Mixdown).unwrap();
        assert_eq!(&*samples, &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_select_channel() {
        let signal = stereo();
        let right = select_channel(&signal, ChannelMode::Select(1)).unwrap();
        assert_eq!(&*right, &[3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_select_out_of_range() {
        let err = select_channel(&stereo(), ChannelMode::Select(2)).unwrap_err();
        assert!(matches!(err, FrequencyDataError::Configuration(_)));

        // Also rejected for mono so a bad index never goes unnoticed
        let mono = AudioSignal::mono(8000, vec![0.0; 4]).unwrap();
        assert!(select_channel(&mono, ChannelMode::Select(1)).is_err());
        assert!(select_channel(&mono, ChannelMode::Select(0)).is_ok());
    }
}
