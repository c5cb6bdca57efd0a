//! Partition a signal into consecutive, non-overlapping windows
//!
//! Trailing samples that do not fill a whole window are dropped.

use rayon::prelude::*;
use rayon::slice::ChunksExact;

/// Complete windows of `window_size` samples, in left-to-right order
///
/// The iterator is lazy and indexed, so `collect` keeps window order while
/// windows are processed in parallel. Calling again on the same slice yields
/// the same windows. Panics if `window_size` is zero; callers validate
/// configuration first.
pub fn windows(samples: &[f64], window_size: usize) -> ChunksExact<'_, f64> {
    samples.par_chunks_exact(window_size)
}

/// Number of complete windows: floor(len / window_size)
pub fn window_count(len: usize, window_size: usize) -> usize {
    if window_size == 0 {
        0
    } else {
        len / window_size
    }
}

/// Number of samples discarded at the end of the signal
pub fn remainder_len(len: usize, window_size: usize) -> usize {
    if window_size == 0 {
        len
    } else {
        len % window_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_partition() {
        let samples: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let collected: Vec<&[f64]> = windows(&samples, 4).collect();

        assert_eq!(collected, vec![&[0.0, 1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0, 7.0][..]]);
    }

    #[test]
    fn test_remainder_dropped() {
        let samples = vec![1.0; 10];
        assert_eq!(windows(&samples, 4).len(), 2);
        assert_eq!(window_count(samples.len(), 4), 2);
        assert_eq!(remainder_len(samples.len(), 4), 2);
    }

    #[test]
    fn test_window_larger_than_signal() {
        let samples = vec![1.0; 3];
        assert_eq!(windows(&samples, 4).count(), 0);
        assert_eq!(window_count(3, 4), 0);
    }

    #[test]
    fn test_order_preserved() {
        let samples: Vec<f64> = (0..4096).map(|i| i as f64).collect();
        let firsts: Vec<f64> = windows(&samples, 16).map(|w| w[0]).collect();

        assert_eq!(firsts.len(), window_count(samples.len(), 16));
        assert!(firsts.windows(2).all(|pair| pair[1] - pair[0] == 16.0));
    }
}
