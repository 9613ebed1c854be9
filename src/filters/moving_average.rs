//! Trailing moving average.
//!
//! `output[i]` is the arithmetic mean of `input[max(0, i - w + 1) ..= i]`.
//! Near the start of the sequence fewer than `w` samples exist, and the mean
//! is taken over whatever is available: no zero padding, no skipped outputs.

use tracing::debug;

use crate::error::{ensure_same_len, Result, SignalError};

/// Compute the trailing moving average of `input` into `output`.
///
/// # Arguments
///
/// * `input` - Sample sequence to smooth
/// * `output` - Pre-allocated buffer, same length as `input`
/// * `window_size` - Number of trailing samples to average. Values larger
///   than the sequence are valid and simply average the whole prefix.
///
/// # Errors
///
/// Returns an error, leaving `output` untouched, if `input` is empty,
/// `window_size` is zero, or the lengths differ.
///
/// # Example
///
/// ```
/// use imu_signals::filters::moving_average_into;
///
/// let input = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut output = [0.0; 5];
/// moving_average_into(&input, &mut output, 3)?;
/// assert_eq!(output, [1.0, 1.5, 2.0, 3.0, 4.0]);
/// # Ok::<(), imu_signals::SignalError>(())
/// ```
pub fn moving_average_into(input: &[f64], output: &mut [f64], window_size: usize) -> Result<()> {
    if let Err(err) = validate(input, output.len(), window_size) {
        debug!(%err, "moving average rejected its input");
        return Err(err);
    }

    // Sum each window directly: a NaN or a spike only reaches the outputs
    // whose window holds it.
    for (i, out) in output.iter_mut().enumerate() {
        let start = (i + 1).saturating_sub(window_size);
        let window = &input[start..=i];
        *out = window.iter().sum::<f64>() / window.len() as f64;
    }
    Ok(())
}

/// Allocating form of [`moving_average_into`].
///
/// # Errors
///
/// Same conditions as [`moving_average_into`].
pub fn moving_average(input: &[f64], window_size: usize) -> Result<Vec<f64>> {
    let mut output = vec![0.0; input.len()];
    moving_average_into(input, &mut output, window_size)?;
    Ok(output)
}

fn validate(input: &[f64], output_len: usize, window_size: usize) -> Result<()> {
    if input.is_empty() {
        return Err(SignalError::invalid_input("moving average needs at least one sample"));
    }
    if window_size == 0 {
        return Err(SignalError::invalid_parameter("window_size", "must be at least 1"));
    }
    ensure_same_len(input.len(), output_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SENTINEL: f64 = -999.0;

    /// Definition written out independently, used as the reference.
    fn naive(input: &[f64], w: usize) -> Vec<f64> {
        (0..input.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(w);
                let slice = &input[start..=i];
                slice.iter().sum::<f64>() / slice.len() as f64
            })
            .collect()
    }

    #[test]
    fn test_known_example() {
        let out = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(out, vec![1.0, 1.5, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_prefix_is_expanding_mean() {
        let input = [4.0, 8.0, 6.0, 2.0, 10.0, 0.0];
        let w = 4;
        let out = moving_average(&input, w).unwrap();
        for i in 0..w - 1 {
            let expected = input[..=i].iter().sum::<f64>() / (i + 1) as f64;
            assert_relative_eq!(out[i], expected, epsilon = 1e-12);
        }
        for i in w - 1..input.len() {
            let expected = input[i + 1 - w..=i].iter().sum::<f64>() / w as f64;
            assert_relative_eq!(out[i], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matches_naive_definition() {
        let input: Vec<f64> = (0..200).map(|i| (i as f64 * 0.37).sin() * 3.0 + 0.1 * i as f64).collect();
        for w in [1, 2, 7, 13, 50, 199, 200, 500] {
            let fast = moving_average(&input, w).unwrap();
            let reference = naive(&input, w);
            for (a, b) in fast.iter().zip(reference.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_non_finite_sample_leaves_the_window() {
        let out = moving_average(&[f64::NAN, 1.0, 1.0, 1.0, 1.0], 2).unwrap();
        assert!(out[0].is_nan() && out[1].is_nan());
        assert_eq!(&out[2..], &[1.0, 1.0, 1.0]);

        let out = moving_average(&[1.0, f64::INFINITY, 2.0, 4.0], 2).unwrap();
        assert_eq!(out, vec![1.0, f64::INFINITY, f64::INFINITY, 3.0]);
    }

    #[test]
    fn test_large_spike_does_not_cancel_later_samples() {
        let input = [1e16, 1.0, 1.0, 1.0];
        let out = moving_average(&input, 2).unwrap();
        assert_eq!(out, naive(&input, 2));
        assert_eq!(&out[2..], &[1.0, 1.0]);
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let input = [3.5, -1.0, 2.25];
        assert_eq!(moving_average(&input, 1).unwrap(), input.to_vec());
    }

    #[test]
    fn test_window_equal_to_length() {
        let out = moving_average(&[2.0, 4.0, 6.0, 8.0], 4).unwrap();
        assert_eq!(out, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_window_larger_than_length_caps() {
        let out = moving_average(&[2.0, 4.0, 6.0], 10).unwrap();
        assert_eq!(out, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_invalid_input_leaves_output_untouched() {
        let mut output = [SENTINEL; 3];

        assert!(moving_average_into(&[1.0, 2.0, 3.0], &mut output, 0).is_err());
        assert_eq!(output, [SENTINEL; 3]);

        assert!(moving_average_into(&[1.0, 2.0], &mut output, 2).is_err());
        assert_eq!(output, [SENTINEL; 3]);

        let mut empty: [f64; 0] = [];
        assert!(moving_average_into(&[], &mut empty, 2).is_err());
    }

    #[test]
    fn test_idempotent() {
        let input = [0.3, 1.7, -2.0, 4.4, 0.0, 9.1];
        let mut output = [0.0; 6];
        moving_average_into(&input, &mut output, 3).unwrap();
        let first = output;
        moving_average_into(&input, &mut output, 3).unwrap();
        assert_eq!(first, output);
    }
}
