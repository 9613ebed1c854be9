//! First-order exponential low-pass filter.
//!
//! A one-pole IIR recurrence seeded from the first sample:
//!
//! ```text
//! dt     = 1 / fs
//! RC     = 1 / (2π fc)
//! alpha  = dt / (RC + dt)
//! y[0]   = x[0]
//! y[i]   = alpha * x[i] + (1 - alpha) * y[i-1]
//! ```
//!
//! Roll-off is 6 dB/octave past the cutoff. Each output depends on the
//! previous one, so the pass is strictly sequential.

use std::f64::consts::PI;

use tracing::debug;

use crate::error::{ensure_positive, ensure_same_len, Result, SignalError};

/// Smoothing coefficient for a cutoff `fc` at sampling rate `fs`.
///
/// The result lies in `(0, 1)` for any positive inputs. Larger values track
/// the input more closely.
///
/// # Errors
///
/// Returns an error if either frequency is not positive and finite.
pub fn low_pass_alpha(cutoff_frequency: f64, sampling_rate: f64) -> Result<f64> {
    ensure_positive("cutoff_frequency", cutoff_frequency)?;
    ensure_positive("sampling_rate", sampling_rate)?;
    Ok(alpha_unchecked(cutoff_frequency, sampling_rate))
}

#[inline]
fn alpha_unchecked(fc: f64, fs: f64) -> f64 {
    let dt = 1.0 / fs;
    let rc = 1.0 / (2.0 * PI * fc);
    dt / (rc + dt)
}

/// Apply the low-pass filter to `input`, writing into `output`.
///
/// # Errors
///
/// Returns an error, leaving `output` untouched, if `input` is empty, either
/// frequency is not positive, or the lengths differ.
///
/// # Example
///
/// ```
/// use imu_signals::filters::low_pass_into;
///
/// let input = [1.0, 1.0, 1.0, 1.0];
/// let mut output = [0.0; 4];
/// low_pass_into(&input, &mut output, 5.0, 50.0)?;
/// assert!(output.iter().all(|y| (y - 1.0).abs() < 1e-12));
/// # Ok::<(), imu_signals::SignalError>(())
/// ```
pub fn low_pass_into(
    input: &[f64],
    output: &mut [f64],
    cutoff_frequency: f64,
    sampling_rate: f64,
) -> Result<()> {
    if let Err(err) = validate(input, output.len(), cutoff_frequency, sampling_rate) {
        debug!(%err, "low-pass filter rejected its input");
        return Err(err);
    }

    let alpha = alpha_unchecked(cutoff_frequency, sampling_rate);
    let mut prev = input[0];
    output[0] = prev;
    for (y, &x) in output[1..].iter_mut().zip(&input[1..]) {
        prev = alpha * x + (1.0 - alpha) * prev;
        *y = prev;
    }
    Ok(())
}

/// Allocating form of [`low_pass_into`].
///
/// # Errors
///
/// Same conditions as [`low_pass_into`].
pub fn low_pass(input: &[f64], cutoff_frequency: f64, sampling_rate: f64) -> Result<Vec<f64>> {
    let mut output = vec![0.0; input.len()];
    low_pass_into(input, &mut output, cutoff_frequency, sampling_rate)?;
    Ok(output)
}

fn validate(input: &[f64], output_len: usize, fc: f64, fs: f64) -> Result<()> {
    if input.is_empty() {
        return Err(SignalError::invalid_input("low-pass filter needs at least one sample"));
    }
    ensure_positive("cutoff_frequency", fc)?;
    ensure_positive("sampling_rate", fs)?;
    ensure_same_len(input.len(), output_len)
}
