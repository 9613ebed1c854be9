//! Movement detection from the second derivative of a position-like signal.
//!
//! Acceleration is estimated with the central second difference
//!
//! ```text
//! a[i] = (x[i+1] - 2 x[i] + x[i-1]) / dt²      for 1 <= i <= n-2
//! ```
//!
//! The first and last samples have no neighbour on one side, so their
//! acceleration and their movement flag are always `0.0`. Flags are `f64`
//! (`1.0` / `0.0`) so they can be summed or filtered like any other channel.

use tracing::debug;

use crate::error::{ensure_positive, ensure_same_len, Result, SignalError};

/// Minimum sequence length for a second difference.
pub const MIN_SAMPLES: usize = 3;

/// Flag value for a moving sample.
const MOVING: f64 = 1.0;

/// Flag value for a still sample (and for both boundaries).
const STILL: f64 = 0.0;

/// Estimate acceleration with the central second difference.
///
/// `output[0]` and `output[n-1]` are set to `0.0`.
///
/// # Errors
///
/// Returns an error, leaving `output` untouched, if `input` has fewer than
/// [`MIN_SAMPLES`] samples, `sampling_rate` is not positive, or the lengths
/// differ.
pub fn second_derivative_into(input: &[f64], output: &mut [f64], sampling_rate: f64) -> Result<()> {
    if let Err(err) = validate(input, output.len(), sampling_rate) {
        debug!(%err, "second derivative rejected its input");
        return Err(err);
    }
    write_second_derivative(input, output, sampling_rate);
    Ok(())
}

fn write_second_derivative(input: &[f64], output: &mut [f64], sampling_rate: f64) {
    let n = input.len();
    let dt = 1.0 / sampling_rate;
    let dt2 = dt * dt;

    output[0] = 0.0;
    output[n - 1] = 0.0;
    for (i, w) in input.windows(3).enumerate() {
        output[i + 1] = (w[2] - 2.0 * w[1] + w[0]) / dt2;
    }
}

/// Flag samples whose estimated acceleration magnitude exceeds `threshold`.
///
/// Interior samples get `1.0` when `|a[i]| > threshold`, otherwise `0.0`.
/// Boundary samples are always `0.0`, whatever the threshold. A negative
/// threshold therefore flags every interior sample and no boundary sample.
///
/// # Errors
///
/// Returns an error, leaving `output` untouched, if `input` has fewer than
/// [`MIN_SAMPLES`] samples, `sampling_rate` is not positive, or the lengths
/// differ.
///
/// # Example
///
/// ```
/// use imu_signals::detection::detect_movement_into;
///
/// // A bump in position produces acceleration around index 2.
/// let position = [0.0, 0.0, 1.0, 0.0, 0.0];
/// let mut flags = [0.0; 5];
/// detect_movement_into(&position, &mut flags, 0.5, 1.0)?;
/// assert_eq!(flags, [0.0, 1.0, 1.0, 1.0, 0.0]);
/// # Ok::<(), imu_signals::SignalError>(())
/// ```
pub fn detect_movement_into(
    input: &[f64],
    output: &mut [f64],
    threshold: f64,
    sampling_rate: f64,
) -> Result<()> {
    if let Err(err) = validate(input, output.len(), sampling_rate) {
        debug!(%err, "movement detector rejected its input");
        return Err(err);
    }

    // Reuse the output buffer for the acceleration estimate, then threshold
    // it in place. Boundaries stay at their zero fill.
    write_second_derivative(input, output, sampling_rate);
    let n = output.len();
    for a in &mut output[1..n - 1] {
        *a = if a.abs() > threshold { MOVING } else { STILL };
    }
    Ok(())
}

/// Allocating form of [`detect_movement_into`].
///
/// # Errors
///
/// Same conditions as [`detect_movement_into`].
pub fn detect_movement(input: &[f64], threshold: f64, sampling_rate: f64) -> Result<Vec<f64>> {
    let mut output = vec![0.0; input.len()];
    detect_movement_into(input, &mut output, threshold, sampling_rate)?;
    Ok(output)
}

/// Number of samples flagged as moving.
#[must_use]
pub fn count_flags(flags: &[f64]) -> usize {
    flags.iter().filter(|&&f| f == MOVING).count()
}

fn validate(input: &[f64], output_len: usize, sampling_rate: f64) -> Result<()> {
    if input.len() < MIN_SAMPLES {
        return Err(SignalError::sequence_too_short(MIN_SAMPLES, input.len()));
    }
    ensure_positive("sampling_rate", sampling_rate)?;
    ensure_same_len(input.len(), output_len)
}
