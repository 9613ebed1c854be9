//! Zero-velocity update (ZUPT) gating.
//!
//! Inertial velocity drifts when integrated. During stationary periods the
//! true velocity is zero, so the gate scans the acceleration channel for runs
//! of consecutive samples with `|a| < threshold` and clears the matching
//! velocity samples.
//!
//! Gating rules:
//!
//! - Every below-threshold sample has its velocity zeroed immediately, before
//!   the run is confirmed.
//! - A sample at or above the threshold resets the run counter; its velocity
//!   is left as is.
//! - Once the run reaches `min_run` samples, [`apply_zupt`] stops and reports
//!   [`ZuptStatus::Stationary`]. Later samples are not examined.
//!
//! [`apply_zupt_segments`] keeps going after each confirmation to gate a whole
//! trace.

use serde::Serialize;
use tracing::debug;

use crate::error::{ensure_same_len, Result, SignalError};

/// Outcome of a successful ZUPT scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZuptStatus {
    /// A stationary run was confirmed; the scan stopped at `confirmed_at`.
    Stationary {
        /// Index of the sample that completed the run.
        confirmed_at: usize,
    },
    /// The whole sequence was scanned without confirming a run.
    Moving,
}

impl ZuptStatus {
    /// Whether a stationary run was confirmed.
    #[must_use]
    pub const fn is_stationary(self) -> bool {
        matches!(self, Self::Stationary { .. })
    }

    /// Integer status code: `1` for stationary, `0` for moving.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Stationary { .. } => 1,
            Self::Moving => 0,
        }
    }
}

/// Integer status code for a gate result, with `-1` for a rejected call.
#[must_use]
pub fn zupt_status_code(result: &Result<ZuptStatus>) -> i32 {
    match result {
        Ok(status) => status.code(),
        Err(_) => -1,
    }
}

/// Zero velocity samples during a low-acceleration run.
///
/// # Arguments
///
/// * `velocity` - Velocity channel, updated in place
/// * `accel` - Acceleration channel, same length as `velocity`
/// * `threshold` - Magnitude below which a sample counts as stationary
/// * `min_run` - Consecutive stationary samples needed to confirm. With
///   `min_run == 0` the first stationary sample confirms.
///
/// # Errors
///
/// Returns an error, leaving `velocity` untouched, if the sequences are empty
/// or their lengths differ.
///
/// # Example
///
/// ```
/// use imu_signals::detection::{apply_zupt, ZuptStatus};
///
/// let accel = [2.0, 0.01, 0.02, 0.01, 3.0];
/// let mut velocity = [1.0, 1.1, 1.2, 1.3, 1.4];
/// let status = apply_zupt(&mut velocity, &accel, 0.05, 3)?;
///
/// assert_eq!(status, ZuptStatus::Stationary { confirmed_at: 3 });
/// assert_eq!(velocity, [1.0, 0.0, 0.0, 0.0, 1.4]);
/// # Ok::<(), imu_signals::SignalError>(())
/// ```
pub fn apply_zupt(
    velocity: &mut [f64],
    accel: &[f64],
    threshold: f64,
    min_run: usize,
) -> Result<ZuptStatus> {
    if let Err(err) = validate(velocity.len(), accel.len()) {
        debug!(%err, "ZUPT gate rejected its input");
        return Err(err);
    }
    Ok(scan(velocity, accel, threshold, min_run))
}

fn scan(velocity: &mut [f64], accel: &[f64], threshold: f64, min_run: usize) -> ZuptStatus {
    let mut run = 0usize;
    for (i, (v, &a)) in velocity.iter_mut().zip(accel).enumerate() {
        if a.abs() < threshold {
            run += 1;
            *v = 0.0;
            if run >= min_run {
                debug!(index = i, run, "stationary run confirmed");
                return ZuptStatus::Stationary { confirmed_at: i };
            }
        } else {
            run = 0;
        }
    }
    ZuptStatus::Moving
}

/// Gate a whole trace by restarting the scan after every confirmation.
///
/// Each segment starts right after the previous confirmation with a fresh run
/// counter, so a long stationary period confirms once every `min_run`
/// samples. Returns the confirmation indices, in order.
///
/// # Errors
///
/// Same conditions as [`apply_zupt`].
pub fn apply_zupt_segments(
    velocity: &mut [f64],
    accel: &[f64],
    threshold: f64,
    min_run: usize,
) -> Result<Vec<usize>> {
    if let Err(err) = validate(velocity.len(), accel.len()) {
        debug!(%err, "ZUPT segment gate rejected its input");
        return Err(err);
    }

    let mut confirmations = Vec::new();
    let mut start = 0;
    while start < accel.len() {
        match scan(&mut velocity[start..], &accel[start..], threshold, min_run) {
            ZuptStatus::Stationary { confirmed_at } => {
                let index = start + confirmed_at;
                confirmations.push(index);
                start = index + 1;
            }
            ZuptStatus::Moving => break,
        }
    }
    Ok(confirmations)
}

fn validate(velocity_len: usize, accel_len: usize) -> Result<()> {
    if accel_len == 0 {
        return Err(SignalError::invalid_input("ZUPT gate needs at least one sample"));
    }
    ensure_same_len(accel_len, velocity_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_below_threshold_confirms() {
        let accel = [0.01; 20];
        let mut velocity = [5.0; 20];
        let status = apply_zupt(&mut velocity, &accel, 0.05, 10).unwrap();

        assert_eq!(status, ZuptStatus::Stationary { confirmed_at: 9 });
        assert_eq!(status.code(), 1);
        assert!(velocity[..10].iter().all(|&v| v == 0.0));
        // Early exit: nothing past the confirmation is touched.
        assert!(velocity[10..].iter().all(|&v| v == 5.0));
    }

    #[test]
    fn test_all_above_threshold_untouched() {
        let accel = [1.0, -2.0, 0.5, 3.0];
        let mut velocity = [0.1, 0.2, 0.3, 0.4];
        let status = apply_zupt(&mut velocity, &accel, 0.5, 2).unwrap();

        assert_eq!(status, ZuptStatus::Moving);
        assert_eq!(status.code(), 0);
        assert_eq!(velocity, [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_short_runs_are_zeroed_provisionally() {
        // Two runs of length 2, never reaching 3.
        let accel = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let mut velocity = [9.0; 6];
        let status = apply_zupt(&mut velocity, &accel, 0.1, 3).unwrap();

        assert_eq!(status, ZuptStatus::Moving);
        assert_eq!(velocity, [0.0, 0.0, 9.0, 0.0, 0.0, 9.0]);
    }

    #[test]
    fn test_negative_acceleration_uses_magnitude() {
        let accel = [-0.01, -0.02, 0.01];
        let mut velocity = [1.0; 3];
        let status = apply_zupt(&mut velocity, &accel, 0.05, 3).unwrap();
        assert!(status.is_stationary());
        assert_eq!(velocity, [0.0; 3]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let accel = [0.05, 0.05];
        let mut velocity = [1.0, 1.0];
        let status = apply_zupt(&mut velocity, &accel, 0.05, 1).unwrap();
        assert_eq!(status, ZuptStatus::Moving);
        assert_eq!(velocity, [1.0, 1.0]);
    }

    #[test]
    fn test_zero_min_run_confirms_on_first_still_sample() {
        let accel = [1.0, 0.0, 0.0];
        let mut velocity = [2.0; 3];
        let status = apply_zupt(&mut velocity, &accel, 0.5, 0).unwrap();
        assert_eq!(status, ZuptStatus::Stationary { confirmed_at: 1 });
        assert_eq!(velocity, [2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_invalid_input() {
        let mut empty: [f64; 0] = [];
        let result = apply_zupt(&mut empty, &[], 0.1, 3);
        assert!(result.is_err());
        assert_eq!(zupt_status_code(&result), -1);

        let mut velocity = [7.0; 3];
        let result = apply_zupt(&mut velocity, &[0.0; 4], 0.1, 1);
        assert!(matches!(result, Err(SignalError::LengthMismatch { .. })));
        assert_eq!(velocity, [7.0; 3]);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(zupt_status_code(&Ok(ZuptStatus::Moving)), 0);
        assert_eq!(
            zupt_status_code(&Ok(ZuptStatus::Stationary { confirmed_at: 0 })),
            1
        );
    }

    #[test]
    fn test_segments_gate_whole_trace() {
        // still(4) move(2) still(5) move(1)
        let accel = [0.0, 0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0];
        let mut velocity = [3.0; 12];
        let confirmations = apply_zupt_segments(&mut velocity, &accel, 0.1, 3).unwrap();

        assert_eq!(confirmations, vec![2, 8]);
        assert_eq!(
            velocity,
            [0.0, 0.0, 0.0, 0.0, 3.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0]
        );
    }

    #[test]
    fn test_segments_reject_like_single_scan() {
        let mut velocity = [7.0; 3];
        let result = apply_zupt_segments(&mut velocity, &[0.0; 2], 0.1, 1);
        assert!(matches!(result, Err(SignalError::LengthMismatch { .. })));
        assert_eq!(velocity, [7.0; 3]);

        let mut empty: [f64; 0] = [];
        assert!(matches!(
            apply_zupt_segments(&mut empty, &[], 0.1, 1),
            Err(SignalError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_segments_with_zero_min_run_terminate() {
        let accel = [0.0; 5];
        let mut velocity = [1.0; 5];
        let confirmations = apply_zupt_segments(&mut velocity, &accel, 0.1, 0).unwrap();
        assert_eq!(confirmations, vec![0, 1, 2, 3, 4]);
        assert_eq!(velocity, [0.0; 5]);
    }
}
