//! Step analysis entry point.
//!
//! Walking analysis is declared as a contract only: given a position trace
//! and its sample count it should yield a step count and the average step
//! length. No step-detection algorithm is defined for it, so
//! [`analyze_walking`] validates its input and then reports
//! [`SignalError::Unimplemented`].

use serde::Serialize;

use crate::error::{Result, SignalError};

/// Result of a walking analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WalkingSummary {
    /// Number of steps found in the trace.
    pub step_count: usize,
    /// Mean distance covered per step, in the position channel's units.
    pub avg_step_distance: f64,
}

/// Count steps and their average length in a position trace.
///
/// # Arguments
///
/// * `positions` - Position channel
/// * `sampling_size` - Number of samples of `positions` to analyse
///
/// # Errors
///
/// Returns [`SignalError::InvalidInput`] if `sampling_size` is zero or
/// exceeds the trace, and [`SignalError::Unimplemented`] otherwise.
pub fn analyze_walking(positions: &[f64], sampling_size: usize) -> Result<WalkingSummary> {
    if sampling_size == 0 || sampling_size > positions.len() {
        return Err(SignalError::invalid_input(format!(
            "sampling_size {sampling_size} must be in 1..={}",
            positions.len()
        )));
    }
    Err(SignalError::Unimplemented("step count and average step distance"))
}
