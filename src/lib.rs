//! IMU Signals Library
//!
//! Smoothing, filtering and stationarity gating for inertial sensor time
//! series (accelerometer and gyroscope channels).
//!
//! Every core operation is a stateless transform over caller-owned slices:
//!
//! - **Moving average**: trailing window that shrinks at the start
//! - **Low-pass filter**: first-order exponential (one-pole IIR)
//! - **Movement detection**: thresholded central second difference
//! - **ZUPT gate**: zero velocity during sustained low-acceleration runs
//!
//! # Quick Start
//!
//! ```
//! use imu_signals::{detect_movement, low_pass, moving_average, ProcessingConfig};
//!
//! let config = ProcessingConfig::default();
//! let position: Vec<f64> = (0..50).map(|i| (i as f64 * 0.2).sin()).collect();
//!
//! let smoothed = moving_average(&position, config.window_size)?;
//! let filtered = low_pass(&smoothed, config.cutoff_frequency, config.sampling_rate)?;
//! let moving = detect_movement(&filtered, config.movement_threshold, config.sampling_rate)?;
//!
//! assert_eq!(moving.len(), position.len());
//! assert_eq!(moving[0], 0.0);
//! # Ok::<(), imu_signals::SignalError>(())
//! ```
//!
//! # Errors and untouched output
//!
//! The `*_into` operations check all preconditions before writing. When they
//! return `Err`, the output buffer holds exactly what it held before the
//! call, so a sentinel-filled buffer is a reliable way to spot a rejected
//! call. The ZUPT gate reports its outcome as [`ZuptStatus`]; the integer
//! codes `1`/`0`/`-1` are available through [`zupt_status_code`].
//!
//! # Boundary handling
//!
//! | Operation | First samples | Last sample |
//! |-----------|---------------|-------------|
//! | Moving average | mean of the available prefix | full window |
//! | Low-pass | `y[0] = x[0]` | recurrence |
//! | Movement | `0.0` | `0.0` |

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod detection;
pub mod error;
pub mod filters;
pub mod gait;
pub mod io;

// Re-exports for convenient access
pub use config::ProcessingConfig;
pub use detection::{
    apply_zupt, apply_zupt_segments, count_flags, detect_movement, detect_movement_into,
    second_derivative_into, zupt_status_code, ZuptStatus,
};
pub use error::{Result, SignalError};
pub use filters::{low_pass, low_pass_alpha, low_pass_into, moving_average, moving_average_into};
pub use gait::{analyze_walking, WalkingSummary};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
