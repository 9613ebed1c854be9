//! Movement and stationarity detection.
//!
//! This module provides:
//! - [`movement`]: second-derivative movement flags
//! - [`zupt`]: zero-velocity-update gating from acceleration runs

pub mod movement;
pub mod zupt;

pub use movement::{
    count_flags, detect_movement, detect_movement_into, second_derivative_into, MIN_SAMPLES,
};
pub use zupt::{apply_zupt, apply_zupt_segments, zupt_status_code, ZuptStatus};
