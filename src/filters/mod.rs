//! Smoothing filters over sample sequences.
//!
//! This module provides:
//! - [`moving_average`]: trailing, boundary-shrinking moving average
//! - [`low_pass`]: first-order exponential (one-pole IIR) low-pass filter
//!
//! Both come in two flavours: `*_into` writes into a caller-provided buffer of
//! the same length as the input, the plain form allocates the output.

pub mod low_pass;
pub mod moving_average;

pub use low_pass::{low_pass, low_pass_alpha, low_pass_into};
pub use moving_average::{moving_average, moving_average_into};
