//! Configuration for signal processing runs.
//!
//! This module provides the [`ProcessingConfig`] struct which centralizes the
//! tunable parameters of the core operations, along with presets for common
//! sensor placements.
//!
//! # Example
//!
//! ```
//! use imu_signals::ProcessingConfig;
//!
//! // Use default configuration
//! let config = ProcessingConfig::default();
//! assert!(config.validate().is_ok());
//!
//! // Use a preset and override one field
//! let walking = ProcessingConfig::pedestrian().with_window_size(9);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError};

/// Parameters shared by the filters and detectors.
///
/// The core functions take these values as plain arguments; the config is a
/// convenience for callers (and the CLI) that want to carry one validated set
/// of parameters around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Number of trailing samples averaged by the moving average.
    pub window_size: usize,

    /// Low-pass cutoff frequency in Hz.
    /// Must stay below the Nyquist frequency (`sampling_rate / 2`).
    pub cutoff_frequency: f64,

    /// Sampling rate in Hz. Defines `dt = 1 / sampling_rate`.
    pub sampling_rate: f64,

    /// Acceleration magnitude above which a sample counts as movement.
    pub movement_threshold: f64,

    /// Acceleration magnitude below which a sample counts as stationary.
    pub zupt_threshold: f64,

    /// Consecutive stationary samples needed to confirm a ZUPT.
    pub zupt_min_run: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            window_size: 13,
            cutoff_frequency: 5.0,
            sampling_rate: 50.0,
            movement_threshold: 0.5,
            zupt_threshold: 0.05,
            zupt_min_run: 10,
        }
    }
}

impl ProcessingConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(SignalError::invalid_config("window_size must be at least 1"));
        }
        if !(self.sampling_rate > 0.0 && self.sampling_rate.is_finite()) {
            return Err(SignalError::invalid_config(
                "sampling_rate must be positive",
            ));
        }
        if !(self.cutoff_frequency > 0.0) {
            return Err(SignalError::invalid_config(
                "cutoff_frequency must be positive",
            ));
        }
        if self.cutoff_frequency >= self.nyquist() {
            return Err(SignalError::invalid_config(format!(
                "cutoff_frequency {} Hz must be below the Nyquist frequency {} Hz",
                self.cutoff_frequency,
                self.nyquist()
            )));
        }
        if !(self.movement_threshold >= 0.0) {
            return Err(SignalError::invalid_config(
                "movement_threshold must be non-negative",
            ));
        }
        if !(self.zupt_threshold >= 0.0) {
            return Err(SignalError::invalid_config(
                "zupt_threshold must be non-negative",
            ));
        }
        Ok(())
    }

    /// Half the sampling rate.
    #[must_use]
    pub fn nyquist(&self) -> f64 {
        self.sampling_rate / 2.0
    }

    /// Sample period in seconds.
    #[must_use]
    pub fn dt(&self) -> f64 {
        1.0 / self.sampling_rate
    }

    /// Preset for a sensor worn on the body while walking.
    ///
    /// Gait energy sits below ~3 Hz, so the cutoff is low and the stationary
    /// run covers roughly a quarter second of stance.
    #[must_use]
    pub fn pedestrian() -> Self {
        Self {
            window_size: 9,
            cutoff_frequency: 3.0,
            sampling_rate: 100.0,
            movement_threshold: 0.8,
            zupt_threshold: 0.3,
            zupt_min_run: 25,
        }
    }

    /// Preset for a phone held in hand (50 Hz, noisier signal).
    #[must_use]
    pub fn handheld() -> Self {
        Self {
            window_size: 13,
            cutoff_frequency: 5.0,
            sampling_rate: 50.0,
            movement_threshold: 1.0,
            zupt_threshold: 0.2,
            zupt_min_run: 15,
        }
    }

    /// Preset for a sensor rigidly mounted in a vehicle.
    #[must_use]
    pub fn vehicle() -> Self {
        Self {
            window_size: 25,
            cutoff_frequency: 2.0,
            sampling_rate: 100.0,
            movement_threshold: 0.3,
            zupt_threshold: 0.05,
            zupt_min_run: 100,
        }
    }

    /// Set the moving average window.
    #[must_use]
    pub const fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the sampling rate.
    #[must_use]
    pub const fn with_sampling_rate(mut self, sampling_rate: f64) -> Self {
        self.sampling_rate = sampling_rate;
        self
    }

    /// Set the low-pass cutoff frequency.
    #[must_use]
    pub const fn with_cutoff_frequency(mut self, cutoff_frequency: f64) -> Self {
        self.cutoff_frequency = cutoff_frequency;
        self
    }
}
