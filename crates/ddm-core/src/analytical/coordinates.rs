//! Scaled coordinates of the drift-diffusion process.
//!
//! ```text
//! X = drift * start / noise^2
//! Z = drift * threshold / noise^2
//! ```
//!
//! both bounded to `[-limit, limit]`. Under [`ClampMode::Independent`] each
//! coordinate is clamped on its own. A start well inside the boundaries can
//! then land on a boundary in scaled space. [`ClampMode::Proportional`] clamps
//! `Z` and scales `X` by the same factor, so the starting point keeps its
//! relative position between the boundaries.
//!
//! Alongside each scaled coordinate the matching noise-normalised length
//! (`length / noise`) is kept, so the moment formulas can be evaluated without
//! dividing by the drift. After clamping the lengths are recomputed as
//! `scaled / (drift / noise)`, which keeps the closed form evaluated at the
//! clamped coordinates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClampMode;
use crate::types::DecisionParameters;

/// Derived coordinates for one solver call. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledCoordinates {
    /// Clamped `drift * start / noise^2`.
    pub x: f64,
    /// Clamped `drift * threshold / noise^2`.
    pub z: f64,
    /// Starting value divided by noise (after clamping, if any).
    pub start_length: f64,
    /// Threshold divided by noise (after clamping, if any).
    pub threshold_length: f64,
}

impl ScaledCoordinates {
    /// Derive coordinates from already-validated parameters.
    ///
    /// The starting value is first bounded to `[-threshold, threshold]`.
    pub fn from_parameters(params: &DecisionParameters, limit: f64, mode: ClampMode) -> Self {
        let start = params.bounded_starting_value();
        if start != params.starting_value {
            debug!(
                starting_value = params.starting_value,
                threshold = params.threshold,
                "Starting value outside the boundaries; absorbed immediately"
            );
        }

        let start_length = start / params.noise;
        let threshold_length = params.threshold / params.noise;

        // drift / noise, the ratio between scaled coordinates and normalised lengths
        let drift_per_noise = params.drift_rate / params.noise;
        if drift_per_noise == 0.0 {
            return Self {
                x: 0.0,
                z: 0.0,
                start_length,
                threshold_length,
            };
        }

        let scaled_threshold = drift_per_noise * threshold_length;
        if scaled_threshold.abs() <= limit {
            return Self {
                x: drift_per_noise * start_length,
                z: scaled_threshold,
                start_length,
                threshold_length,
            };
        }

        // |start| <= threshold, so X can only leave the range when Z does.
        let z = limit.copysign(scaled_threshold);
        let x = match mode {
            ClampMode::Independent => (drift_per_noise * start_length).clamp(-limit, limit),
            ClampMode::Proportional => z * (start / params.threshold),
        };
        debug!(scaled_threshold, clamped = z, x, %mode, "Scaled coordinates clamped");

        Self {
            x,
            z,
            start_length: x / drift_per_noise,
            threshold_length: z / drift_per_noise,
        }
    }

    /// Scaled coordinate of the walk's distance to the lower boundary (`X + Z`).
    pub fn upper_branch(&self) -> (f64, f64) {
        (self.x + self.z, self.start_length + self.threshold_length)
    }

    /// Scaled coordinate of the walk's distance to the upper boundary (`Z - X`).
    pub fn lower_branch(&self) -> (f64, f64) {
        (self.z - self.x, self.threshold_length - self.start_length)
    }

    /// Scaled distance between the boundaries (`2Z`).
    pub fn span(&self) -> (f64, f64) {
        (2.0 * self.z, 2.0 * self.threshold_length)
    }
}
