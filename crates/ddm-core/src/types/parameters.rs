//! Decision parameters for a two-boundary drift-diffusion process.

use serde::{Deserialize, Serialize};

use crate::error::{DdmError, DdmResult};

/// Scalar parameters of a drift-diffusion decision process.
///
/// Evidence starts at `starting_value`, accumulates at `drift_rate` per unit
/// time with Gaussian noise of standard deviation `noise`, and is absorbed at
/// `+threshold` or `-threshold`. The `non_decision_time` is added to every
/// decision time to form a reaction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionParameters {
    /// Diffusion standard deviation per unit time (sigma). Must be > 0.
    pub noise: f64,
    /// Initial evidence offset, normally within `[-threshold, threshold]`.
    pub starting_value: f64,
    /// Additive latency for encoding and response execution.
    pub non_decision_time: f64,
    /// Signed rate of evidence accumulation (mu).
    pub drift_rate: f64,
    /// Symmetric boundary magnitude. Must be > 0.
    pub threshold: f64,
}

impl Default for DecisionParameters {
    fn default() -> Self {
        Self {
            noise: 0.5,
            starting_value: 0.0,
            non_decision_time: 0.2,
            drift_rate: 1.0,
            threshold: 1.0,
        }
    }
}

impl DecisionParameters {
    /// Create parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diffusion noise.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    /// Set the starting value.
    pub fn with_starting_value(mut self, starting_value: f64) -> Self {
        self.starting_value = starting_value;
        self
    }

    /// Set the non-decision time.
    pub fn with_non_decision_time(mut self, non_decision_time: f64) -> Self {
        self.non_decision_time = non_decision_time;
        self
    }

    /// Set the drift rate.
    pub fn with_drift_rate(mut self, drift_rate: f64) -> Self {
        self.drift_rate = drift_rate;
        self
    }

    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check that every parameter is finite and that noise and threshold
    /// are strictly positive.
    pub fn validate(&self) -> DdmResult<()> {
        let fields = [
            ("noise", self.noise),
            ("starting_value", self.starting_value),
            ("non_decision_time", self.non_decision_time),
            ("drift_rate", self.drift_rate),
            ("threshold", self.threshold),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DdmError::not_finite(*name, *value));
        }

        if self.noise <= 0.0 {
            return Err(DdmError::not_positive("noise", self.noise));
        }
        if self.threshold <= 0.0 {
            return Err(DdmError::not_positive("threshold", self.threshold));
        }

        Ok(())
    }

    /// Starting value clamped onto `[-threshold, threshold]`.
    pub fn bounded_starting_value(&self) -> f64 {
        self.starting_value.clamp(-self.threshold, self.threshold)
    }
}
