//! Logistic response curve.
//!
//! ```text
//! y = 1 / (1 + exp(-gain * (x - bias) + offset))
//! ```
//!
//! `gain` sets the slope, `bias` shifts the curve along x, and `offset` shifts
//! it inside the exponent (a positive offset moves the midpoint right by
//! `offset / gain`).

use serde::{Deserialize, Serialize};

use crate::config::LogisticConfig;
use crate::error::{DdmError, DdmResult};
use crate::types::{linspace, CurvePoint};

/// Exponents beyond this saturate the curve to 0 or 1.
const EXP_LIMIT: f64 = 700.0;

/// Parameters of a logistic curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticCurve {
    pub gain: f64,
    pub bias: f64,
    pub offset: f64,
}

impl Default for LogisticCurve {
    fn default() -> Self {
        Self {
            gain: 1.0,
            bias: 0.0,
            offset: 0.0,
        }
    }
}

impl LogisticCurve {
    /// Create a curve from its three parameters.
    pub fn new(gain: f64, bias: f64, offset: f64) -> Self {
        Self { gain, bias, offset }
    }

    /// Evaluate the curve at `x`. Always in `[0, 1]`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let exponent = -self.gain * (x - self.bias) + self.offset;

        // Guard against overflow
        if exponent > EXP_LIMIT {
            return 0.0;
        }
        if exponent < -EXP_LIMIT {
            return 1.0;
        }

        1.0 / (1.0 + exponent.exp())
    }

    /// The x at which the curve crosses 0.5, if the gain is non-zero.
    pub fn midpoint(&self) -> Option<f64> {
        (self.gain != 0.0).then(|| self.bias + self.offset / self.gain)
    }

    /// Sample the curve on the grid described by `config`.
    pub fn sample(&self, config: &LogisticConfig) -> DdmResult<Vec<CurvePoint>> {
        for (name, value) in [
            ("gain", self.gain),
            ("bias", self.bias),
            ("offset", self.offset),
        ] {
            if !value.is_finite() {
                return Err(DdmError::not_finite(name, value));
            }
        }
        if config.points < 2 {
            return Err(DdmError::invalid_request(
                "points",
                config.points as f64,
                "logistic curves need at least 2 points",
            ));
        }
        if !(config.x_min < config.x_max) {
            return Err(DdmError::invalid_request(
                "x_max",
                config.x_max,
                "must be greater than x_min",
            ));
        }

        Ok(linspace(config.x_min, config.x_max, config.points)
            .into_iter()
            .map(|x| CurvePoint {
                x,
                y: self.evaluate(x),
            })
            .collect())
    }
}
