//! First-passage statistics returned by the analytical solver.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One of the two absorbing boundaries.
///
/// `Upper` is the boundary the drift points towards when it is positive
/// (the "correct" response); `Lower` is the opposite ("incorrect") one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Boundary {
    /// `+threshold`
    Upper,
    /// `-threshold`
    Lower,
}

/// Hit probability and conditional reaction-time moments for one boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryMoments {
    pub boundary: Boundary,
    pub probability: f64,
    /// Mean reaction time, including non-decision time.
    pub mean: f64,
    pub variance: f64,
    pub skew: f64,
}

impl BoundaryMoments {
    /// Standard deviation of the conditional reaction time.
    pub fn std_dev(&self) -> f64 {
        self.variance.max(0.0).sqrt()
    }
}

/// Closed-form first-passage statistics of a two-boundary diffusion.
///
/// Means include the non-decision time; variance and skew do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassageStatistics {
    pub probability_upper: f64,
    pub probability_lower: f64,
    pub mean_upper: f64,
    pub variance_upper: f64,
    pub skew_upper: f64,
    pub mean_lower: f64,
    pub variance_lower: f64,
    pub skew_lower: f64,
    /// Unconditional mean reaction time over both boundaries.
    pub mean_rt: f64,
}

/// Upper-minus-lower differences of the conditional moments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchAsymmetry {
    pub mean: f64,
    pub variance: f64,
    pub skew: f64,
}

impl BranchAsymmetry {
    /// Largest absolute difference across the three moments.
    pub fn max_abs(&self) -> f64 {
        self.mean.abs().max(self.variance.abs()).max(self.skew.abs())
    }
}

impl PassageStatistics {
    /// Probability and conditional moments for `boundary`.
    pub fn moments(&self, boundary: Boundary) -> BoundaryMoments {
        match boundary {
            Boundary::Upper => BoundaryMoments {
                boundary,
                probability: self.probability_upper,
                mean: self.mean_upper,
                variance: self.variance_upper,
                skew: self.skew_upper,
            },
            Boundary::Lower => BoundaryMoments {
                boundary,
                probability: self.probability_lower,
                mean: self.mean_lower,
                variance: self.variance_lower,
                skew: self.skew_lower,
            },
        }
    }

    /// Differences between the upper and lower branch moments.
    ///
    /// All three are exactly zero when the walk starts at the midpoint.
    pub fn asymmetry(&self) -> BranchAsymmetry {
        BranchAsymmetry {
            mean: self.mean_upper - self.mean_lower,
            variance: self.variance_upper - self.variance_lower,
            skew: self.skew_upper - self.skew_lower,
        }
    }

    /// Whether every reported value is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.probability_upper,
            self.probability_lower,
            self.mean_upper,
            self.variance_upper,
            self.skew_upper,
            self.mean_lower,
            self.variance_lower,
            self.skew_lower,
            self.mean_rt,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
