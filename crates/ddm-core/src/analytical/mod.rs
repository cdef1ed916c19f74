//! Closed-form first-passage statistics for the two-boundary drift-diffusion model.
//!
//! Evidence follows `dx = drift dt + noise dW` from `starting_value` until it
//! is absorbed at `+threshold` (upper) or `-threshold` (lower). With the
//! scaled coordinates `X = drift * start / noise^2`, `Z = drift * threshold / noise^2`
//! the conditional decision-time moments are
//!
//! ```text
//! mean_upper = noise^2/drift^2 * (2Z coth 2Z - (X+Z) coth(X+Z))
//! mean_lower = noise^2/drift^2 * (2Z coth 2Z - (Z-X) coth(Z-X))
//! var        = noise^4/drift^4 * (h(2Z) - h(Z +- X))
//! kappa_3    = noise^6/drift^6 * (q(2Z) - q(Z +- X)),   skew = kappa_3 / var^1.5
//! ```
//!
//! (cumulants of the Laplace transform
//! `E[exp(-sT); upper] = exp(theta(z - x)) sinh(lambda(x + z)) / sinh(2 lambda z)`,
//! `lambda = sqrt(drift^2 + 2 s noise^2) / noise^2`). See [`hyperbolic`] for
//! `h`, `q` and how the `drift -> 0` limit is taken.
//!
//! # Example
//!
//! ```
//! use ddm_core::{AnalyticalSolver, DecisionParameters};
//!
//! let params = DecisionParameters::new()
//!     .with_noise(0.25)
//!     .with_starting_value(0.0)
//!     .with_non_decision_time(0.0)
//!     .with_drift_rate(0.05)
//!     .with_threshold(1.0);
//!
//! let stats = AnalyticalSolver::new().solve(&params)?;
//! assert!((stats.probability_upper + stats.probability_lower - 1.0).abs() < 1e-12);
//! assert_eq!(stats.mean_upper, stats.mean_lower);
//! # Ok::<(), ddm_core::DdmError>(())
//! ```

pub mod coordinates;
pub mod hyperbolic;
pub mod probability;

use tracing::trace;

use crate::config::{ClampMode, SolverConfig, DEFAULT_SCALED_CLAMP, DEFAULT_SERIES_CUTOFF};
use crate::error::DdmResult;
use crate::types::{DecisionParameters, PassageStatistics};

pub use coordinates::ScaledCoordinates;
pub use probability::hit_probabilities;

use hyperbolic::{mean_kernel, third_cumulant_kernel, variance_kernel};

/// Analytical solver for the two-boundary drift-diffusion model.
///
/// Stateless apart from its numerical settings; every call is independent
/// and returns bit-identical results for identical parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticalSolver {
    scaled_clamp: f64,
    clamp_mode: ClampMode,
    series_cutoff: f64,
}

impl Default for AnalyticalSolver {
    fn default() -> Self {
        Self {
            scaled_clamp: DEFAULT_SCALED_CLAMP,
            clamp_mode: ClampMode::default(),
            series_cutoff: DEFAULT_SERIES_CUTOFF,
        }
    }
}

/// Conditional decision-time moments for one branch (no non-decision time).
#[derive(Debug, Clone, Copy)]
struct BranchMoments {
    mean: f64,
    variance: f64,
    skew: f64,
}

impl AnalyticalSolver {
    /// Create a solver with the default clamp (100, independent) and series cutoff (1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver from validated configuration.
    pub fn from_config(config: &SolverConfig) -> DdmResult<Self> {
        config.validate()?;
        Ok(Self {
            scaled_clamp: config.scaled_clamp,
            clamp_mode: config.clamp_mode,
            series_cutoff: config.series_cutoff,
        })
    }

    /// Bound applied to the scaled coordinates.
    pub fn scaled_clamp(&self) -> f64 {
        self.scaled_clamp
    }

    /// Validate `params` and derive the clamped scaled coordinates.
    pub fn scaled_coordinates(&self, params: &DecisionParameters) -> DdmResult<ScaledCoordinates> {
        params.validate()?;
        Ok(ScaledCoordinates::from_parameters(
            params,
            self.scaled_clamp,
            self.clamp_mode,
        ))
    }

    /// Compute hit probabilities and conditional reaction-time moments.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `noise` or `threshold` is not strictly positive,
    /// or when any parameter is NaN or infinite. Zero drift and scaled
    /// coordinates at the `coth` singularity are resolved analytically.
    pub fn solve(&self, params: &DecisionParameters) -> DdmResult<PassageStatistics> {
        let coords = self.scaled_coordinates(params)?;
        let (probability_upper, probability_lower) = hit_probabilities(&coords);

        let upper = self.branch(&coords, coords.upper_branch());
        let lower = self.branch(&coords, coords.lower_branch());

        let t0 = params.non_decision_time;
        let mean_upper = upper.mean + t0;
        let mean_lower = lower.mean + t0;

        let stats = PassageStatistics {
            probability_upper,
            probability_lower,
            mean_upper,
            variance_upper: upper.variance,
            skew_upper: upper.skew,
            mean_lower,
            variance_lower: lower.variance,
            skew_lower: lower.skew,
            mean_rt: probability_upper * mean_upper + probability_lower * mean_lower,
        };

        trace!(?params, ?coords, ?stats, "Solved drift-diffusion model");
        Ok(stats)
    }

    /// Moments for the branch whose scaled distance from the far boundary is
    /// `(scaled, length)`.
    ///
    /// Each moment is `L^k r(U) - l^k r(u)`, where `U`/`L` describe the span
    /// between boundaries and `r` is the reduced hyperbolic kernel. This is the
    /// closed form above with `noise^2/drift^2 * u^2 = l^2`.
    fn branch(&self, coords: &ScaledCoordinates, (scaled, length): (f64, f64)) -> BranchMoments {
        let cutoff = self.series_cutoff;
        let (span_scaled, span_length) = coords.span();

        let span2 = span_length * span_length;
        let len2 = length * length;

        let mean = span2 * mean_kernel(span_scaled, cutoff) - len2 * mean_kernel(scaled, cutoff);

        let span4 = span2 * span2;
        let len4 = len2 * len2;
        let span_variance = span4 * variance_kernel(span_scaled, cutoff);
        let variance = (span_variance - len4 * variance_kernel(scaled, cutoff)).max(0.0);

        let third = span4 * span2 * third_cumulant_kernel(span_scaled, cutoff)
            - len4 * len2 * third_cumulant_kernel(scaled, cutoff);

        // A variance within rounding of zero leaves the skew undefined.
        let skew = if variance > 4.0 * f64::EPSILON * span_variance {
            third / variance.powf(1.5)
        } else {
            0.0
        };

        BranchMoments {
            mean,
            variance,
            skew,
        }
    }
}

/// Solve with the default solver settings.
pub fn solve(params: &DecisionParameters) -> DdmResult<PassageStatistics> {
    AnalyticalSolver::new().solve(params)
}
