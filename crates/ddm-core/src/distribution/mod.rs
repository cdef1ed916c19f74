//! Analytical reaction-time distributions.
//!
//! The solver only yields moments. To draw a reaction-time distribution for a
//! boundary, a Pearson Type III density is matched to that boundary's mean,
//! standard deviation and skew, then weighted by the boundary's hit
//! probability so the two curves together integrate to roughly one.

pub mod pearson3;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::DensityConfig;
use crate::error::{DdmError, DdmResult};
use crate::types::{linspace, Boundary, CurvePoint, PassageStatistics};

pub use pearson3::pearson3_pdf;

/// Sampled, probability-weighted reaction-time density for one boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    pub boundary: Boundary,
    pub probability: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub skew: f64,
    pub points: Vec<CurvePoint>,
}

impl DensityCurve {
    /// Approximate area under the sampled curve (trapezoid rule).
    pub fn area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| 0.5 * (w[0].y + w[1].y) * (w[1].x - w[0].x))
            .sum()
    }

    /// The sample with the highest density, if any.
    pub fn mode(&self) -> Option<CurvePoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }
}

/// Sample the density for `boundary` over `mean +- span_sd * sd`.
///
/// A boundary with zero variance (absorbed instantly, or never reached) has no
/// spread to draw and yields a curve without points.
pub fn rt_density(
    stats: &PassageStatistics,
    boundary: Boundary,
    config: &DensityConfig,
) -> DdmResult<DensityCurve> {
    if config.points < 2 {
        return Err(DdmError::invalid_request(
            "points",
            config.points as f64,
            "density curves need at least 2 points",
        ));
    }
    if !(config.span_sd.is_finite() && config.span_sd > 0.0) {
        return Err(DdmError::not_positive("span_sd", config.span_sd));
    }

    let moments = stats.moments(boundary);
    let std_dev = moments.std_dev();

    let points = if std_dev > 0.0 {
        let half = config.span_sd * std_dev;
        linspace(moments.mean - half, moments.mean + half, config.points)
            .into_iter()
            .map(|x| {
                let density = pearson3_pdf(x, moments.skew, moments.mean, std_dev)?;
                Ok(CurvePoint {
                    x,
                    y: density * moments.probability,
                })
            })
            .collect::<DdmResult<Vec<_>>>()?
    } else {
        Vec::new()
    };

    Ok(DensityCurve {
        boundary,
        probability: moments.probability,
        mean: moments.mean,
        std_dev,
        skew: moments.skew,
        points,
    })
}

/// Density curves for both boundaries, upper first.
pub fn rt_densities(
    stats: &PassageStatistics,
    config: &DensityConfig,
) -> DdmResult<Vec<DensityCurve>> {
    Boundary::iter()
        .map(|boundary| rt_density(stats, boundary, config))
        .collect()
}
