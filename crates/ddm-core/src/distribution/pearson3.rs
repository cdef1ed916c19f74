//! Pearson Type III density.
//!
//! A location-scale family parameterised directly by its mean (`loc`),
//! standard deviation (`scale`) and skewness. For a standardised variable `y`
//! and skew `g`:
//!
//! ```text
//! beta  = 2 / g
//! alpha = beta^2
//! zeta  = -alpha / beta
//! f(y)  = |beta| * Gamma(alpha, 1).pdf(beta * (y - zeta))
//! ```
//!
//! Near-zero skew falls back to the standard normal density, which is the
//! `g -> 0` limit of the family.

use statrs::distribution::{Continuous, Gamma, Normal};

use crate::error::{DdmError, DdmResult};

/// Skews smaller than this in magnitude are treated as normal.
pub const NORMAL_SKEW_TRANSITION: f64 = 1.6e-5;

/// Density of a Pearson Type III distribution at `x`.
///
/// Returns 0 outside the support (below `loc - 2 scale / skew` for positive
/// skew, above it for negative skew).
///
/// # Errors
///
/// `InvalidParameter` when `scale` is not strictly positive or any argument
/// is not finite.
pub fn pearson3_pdf(x: f64, skew: f64, loc: f64, scale: f64) -> DdmResult<f64> {
    for (name, value) in [("x", x), ("skew", skew), ("loc", loc), ("scale", scale)] {
        if !value.is_finite() {
            return Err(DdmError::not_finite(name, value));
        }
    }
    if scale <= 0.0 {
        return Err(DdmError::not_positive("scale", scale));
    }

    let y = (x - loc) / scale;
    Ok(standard_pdf(y, skew)? / scale)
}

fn standard_pdf(y: f64, skew: f64) -> DdmResult<f64> {
    if skew.abs() < NORMAL_SKEW_TRANSITION {
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| DdmError::invalid_request("skew", skew, e.to_string()))?;
        return Ok(normal.pdf(y));
    }

    let beta = 2.0 / skew;
    let alpha = beta * beta;
    let zeta = -alpha / beta;
    let transformed = beta * (y - zeta);
    if transformed <= 0.0 {
        return Ok(0.0);
    }

    let gamma = Gamma::new(alpha, 1.0)
        .map_err(|e| DdmError::invalid_request("skew", skew, e.to_string()))?;
    Ok(beta.abs() * gamma.pdf(transformed))
}
