//! ddm-core - Core library for ddm.
//!
//! Closed-form first-passage statistics for the two-boundary drift-diffusion
//! model: boundary-hit probabilities and the mean, variance and skew of the
//! conditional reaction times, computed without simulation. Also provides
//! Pearson Type III densities for drawing the analytical reaction-time
//! distributions, and the logistic response curve.
//!
//! # Example
//!
//! ```
//! use ddm_core::{AnalyticalSolver, Boundary, DecisionParameters, DensityConfig, rt_density};
//!
//! let params = DecisionParameters::new().with_drift_rate(0.8).with_noise(0.5);
//! let stats = AnalyticalSolver::new().solve(&params)?;
//!
//! let curve = rt_density(&stats, Boundary::Upper, &DensityConfig::default())?;
//! assert_eq!(curve.points.len(), 1000);
//! # Ok::<(), ddm_core::DdmError>(())
//! ```

pub mod analytical;
pub mod config;
pub mod distribution;
pub mod error;
pub mod logistic;
pub mod types;

// Re-export commonly used types
pub use analytical::{hit_probabilities, solve, AnalyticalSolver, ScaledCoordinates};
pub use config::{ClampMode, DensityConfig, LogisticConfig, SolverConfig, SolverConfigBuilder};
pub use distribution::{pearson3_pdf, rt_densities, rt_density, DensityCurve};
pub use error::{DdmError, DdmResult, ErrorCode};
pub use logistic::LogisticCurve;
pub use types::{
    linspace, Boundary, BoundaryMoments, BranchAsymmetry, CurvePoint, DecisionParameters,
    PassageStatistics,
};
