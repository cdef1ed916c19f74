//! Core types for ddm.

mod curve;
mod parameters;
mod statistics;

pub use curve::{linspace, CurvePoint};
pub use parameters::DecisionParameters;
pub use statistics::{Boundary, BoundaryMoments, BranchAsymmetry, PassageStatistics};
