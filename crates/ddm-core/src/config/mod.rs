//! Configuration system for ddm.

use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{Display, EnumString};
use tracing::{debug, warn};

use crate::error::{DdmError, DdmResult};
use crate::types::DecisionParameters;

/// Default bound on the scaled coordinates `X` and `Z`.
pub const DEFAULT_SCALED_CLAMP: f64 = 100.0;

/// Default `|u|` below which the hyperbolic moment terms use power series.
pub const DEFAULT_SERIES_CUTOFF: f64 = 1.0;

/// How the scaled coordinates are bounded once `|Z|` exceeds the clamp.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ClampMode {
    /// `X` and `Z` are each clamped to `[-limit, limit]`.
    #[default]
    Independent,
    /// `Z` is clamped and `X` scaled by the same factor, keeping the start's
    /// relative position between the boundaries.
    Proportional,
}

/// Sampling settings for analytical reaction-time density curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    /// Half-width of the sampled window, in standard deviations around the mean.
    pub span_sd: f64,
    /// Number of evenly spaced sample points.
    pub points: usize,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            span_sd: 4.0,
            points: 1000,
        }
    }
}

/// Sampling grid for logistic curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub points: usize,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            points: 500,
        }
    }
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Scaled coordinates are clamped to `[-scaled_clamp, scaled_clamp]`.
    pub scaled_clamp: f64,
    /// Clamping rule applied at the limit.
    pub clamp_mode: ClampMode,
    /// Hyperbolic terms with `|u|` below this use their Taylor series.
    pub series_cutoff: f64,
    /// Density curve sampling.
    pub density: DensityConfig,
    /// Logistic curve sampling.
    pub logistic: LogisticConfig,
    /// Default decision parameters for callers that don't supply their own.
    pub parameters: DecisionParameters,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            scaled_clamp: DEFAULT_SCALED_CLAMP,
            clamp_mode: ClampMode::default(),
            series_cutoff: DEFAULT_SERIES_CUTOFF,
            density: DensityConfig::default(),
            logistic: LogisticConfig::default(),
            parameters: DecisionParameters::default(),
        }
    }
}

impl SolverConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> DdmResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| DdmError::Configuration(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| DdmError::Configuration(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| DdmError::Configuration(e.to_string()))?,
            _ => {
                return Err(DdmError::Configuration(
                    "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
                ))
            }
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded solver configuration");
        Ok(config)
    }

    /// Apply `DDM_*` environment variables to this configuration.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn with_env_overrides(mut self) -> Self {
        let params = &mut self.parameters;
        let overrides: [(&str, &mut f64); 6] = [
            ("DDM_NOISE", &mut params.noise),
            ("DDM_STARTING_VALUE", &mut params.starting_value),
            ("DDM_NON_DECISION_TIME", &mut params.non_decision_time),
            ("DDM_DRIFT_RATE", &mut params.drift_rate),
            ("DDM_THRESHOLD", &mut params.threshold),
            ("DDM_SCALED_CLAMP", &mut self.scaled_clamp),
        ];

        for (key, slot) in overrides {
            let Ok(raw) = std::env::var(key) else {
                continue;
            };
            match raw.trim().parse::<f64>() {
                Ok(value) => *slot = value,
                Err(_) => warn!(key, value = %raw, "Ignoring unparsable environment override"),
            }
        }

        if let Ok(raw) = std::env::var("DDM_CLAMP_MODE") {
            match raw.trim().parse::<ClampMode>() {
                Ok(mode) => self.clamp_mode = mode,
                Err(_) => warn!(
                    key = "DDM_CLAMP_MODE",
                    value = %raw,
                    "Ignoring unparsable environment override"
                ),
            }
        }

        self
    }

    /// Check solver and sampling settings.
    pub fn validate(&self) -> DdmResult<()> {
        if !(self.scaled_clamp.is_finite() && self.scaled_clamp > 0.0) {
            return Err(DdmError::configuration(format!(
                "scaled_clamp must be a positive finite number, got {}",
                self.scaled_clamp
            )));
        }
        if !(self.series_cutoff > 0.0 && self.series_cutoff <= 2.0) {
            return Err(DdmError::configuration(format!(
                "series_cutoff must be in (0, 2], got {}",
                self.series_cutoff
            )));
        }
        if !(self.density.span_sd.is_finite() && self.density.span_sd > 0.0) {
            return Err(DdmError::configuration(format!(
                "density.span_sd must be positive, got {}",
                self.density.span_sd
            )));
        }
        if self.density.points < 2 || self.logistic.points < 2 {
            return Err(DdmError::configuration(
                "curves need at least 2 sample points",
            ));
        }
        if !(self.logistic.x_min.is_finite()
            && self.logistic.x_max.is_finite()
            && self.logistic.x_min < self.logistic.x_max)
        {
            return Err(DdmError::configuration(format!(
                "logistic range [{}, {}] is empty",
                self.logistic.x_min, self.logistic.x_max
            )));
        }
        Ok(())
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::default()
    }
}

/// Builder for SolverConfig.
#[derive(Default)]
pub struct SolverConfigBuilder {
    config: SolverConfig,
}

impl SolverConfigBuilder {
    /// Set the scaled-coordinate clamp.
    pub fn scaled_clamp(mut self, limit: f64) -> Self {
        self.config.scaled_clamp = limit;
        self
    }

    /// Set the clamping rule.
    pub fn clamp_mode(mut self, mode: ClampMode) -> Self {
        self.config.clamp_mode = mode;
        self
    }

    /// Set the series cutoff.
    pub fn series_cutoff(mut self, cutoff: f64) -> Self {
        self.config.series_cutoff = cutoff;
        self
    }

    /// Set density sampling.
    pub fn density(mut self, density: DensityConfig) -> Self {
        self.config.density = density;
        self
    }

    /// Set logistic sampling.
    pub fn logistic(mut self, logistic: LogisticConfig) -> Self {
        self.config.logistic = logistic;
        self
    }

    /// Set default decision parameters.
    pub fn parameters(mut self, parameters: DecisionParameters) -> Self {
        self.config.parameters = parameters;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SolverConfig {
        self.config
    }
}
