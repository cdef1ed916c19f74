//! Error types for ddm operations.
//!
//! Parameter errors carry the offending parameter name and value along with a
//! structured error code. Numerically degenerate inputs (zero drift, a scaled
//! coordinate on the `coth` singularity) are resolved inside the solver and
//! never surface here.

use thiserror::Error;

/// Result type alias for ddm operations.
pub type DdmResult<T> = Result<T, DdmError>;

/// Main error type for all ddm operations.
#[derive(Error, Debug)]
pub enum DdmError {
    /// A model or curve parameter is outside its domain.
    #[error("Invalid parameter `{parameter}` = {value}: {message}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        message: String,
        code: ErrorCode,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Parameters (PARAM_xxx)
    ParamNotPositive,
    ParamNotFinite,
    ParamInvalidRequest,

    // Configuration (CFG_xxx)
    ConfigInvalid,

    // IO (IO_xxx)
    IoFailed,

    // Serialization (SER_xxx)
    SerializationFailed,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ParamNotPositive => "PARAM_001",
            ErrorCode::ParamNotFinite => "PARAM_002",
            ErrorCode::ParamInvalidRequest => "PARAM_003",
            ErrorCode::ConfigInvalid => "CFG_001",
            ErrorCode::IoFailed => "IO_001",
            ErrorCode::SerializationFailed => "SER_001",
        }
    }
}

impl DdmError {
    /// Create an error for a parameter that must be strictly positive.
    pub fn not_positive(parameter: impl Into<String>, value: f64) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value,
            message: "must be greater than zero".to_string(),
            code: ErrorCode::ParamNotPositive,
        }
    }

    /// Create an error for a NaN or infinite parameter.
    pub fn not_finite(parameter: impl Into<String>, value: f64) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value,
            message: "must be a finite number".to_string(),
            code: ErrorCode::ParamNotFinite,
        }
    }

    /// Create an error for an otherwise invalid request (curve grids, densities).
    pub fn invalid_request(
        parameter: impl Into<String>,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value,
            message: message.into(),
            code: ErrorCode::ParamInvalidRequest,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidParameter { code, .. } => *code,
            Self::Configuration(_) => ErrorCode::ConfigInvalid,
            Self::Io(_) => ErrorCode::IoFailed,
            Self::Serialization(_) => ErrorCode::SerializationFailed,
        }
    }

    /// Name of the offending parameter, if this is a parameter error.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter { parameter, .. } => Some(parameter),
            _ => None,
        }
    }

    /// Whether this error was caused by the caller's parameters.
    ///
    /// Parameter errors are programming errors in the caller and retrying
    /// the same call cannot succeed.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter {
                code: ErrorCode::ParamNotPositive,
                ..
            } => Some("Noise and threshold must both be strictly positive"),
            Self::InvalidParameter {
                code: ErrorCode::ParamNotFinite,
                ..
            } => Some("Check the parameter source for NaN or infinite values"),
            Self::Configuration(_) => {
                Some("Use a .toml, .json, or .yaml config file with valid solver settings")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_positive_error() {
        let err = DdmError::not_positive("noise", 0.0);
        assert_eq!(err.code(), ErrorCode::ParamNotPositive);
        assert_eq!(err.parameter(), Some("noise"));
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("noise"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_not_finite_error() {
        let err = DdmError::not_finite("drift_rate", f64::NAN);
        assert_eq!(err.code(), ErrorCode::ParamNotFinite);
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_configuration_error() {
        let err = DdmError::configuration("bad file");
        assert_eq!(err.code(), ErrorCode::ConfigInvalid);
        assert!(!err.is_invalid_parameter());
        assert_eq!(err.parameter(), None);
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::ParamNotPositive.as_str(), "PARAM_001");
        assert_eq!(ErrorCode::ConfigInvalid.as_str(), "CFG_001");
    }
}
