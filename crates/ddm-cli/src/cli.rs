use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ddm_core::DecisionParameters;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Closed-form drift-diffusion reaction-time statistics")]
pub struct Cli {
    /// Path to a solver config file (.toml, .json, .yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Hit probabilities and conditional RT moments for both boundaries
    Solve {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Sample the Pearson III analytical RT densities for both boundaries
    Density {
        #[command(flatten)]
        params: ParamArgs,

        /// Number of samples per boundary (overrides config)
        #[arg(long)]
        points: Option<usize>,

        /// Half-width of the window in standard deviations (overrides config)
        #[arg(long)]
        span_sd: Option<f64>,

        #[arg(long, value_enum, default_value_t = CurveFormat::Csv)]
        format: CurveFormat,
    },

    /// Sample the logistic curve 1 / (1 + exp(-gain (x - bias) + offset))
    Logistic {
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        gain: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        bias: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset: f64,

        /// Number of samples (overrides config)
        #[arg(long)]
        points: Option<usize>,

        #[arg(long, value_enum, default_value_t = CurveFormat::Csv)]
        format: CurveFormat,
    },
}

/// Decision parameters; anything left unset comes from config or environment.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Diffusion noise (sigma), must be > 0
    #[arg(long, allow_negative_numbers = true)]
    pub noise: Option<f64>,

    /// Starting value of the evidence
    #[arg(long, allow_negative_numbers = true)]
    pub starting_value: Option<f64>,

    /// Non-decision time added to every RT
    #[arg(long, allow_negative_numbers = true)]
    pub non_decision_time: Option<f64>,

    /// Drift rate (signed)
    #[arg(long, allow_negative_numbers = true)]
    pub drift_rate: Option<f64>,

    /// Boundary magnitude, must be > 0
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,
}

impl ParamArgs {
    /// Overlay the flags that were given on `base`.
    pub fn apply(&self, base: DecisionParameters) -> DecisionParameters {
        DecisionParameters {
            noise: self.noise.unwrap_or(base.noise),
            starting_value: self.starting_value.unwrap_or(base.starting_value),
            non_decision_time: self.non_decision_time.unwrap_or(base.non_decision_time),
            drift_rate: self.drift_rate.unwrap_or(base.drift_rate),
            threshold: self.threshold.unwrap_or(base.threshold),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFormat {
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve_with_negative_drift() {
        let cli = Cli::try_parse_from([
            "ddm",
            "solve",
            "--noise",
            "0.25",
            "--drift-rate",
            "-0.05",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Solve { params, format } => {
                assert_eq!(params.noise, Some(0.25));
                assert_eq!(params.drift_rate, Some(-0.05));
                assert_eq!(params.threshold, None);
                assert_eq!(format, ReportFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_param_args_overlay() {
        let args = ParamArgs {
            drift_rate: Some(0.05),
            ..Default::default()
        };
        let params = args.apply(DecisionParameters::default());
        assert_eq!(params.drift_rate, 0.05);
        assert_eq!(params.noise, DecisionParameters::default().noise);
    }

    #[test]
    fn test_parse_logistic_defaults() {
        let cli = Cli::try_parse_from(["ddm", "logistic", "--bias", "-2"]).unwrap();
        match cli.command {
            Command::Logistic { gain, bias, offset, points, format } => {
                assert_eq!(gain, 1.0);
                assert_eq!(bias, -2.0);
                assert_eq!(offset, 0.0);
                assert_eq!(points, None);
                assert_eq!(format, CurveFormat::Csv);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["ddm", "density", "--config", "ddm.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ddm.toml")));
    }
}
