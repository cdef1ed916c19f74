//! ddm - closed-form drift-diffusion statistics from the command line.
//!
//! # Configuration
//!
//! Settings are layered, later sources winning:
//!
//! 1. Built-in defaults
//! 2. `--config <PATH>`, else `DDM_CONFIG`, else `<config dir>/ddm/config.toml` if present
//! 3. `DDM_*` environment variables (a `.env` file in the working directory is loaded first)
//! 4. Command-line flags
//!
//! # Usage
//!
//! ```text
//! ddm solve --noise 0.25 --drift-rate 0.05 --starting-value 0 --threshold 1
//! ddm density --drift-rate 0.3 --format json > density.json
//! ddm logistic --gain 2 --bias 1 > logistic.csv
//! ```
//!
//! Results go to stdout, logs to stderr (`RUST_LOG` controls verbosity).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ddm_core::{
    rt_densities, AnalyticalSolver, DdmError, DensityConfig, LogisticCurve, SolverConfig,
};

mod cli;
mod output;

use cli::{Cli, Command};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        report_error(&err);
        return Err(err);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Solve { params, format } => {
            let params = params.apply(config.parameters);
            let solver = AnalyticalSolver::from_config(&config)?;
            let coordinates = solver.scaled_coordinates(&params)?;
            let statistics = solver.solve(&params)?;

            let report = output::SolveReport {
                parameters: params,
                coordinates,
                statistics,
                asymmetry: statistics.asymmetry(),
            };
            output::write_report(&mut out, &report, format)?;
        }
        Command::Density {
            params,
            points,
            span_sd,
            format,
        } => {
            let params = params.apply(config.parameters);
            let density = DensityConfig {
                span_sd: span_sd.unwrap_or(config.density.span_sd),
                points: points.unwrap_or(config.density.points),
            };
            let statistics = AnalyticalSolver::from_config(&config)?.solve(&params)?;
            let curves = rt_densities(&statistics, &density)?;
            for curve in &curves {
                tracing::info!(
                    boundary = %curve.boundary,
                    area = curve.area(),
                    mode = ?curve.mode().map(|p| p.x),
                    "Sampled density"
                );
            }
            output::write_densities(&mut out, &curves, format)?;
        }
        Command::Logistic {
            gain,
            bias,
            offset,
            points,
            format,
        } => {
            let mut grid = config.logistic;
            if let Some(points) = points {
                grid.points = points;
            }
            let curve = LogisticCurve::new(gain, bias, offset);
            let samples = curve.sample(&grid)?;
            output::write_logistic(&mut out, &curve, &samples, format)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Log the error code and a hint for solver errors before `main` prints the chain.
fn report_error(err: &anyhow::Error) {
    let Some(err) = err.downcast_ref::<DdmError>() else {
        return;
    };
    if err.is_invalid_parameter() {
        tracing::error!(
            code = err.code().as_str(),
            parameter = err.parameter().unwrap_or_default(),
            "Invalid parameter"
        );
    } else {
        tracing::error!(code = err.code().as_str(), "Solver error");
    }
    if let Some(hint) = err.suggestion() {
        tracing::info!("Hint: {hint}");
    }
}

/// Resolve the config file, then apply environment overrides.
fn load_config(explicit: Option<&Path>) -> Result<SolverConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("DDM_CONFIG").map(PathBuf::from))
        .or_else(|| default_config_path().filter(|p| p.exists()));

    let config = match path {
        Some(path) => {
            let config = SolverConfig::from_file(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            tracing::info!(path = %path.display(), "Loaded config");
            config
        }
        None => SolverConfig::default(),
    };

    let config = config.with_env_overrides();
    config.validate()?;
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ddm").join("config.toml"))
}
