//! Rendering of solver results for stdout.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use ddm_core::{
    Boundary, BranchAsymmetry, CurvePoint, DecisionParameters, DensityCurve, LogisticCurve,
    PassageStatistics, ScaledCoordinates,
};

use crate::cli::{CurveFormat, ReportFormat};

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub parameters: DecisionParameters,
    pub coordinates: ScaledCoordinates,
    pub statistics: PassageStatistics,
    pub asymmetry: BranchAsymmetry,
}

pub fn write_report(out: &mut impl Write, report: &SolveReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        ReportFormat::Text => write_report_text(out, report)?,
    }
    Ok(())
}

fn write_report_text(out: &mut impl Write, report: &SolveReport) -> Result<()> {
    let p = &report.parameters;
    let stats = &report.statistics;

    writeln!(
        out,
        "noise = {}  starting_value = {}  non_decision_time = {}  drift_rate = {}  threshold = {}",
        p.noise, p.starting_value, p.non_decision_time, p.drift_rate, p.threshold
    )?;
    writeln!(
        out,
        "X = {:.6}  Z = {:.6}",
        report.coordinates.x, report.coordinates.z
    )?;
    writeln!(out)?;
    writeln!(out, "{:<12}{:>16}{:>16}", "", "upper", "lower")?;

    let upper = stats.moments(Boundary::Upper);
    let lower = stats.moments(Boundary::Lower);
    let rows = [
        ("probability", upper.probability, lower.probability),
        ("mean", upper.mean, lower.mean),
        ("variance", upper.variance, lower.variance),
        ("skew", upper.skew, lower.skew),
    ];
    for (label, u, l) in rows {
        writeln!(out, "{label:<12}{u:>16.6}{l:>16.6}")?;
    }

    writeln!(out)?;
    writeln!(out, "mean RT (all trials): {:.6}", stats.mean_rt)?;
    let a = &report.asymmetry;
    writeln!(
        out,
        "upper - lower: mean {:+.6}  variance {:+.6}  skew {:+.6}  (max |diff| {:.6})",
        a.mean,
        a.variance,
        a.skew,
        a.max_abs()
    )?;
    Ok(())
}

pub fn write_densities(
    out: &mut impl Write,
    curves: &[DensityCurve],
    format: CurveFormat,
) -> Result<()> {
    match format {
        CurveFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, curves)?;
            writeln!(out)?;
        }
        CurveFormat::Csv => {
            writeln!(out, "boundary,rt,density")?;
            for curve in curves {
                for point in &curve.points {
                    writeln!(out, "{},{},{}", curve.boundary, point.x, point.y)?;
                }
            }
        }
    }
    Ok(())
}

pub fn write_logistic(
    out: &mut impl Write,
    curve: &LogisticCurve,
    samples: &[CurvePoint],
    format: CurveFormat,
) -> Result<()> {
    match format {
        CurveFormat::Json => {
            let doc = json!({
                "curve": curve,
                "midpoint": curve.midpoint(),
                "points": samples,
            });
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
        CurveFormat::Csv => {
            writeln!(out, "x,y")?;
            for point in samples {
                writeln!(out, "{},{}", point.x, point.y)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddm_core::{rt_densities, solve, ClampMode, DensityConfig, LogisticConfig};

    fn report() -> SolveReport {
        let parameters = DecisionParameters::new()
            .with_noise(0.25)
            .with_starting_value(0.0)
            .with_non_decision_time(0.0)
            .with_drift_rate(0.05)
            .with_threshold(1.0);
        let statistics = solve(&parameters).unwrap();
        SolveReport {
            parameters,
            coordinates: ScaledCoordinates::from_parameters(
                &parameters,
                100.0,
                ClampMode::Independent,
            ),
            statistics,
            asymmetry: statistics.asymmetry(),
        }
    }

    #[test]
    fn test_text_report() {
        let mut buf = Vec::new();
        write_report(&mut buf, &report(), ReportFormat::Text).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("X = 0.000000  Z = 0.800000"));
        assert!(text.contains("probability"));
        assert!(text.contains("0.832018"));
        assert!(text.contains("mean RT (all trials)"));
        assert!(text.contains("(max |diff| 0.000000)"));
    }

    #[test]
    fn test_json_report_roundtrips_through_value() {
        let mut buf = Vec::new();
        write_report(&mut buf, &report(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let p_up = value["statistics"]["probability_upper"].as_f64().unwrap();
        assert!((p_up - 0.832_018_385_133_924_5).abs() < 1e-12);
        assert_eq!(value["asymmetry"]["mean"].as_f64(), Some(0.0));
    }

    #[test]
    fn test_density_csv_rows() {
        let stats = report().statistics;
        let config = DensityConfig {
            span_sd: 3.0,
            points: 5,
        };
        let curves = rt_densities(&stats, &config).unwrap();

        let mut buf = Vec::new();
        write_densities(&mut buf, &curves, CurveFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "boundary,rt,density");
        assert_eq!(lines.len(), 1 + 2 * 5);
        assert!(lines[1].starts_with("upper,"));
        assert!(lines[6].starts_with("lower,"));
    }

    #[test]
    fn test_logistic_json() {
        let curve = LogisticCurve::new(2.0, 1.0, 0.0);
        let grid = LogisticConfig {
            x_min: -1.0,
            x_max: 3.0,
            points: 3,
        };
        let samples = curve.sample(&grid).unwrap();

        let mut buf = Vec::new();
        write_logistic(&mut buf, &curve, &samples, CurveFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["midpoint"].as_f64(), Some(1.0));
        assert_eq!(value["points"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["points"][1]["y"].as_f64(), Some(0.5));
    }
}
