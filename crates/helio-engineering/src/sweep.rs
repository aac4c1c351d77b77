// ─────────────────────────────────────────────────────────────────────
// SCPN Helio-Thermal — Parameter Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Deterministic one-parameter design sweep.
//!
//! Holds every field of a base configuration fixed, varies one over an
//! inclusive linspace and evaluates the power chain at each point.

use std::fmt;
use std::str::FromStr;

use helio_types::config::PanelConfig;
use helio_types::error::{HelioError, HelioResult};
use log::debug;
use ndarray::Array1;
use rayon::prelude::*;
use serde::Serialize;

use crate::calculator::PanelCalculator;
use crate::report::PanelReport;

/// Configuration field varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepParameter {
    LensArea,
    ModuleArea,
    ModuleEfficiency,
    AmbientTemp,
    ColdReservoirTemp,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 5] = [
        SweepParameter::LensArea,
        SweepParameter::ModuleArea,
        SweepParameter::ModuleEfficiency,
        SweepParameter::AmbientTemp,
        SweepParameter::ColdReservoirTemp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SweepParameter::LensArea => "lens-area",
            SweepParameter::ModuleArea => "module-area",
            SweepParameter::ModuleEfficiency => "module-efficiency",
            SweepParameter::AmbientTemp => "ambient-temp",
            SweepParameter::ColdReservoirTemp => "cold-reservoir-temp",
        }
    }

    /// Copy of `base` with this field set to `value`.
    pub fn apply(self, base: &PanelConfig, value: f64) -> PanelConfig {
        let mut cfg = *base;
        match self {
            SweepParameter::LensArea => cfg.lens_area = value,
            SweepParameter::ModuleArea => cfg.module_area = value,
            SweepParameter::ModuleEfficiency => cfg.module_efficiency = value,
            SweepParameter::AmbientTemp => cfg.ambient_temp = value,
            SweepParameter::ColdReservoirTemp => cfg.cold_reservoir_temp = value,
        }
        cfg
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SweepParameter {
    type Err = HelioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SweepParameter::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                HelioError::ConfigError(format!(
                    "unknown sweep parameter '{s}', expected one of: {}",
                    SweepParameter::ALL.map(|p| p.name()).join(", ")
                ))
            })
    }
}

/// One evaluated sweep sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub parameter: SweepParameter,
    pub value: f64,
    pub report: PanelReport,
}

/// Evaluate `steps` evenly spaced values of `parameter` in `[start, stop]`.
///
/// Points are evaluated in parallel; the returned order follows the
/// linspace. Fails if any value yields an invalid configuration.
pub fn run_sweep(
    base: &PanelConfig,
    parameter: SweepParameter,
    start: f64,
    stop: f64,
    steps: usize,
) -> HelioResult<Vec<SweepPoint>> {
    if steps == 0 {
        return Err(HelioError::ConfigError(
            "sweep requires at least one step".to_string(),
        ));
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(HelioError::ConfigError(format!(
            "sweep bounds must be finite, got [{start}, {stop}]"
        )));
    }

    let values = Array1::linspace(start, stop, steps);
    debug!("Sweeping {parameter} over {steps} points in [{start}, {stop}]");

    values
        .to_vec()
        .into_par_iter()
        .map(|value| {
            let calc = PanelCalculator::new(parameter.apply(base, value)).map_err(|e| {
                HelioError::ConfigError(format!("sweep point {parameter}={value}: {e}"))
            })?;
            Ok(SweepPoint {
                parameter,
                value,
                report: calc.report(),
            })
        })
        .collect()
}

/// Sweep point with the highest output power.
pub fn peak_output(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points
        .iter()
        .max_by(|a, b| a.report.output_power.total_cmp(&b.report.output_power))
}
