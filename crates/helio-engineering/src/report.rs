// ─────────────────────────────────────────────────────────────────────
// SCPN Helio-Thermal — Panel Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Snapshot of every derived quantity for one configuration.

use std::fmt;

use helio_types::config::PanelConfig;
use helio_types::error::HelioResult;
use serde::Serialize;

use crate::calculator::ElectricalEstimate;

/// Full power chain metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelReport {
    pub config: PanelConfig,
    /// Lens input power [W].
    pub input_power: f64,
    /// Hot-side equilibrium temperature [°C].
    pub hot_side_temperature: f64,
    /// Electrical output [W].
    pub output_power: f64,
    /// Output / input, as a fraction.
    pub efficiency: f64,
    pub electrical: ElectricalEstimate,
    /// [W/ft²] of lens.
    pub watts_per_square_foot: f64,
    /// [W], same as `output_power`.
    pub watts_per_second: f64,
}

impl PanelReport {
    pub fn to_json_pretty(&self) -> HelioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for PanelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input Power: {:.2} W", self.input_power)?;
        writeln!(
            f,
            "Hot Side Temperature: {:.2} °C",
            self.hot_side_temperature
        )?;
        writeln!(f, "Output Power: {:.2} W", self.output_power)?;
        writeln!(f, "Efficiency: {:.2}%", self.efficiency * 100.0)?;
        writeln!(f, "Estimated Voltage: {:.2} V", self.electrical.voltage)?;
        writeln!(f, "Estimated Current: {:.2} A", self.electrical.current)?;
        writeln!(f, "Watts per sq ft: {:.2} W/ft²", self.watts_per_square_foot)?;
        write!(f, "Energy per second: {:.2} W", self.watts_per_second)
    }
}
