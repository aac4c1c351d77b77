// ─────────────────────────────────────────────────────────────────────
// SCPN Helio-Thermal — Lens/Peltier Power Chain
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Power flow chain for a lens-concentrated Peltier module.
//!
//! input power → hot-side temperature → output power →
//! {efficiency, voltage/current, W/ft², W/s}.
//!
//! Every quantity is recomputed from the configuration on each call.

use helio_types::config::PanelConfig;
use helio_types::constants::{
    ASSUMED_MODULE_VOLTAGE, ATMOSPHERIC_TRANSMISSION, SOLAR_CONSTANT, STEFAN_BOLTZMANN,
};
use helio_types::error::{HelioError, HelioResult};
use helio_types::units::{celsius_to_kelvin, kelvin_to_celsius, square_meters_to_square_feet};
use log::{debug, warn};
use serde::Serialize;

use crate::report::PanelReport;

/// Blackbody equilibrium temperature [K] for an absorbed flux [W/m²].
///
/// Inverse Stefan-Boltzmann: `T = (q / σ)^(1/4)`.
pub fn equilibrium_temperature_kelvin(flux: f64) -> f64 {
    (flux / STEFAN_BOLTZMANN).powf(0.25)
}

/// Terminal estimate at the assumed module voltage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElectricalEstimate {
    /// [V]
    pub voltage: f64,
    /// [A]
    pub current: f64,
}

/// Calculator over a validated [`PanelConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelCalculator {
    config: PanelConfig,
}

impl PanelCalculator {
    /// Validates `config`; zero or negative areas never reach the formulas.
    pub fn new(config: PanelConfig) -> HelioResult<Self> {
        config.validate()?;
        Ok(PanelCalculator { config })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Solar power collected by the lens [W].
    pub fn input_power(&self) -> f64 {
        ATMOSPHERIC_TRANSMISSION * SOLAR_CONSTANT * self.config.lens_area
    }

    /// Concentrated flux on the module face [W/m²].
    pub fn focused_irradiance(&self) -> f64 {
        self.input_power() / self.config.module_area
    }

    /// Steady-state hot-side temperature [°C].
    pub fn hot_side_temperature(&self) -> f64 {
        kelvin_to_celsius(equilibrium_temperature_kelvin(self.focused_irradiance()))
    }

    /// `ΔT / T_hot` with `T_hot` in kelvin.
    pub fn carnot_efficiency(&self) -> f64 {
        let t_hot = self.hot_side_temperature();
        let delta_t = t_hot - self.config.cold_reservoir_temp;
        delta_t / celsius_to_kelvin(t_hot)
    }

    /// Electrical output [W]. Not clamped: negative when the cold side is
    /// hotter than the hot side.
    pub fn output_power(&self) -> f64 {
        let input_power = self.input_power();
        let actual_efficiency = self.config.module_efficiency * self.carnot_efficiency();
        let output_power = input_power * actual_efficiency;

        if output_power < 0.0 {
            warn!(
                "Negative output power {output_power:.3} W: cold reservoir {:.2} °C is above hot side",
                self.config.cold_reservoir_temp
            );
        } else if output_power > input_power {
            warn!("Output power {output_power:.3} W exceeds input power {input_power:.3} W");
        }
        output_power
    }

    /// Output over input power.
    pub fn efficiency(&self) -> f64 {
        self.output_power() / self.input_power()
    }

    pub fn estimate_voltage_and_current(&self) -> ElectricalEstimate {
        ElectricalEstimate {
            voltage: ASSUMED_MODULE_VOLTAGE,
            current: self.output_power() / ASSUMED_MODULE_VOLTAGE,
        }
    }

    /// Output power per square foot of lens [W/ft²].
    pub fn watts_per_square_foot(&self) -> f64 {
        self.output_power() / square_meters_to_square_feet(self.config.lens_area)
    }

    /// Power is already a rate, so this is the output power.
    pub fn watts_per_second(&self) -> f64 {
        self.output_power()
    }

    /// Errors when the result leaves the physically plausible range
    /// (negative output or output above input). The calculator itself
    /// never corrects these values.
    pub fn check_plausibility(&self) -> HelioResult<()> {
        let input_power = self.input_power();
        let output_power = self.output_power();
        if output_power < 0.0 {
            return Err(HelioError::PhysicsViolation(format!(
                "negative output power {output_power:.3} W (cold side {:.2} °C, hot side {:.2} °C)",
                self.config.cold_reservoir_temp,
                self.hot_side_temperature()
            )));
        }
        if output_power > input_power {
            return Err(HelioError::PhysicsViolation(format!(
                "output power {output_power:.3} W exceeds input power {input_power:.3} W"
            )));
        }
        Ok(())
    }

    /// Evaluate the full chain once.
    pub fn report(&self) -> PanelReport {
        let report = PanelReport {
            config: self.config,
            input_power: self.input_power(),
            hot_side_temperature: self.hot_side_temperature(),
            output_power: self.output_power(),
            efficiency: self.efficiency(),
            electrical: self.estimate_voltage_and_current(),
            watts_per_square_foot: self.watts_per_square_foot(),
            watts_per_second: self.watts_per_second(),
        };
        debug!(
            "Panel report: P_in={:.3} W, T_hot={:.3} °C, P_out={:.3} W",
            report.input_power, report.hot_side_temperature, report.output_power
        );
        report
    }
}
