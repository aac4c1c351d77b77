// ─────────────────────────────────────────────────────────────────────
// SCPN Helio-Thermal — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Solar irradiance at the top of the atmosphere (W/m²).
pub const SOLAR_CONSTANT: f64 = 1361.0;

/// Stefan-Boltzmann constant (W·m⁻²·K⁻⁴).
/// NOTE: rounded to 3 significant figures; the CODATA value is 5.670374419e-8.
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Fraction of the solar constant reaching the lens at ground level.
pub const ATMOSPHERIC_TRANSMISSION: f64 = 0.7;

/// Terminal voltage assumed for a typical Peltier module (V).
pub const ASSUMED_MODULE_VOLTAGE: f64 = 2.0;

/// Square feet per square metre.
pub const SQFT_PER_SQM: f64 = 10.764;

/// 0 °C expressed in kelvin.
pub const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;
