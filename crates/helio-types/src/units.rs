// ─────────────────────────────────────────────────────────────────────
// SCPN Helio-Thermal — Unit Conversions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The two fixed conversions used by the power chain.

use crate::constants::{SQFT_PER_SQM, ZERO_CELSIUS_IN_KELVIN};

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + ZERO_CELSIUS_IN_KELVIN
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - ZERO_CELSIUS_IN_KELVIN
}

/// Area conversion m² → ft².
pub fn square_meters_to_square_feet(area_m2: f64) -> f64 {
    area_m2 * SQFT_PER_SQM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_point() {
        assert!((celsius_to_kelvin(0.0) - 273.15).abs() < 1e-12);
        assert!(kelvin_to_celsius(273.15).abs() < 1e-12);
    }

    #[test]
    fn test_absolute_zero() {
        assert!((kelvin_to_celsius(0.0) + 273.15).abs() < 1e-12);
    }

    #[test]
    fn test_lens_area_in_square_feet() {
        let sqft = square_meters_to_square_feet(2.0);
        assert!(
            (sqft - 21.528).abs() < 1e-9,
            "2 m² should be 21.528 ft², got {sqft}"
        );
    }
}
