// ─────────────────────────────────────────────────────────────────────
// SCPN Helio-Thermal — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::ZERO_CELSIUS_IN_KELVIN;
use crate::error::{HelioError, HelioResult};
use serde::{Deserialize, Serialize};

/// Lens + Peltier module configuration.
/// Maps 1:1 to configs/example_panel.json.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Collecting lens area [m²].
    pub lens_area: f64,
    /// Peltier module (absorber) area [m²].
    pub module_area: f64,
    /// Fraction of Carnot efficiency reached by the module.
    pub module_efficiency: f64,
    /// Ambient air temperature [°C]. Carried but not used by any formula.
    pub ambient_temp: f64,
    /// Cold-side reservoir temperature [°C].
    pub cold_reservoir_temp: f64,
}

impl Default for PanelConfig {
    /// 2 m² lens onto a 10 cm × 10 cm module at 10% of Carnot.
    fn default() -> Self {
        PanelConfig {
            lens_area: 2.0,
            module_area: 0.01,
            module_efficiency: 0.1,
            ambient_temp: 30.0,
            cold_reservoir_temp: 10.0,
        }
    }
}

impl PanelConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> HelioResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> HelioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations that would divide by zero or leave the
    /// physical domain. Returns the first violation found.
    pub fn validate(&self) -> HelioResult<()> {
        let fields = [
            ("lens_area", self.lens_area),
            ("module_area", self.module_area),
            ("module_efficiency", self.module_efficiency),
            ("ambient_temp", self.ambient_temp),
            ("cold_reservoir_temp", self.cold_reservoir_temp),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(HelioError::ConfigError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.lens_area <= 0.0 {
            return Err(HelioError::ConfigError(format!(
                "lens_area must be > 0 m², got {}",
                self.lens_area
            )));
        }
        if self.module_area <= 0.0 {
            return Err(HelioError::ConfigError(format!(
                "module_area must be > 0 m², got {}",
                self.module_area
            )));
        }
        if !(0.0..=1.0).contains(&self.module_efficiency) {
            return Err(HelioError::ConfigError(format!(
                "module_efficiency must be within [0, 1], got {}",
                self.module_efficiency
            )));
        }
        for (name, value) in [
            ("ambient_temp", self.ambient_temp),
            ("cold_reservoir_temp", self.cold_reservoir_temp),
        ] {
            if value <= -ZERO_CELSIUS_IN_KELVIN {
                return Err(HelioError::ConfigError(format!(
                    "{name} must be above absolute zero (-273.15 °C), got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/helio-types/ at compile time,
    /// so we go up 2 levels to reach the workspace root.
    fn workspace_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        workspace_root().join(relative).to_string_lossy().to_string()
    }

    fn expect_config_error(cfg: PanelConfig, needle: &str) {
        match cfg.validate() {
            Err(HelioError::ConfigError(msg)) => assert!(
                msg.contains(needle),
                "Message '{msg}' should mention '{needle}'"
            ),
            other => panic!("Expected ConfigError mentioning {needle}, got {other:?}"),
        }
    }

    #[test]
    fn test_default_is_example_panel() {
        let cfg = PanelConfig::default();
        assert!((cfg.lens_area - 2.0).abs() < 1e-12);
        assert!((cfg.module_area - 0.01).abs() < 1e-12);
        assert!((cfg.module_efficiency - 0.1).abs() < 1e-12);
        assert!((cfg.ambient_temp - 30.0).abs() < 1e-12);
        assert!((cfg.cold_reservoir_temp - 10.0).abs() < 1e-12);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_load_example_panel() {
        let cfg = PanelConfig::from_file(&config_path("configs/example_panel.json")).unwrap();
        assert_eq!(cfg, PanelConfig::default());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = PanelConfig {
            lens_area: 0.75,
            ..PanelConfig::default()
        };
        let json = cfg.to_json_pretty().unwrap();
        let cfg2: PanelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"lens_area": 2.0, "module_area": 0.01}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();
        match PanelConfig::from_file(&path) {
            Err(HelioError::Json(_)) => {}
            other => panic!("Expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match PanelConfig::from_file(&config_path("configs/does_not_exist.json")) {
            Err(HelioError::Io(_)) => {}
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_lens_area() {
        let cfg = PanelConfig {
            lens_area: 0.0,
            ..PanelConfig::default()
        };
        expect_config_error(cfg, "lens_area");
    }

    #[test]
    fn test_rejects_zero_module_area() {
        let cfg = PanelConfig {
            module_area: 0.0,
            ..PanelConfig::default()
        };
        expect_config_error(cfg, "module_area");
    }

    #[test]
    fn test_rejects_negative_area() {
        let cfg = PanelConfig {
            module_area: -0.01,
            ..PanelConfig::default()
        };
        expect_config_error(cfg, "module_area");
    }

    #[test]
    fn test_rejects_efficiency_out_of_range() {
        for eta in [-0.1, 1.5] {
            let cfg = PanelConfig {
                module_efficiency: eta,
                ..PanelConfig::default()
            };
            expect_config_error(cfg, "module_efficiency");
        }
    }

    #[test]
    fn test_efficiency_bounds_inclusive() {
        for eta in [0.0, 1.0] {
            let cfg = PanelConfig {
                module_efficiency: eta,
                ..PanelConfig::default()
            };
            assert!(cfg.validate().is_ok(), "eta={eta} should be accepted");
        }
    }

    #[test]
    fn test_rejects_below_absolute_zero() {
        let cfg = PanelConfig {
            cold_reservoir_temp: -300.0,
            ..PanelConfig::default()
        };
        expect_config_error(cfg, "cold_reservoir_temp");

        let cfg = PanelConfig {
            ambient_temp: -273.15,
            ..PanelConfig::default()
        };
        expect_config_error(cfg, "ambient_temp");
    }

    #[test]
    fn test_rejects_non_finite() {
        let cfg = PanelConfig {
            lens_area: f64::NAN,
            ..PanelConfig::default()
        };
        expect_config_error(cfg, "finite");

        let cfg = PanelConfig {
            cold_reservoir_temp: f64::INFINITY,
            ..PanelConfig::default()
        };
        expect_config_error(cfg, "finite");
    }
}
