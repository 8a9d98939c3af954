//! Cycle parameters and their on-disk configuration format.
//!
//! Config files hold unit-tagged strings so they read the way the problem is
//! stated:
//!
//! ```yaml
//! condenser_pressure: "10 kPa"
//! boiler_pressure: "4 MPa"
//! reheat_pressure: "400 kPa"
//! boiler_exit_temperature: "400 C"
//! reheat_exit_temperature: "400 C"
//! ```
//!
//! Missing fields fall back to `CycleParameters::default()`.

use rk_core::units::{
    Pressure, Temperature, celsius, constants::P_CRIT_PA, k, kpa, mpa, pa, to_celsius, to_kpa,
};
use rk_fluids::{Quantity, UnitError, parse_quantity};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {source}")]
    Unit {
        field: &'static str,
        #[source]
        source: UnitError,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unsupported config format: '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}

/// Operating point of an ideal reheat Rankine cycle.
///
/// The LP turbine exhausts at the condenser pressure and the HP turbine at the
/// reheat pressure, so three pressures fix the whole loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleParameters {
    /// Condenser (and LP turbine exit) pressure
    pub condenser_pressure: Pressure,
    /// Boiler (and pump discharge) pressure
    pub boiler_pressure: Pressure,
    /// Reheat (and HP turbine exit) pressure
    pub reheat_pressure: Pressure,
    pub boiler_exit_temperature: Temperature,
    pub reheat_exit_temperature: Temperature,
}

impl Default for CycleParameters {
    /// 10 kPa / 4 MPa / 400 kPa with 400 °C at both heater exits.
    fn default() -> Self {
        Self {
            condenser_pressure: kpa(10.0),
            boiler_pressure: mpa(4.0),
            reheat_pressure: kpa(400.0),
            boiler_exit_temperature: celsius(400.0),
            reheat_exit_temperature: celsius(400.0),
        }
    }
}

impl CycleParameters {
    /// Check ordering and physical bounds.
    ///
    /// Requires `condenser < reheat < boiler < critical pressure` and positive
    /// temperatures. Superheat at the heater exits depends on the steam model
    /// and is checked while solving.
    pub fn validate(&self) -> ConfigResult<()> {
        let pressures = [
            ("condenser_pressure", self.condenser_pressure),
            ("reheat_pressure", self.reheat_pressure),
            ("boiler_pressure", self.boiler_pressure),
        ];
        for (field, p) in pressures {
            if !p.value.is_finite() || p.value <= 0.0 {
                return Err(invalid(field, p.value, "must be positive and finite"));
            }
        }

        if self.reheat_pressure.value <= self.condenser_pressure.value {
            return Err(invalid(
                "reheat_pressure",
                self.reheat_pressure.value,
                "must exceed condenser pressure",
            ));
        }
        if self.boiler_pressure.value <= self.reheat_pressure.value {
            return Err(invalid(
                "boiler_pressure",
                self.boiler_pressure.value,
                "must exceed reheat pressure",
            ));
        }
        if self.boiler_pressure.value >= P_CRIT_PA {
            return Err(invalid(
                "boiler_pressure",
                self.boiler_pressure.value,
                "must be below the critical pressure (22.064 MPa)",
            ));
        }

        let temperatures = [
            ("boiler_exit_temperature", self.boiler_exit_temperature),
            ("reheat_exit_temperature", self.reheat_exit_temperature),
        ];
        for (field, t) in temperatures {
            if !t.value.is_finite() || t.value <= 0.0 {
                return Err(invalid(field, t.value, "must be positive and finite"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, value: f64, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Serialized form of `CycleParameters`; every field is an optional
/// unit-tagged string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CycleConfigDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condenser_pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boiler_pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reheat_pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boiler_exit_temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reheat_exit_temperature: Option<String>,
}

impl CycleConfigDef {
    /// Fields set in `other` replace those in `self`.
    pub fn overlay(self, other: CycleConfigDef) -> Self {
        Self {
            condenser_pressure: other.condenser_pressure.or(self.condenser_pressure),
            boiler_pressure: other.boiler_pressure.or(self.boiler_pressure),
            reheat_pressure: other.reheat_pressure.or(self.reheat_pressure),
            boiler_exit_temperature: other
                .boiler_exit_temperature
                .or(self.boiler_exit_temperature),
            reheat_exit_temperature: other
                .reheat_exit_temperature
                .or(self.reheat_exit_temperature),
        }
    }

    /// Parse into validated parameters, filling gaps from the defaults.
    pub fn resolve(&self) -> ConfigResult<CycleParameters> {
        let defaults = CycleParameters::default();

        let params = CycleParameters {
            condenser_pressure: parse_pressure(
                "condenser_pressure",
                self.condenser_pressure.as_deref(),
                defaults.condenser_pressure,
            )?,
            boiler_pressure: parse_pressure(
                "boiler_pressure",
                self.boiler_pressure.as_deref(),
                defaults.boiler_pressure,
            )?,
            reheat_pressure: parse_pressure(
                "reheat_pressure",
                self.reheat_pressure.as_deref(),
                defaults.reheat_pressure,
            )?,
            boiler_exit_temperature: parse_temperature(
                "boiler_exit_temperature",
                self.boiler_exit_temperature.as_deref(),
                defaults.boiler_exit_temperature,
            )?,
            reheat_exit_temperature: parse_temperature(
                "reheat_exit_temperature",
                self.reheat_exit_temperature.as_deref(),
                defaults.reheat_exit_temperature,
            )?,
        };

        params.validate()?;
        Ok(params)
    }
}

impl From<&CycleParameters> for CycleConfigDef {
    fn from(params: &CycleParameters) -> Self {
        let p = |p: Pressure| Some(format!("{} kPa", to_kpa(p)));
        let t = |t: Temperature| Some(format!("{} C", to_celsius(t)));
        Self {
            condenser_pressure: p(params.condenser_pressure),
            boiler_pressure: p(params.boiler_pressure),
            reheat_pressure: p(params.reheat_pressure),
            boiler_exit_temperature: t(params.boiler_exit_temperature),
            reheat_exit_temperature: t(params.reheat_exit_temperature),
        }
    }
}

fn parse_pressure(
    field: &'static str,
    raw: Option<&str>,
    default: Pressure,
) -> ConfigResult<Pressure> {
    match raw {
        Some(text) => parse_quantity(text, Quantity::Pressure)
            .map(pa)
            .map_err(|source| ConfigError::Unit { field, source }),
        None => Ok(default),
    }
}

fn parse_temperature(
    field: &'static str,
    raw: Option<&str>,
    default: Temperature,
) -> ConfigResult<Temperature> {
    match raw {
        Some(text) => parse_quantity(text, Quantity::Temperature)
            .map(k)
            .map_err(|source| ConfigError::Unit { field, source }),
        None => Ok(default),
    }
}

/// Read the raw config definition, choosing the format by file extension.
pub fn load_def(path: &Path) -> ConfigResult<CycleConfigDef> {
    let content = std::fs::read_to_string(path)?;
    match extension(path).as_str() {
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        "json" => Ok(serde_json::from_str(&content)?),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}

/// Load parameters from a YAML or JSON file (by extension).
pub fn load(path: &Path) -> ConfigResult<CycleParameters> {
    load_def(path)?.resolve()
}

pub fn load_yaml(path: &Path) -> ConfigResult<CycleParameters> {
    let content = std::fs::read_to_string(path)?;
    let def: CycleConfigDef = serde_yaml::from_str(&content)?;
    def.resolve()
}

pub fn save_yaml(path: &Path, params: &CycleParameters) -> ConfigResult<()> {
    params.validate()?;
    let content = serde_yaml::to_string(&CycleConfigDef::from(params))?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ConfigResult<CycleParameters> {
    let content = std::fs::read_to_string(path)?;
    let def: CycleConfigDef = serde_json::from_str(&content)?;
    def.resolve()
}

pub fn save_json(path: &Path, params: &CycleParameters) -> ConfigResult<()> {
    params.validate()?;
    let content = serde_json::to_string_pretty(&CycleConfigDef::from(params))?;
    std::fs::write(path, content)?;
    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}
