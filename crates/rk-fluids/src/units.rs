//! Unit-tagged input parsing for cycle parameters.
//!
//! Config files and CLI overrides carry values such as `"4 MPa"` or `"400 C"`.
//! [`parse_quantity`] converts them to SI (Pa, K). A bare number is taken as
//! already SI.

use std::fmt;
use thiserror::Error;

/// Physical quantity a text value is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Absolute temperature, SI unit K
    Temperature,
    /// Absolute pressure, SI unit Pa
    Pressure,
}

impl Quantity {
    fn units(self) -> &'static [UnitDef] {
        match self {
            Self::Temperature => TEMPERATURE_UNITS,
            Self::Pressure => PRESSURE_UNITS,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Pressure => write!(f, "absolute pressure"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("cannot read a number from '{0}'")]
    Malformed(String),

    #[error("unknown {quantity} unit '{unit}'")]
    UnknownUnit { unit: String, quantity: Quantity },

    #[error("'{unit}' is a gauge unit; cycle pressures are absolute (use psia)")]
    GaugePressure { unit: String },

    #[error("{value} is out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Affine map to SI: `si = (value + offset) * scale`.
struct UnitDef {
    aliases: &'static [&'static str],
    offset: f64,
    scale: f64,
}

const fn unit(aliases: &'static [&'static str], offset: f64, scale: f64) -> UnitDef {
    UnitDef {
        aliases,
        offset,
        scale,
    }
}

const TEMPERATURE_UNITS: &[UnitDef] = &[
    unit(&["k", "kelvin"], 0.0, 1.0),
    unit(&["c", "°c", "degc", "celsius"], 273.15, 1.0),
    unit(&["f", "°f", "degf", "fahrenheit"], 459.67, 5.0 / 9.0),
    unit(&["r", "°r", "rankine"], 0.0, 5.0 / 9.0),
];

const PRESSURE_UNITS: &[UnitDef] = &[
    unit(&["pa"], 0.0, 1.0),
    unit(&["kpa"], 0.0, 1e3),
    unit(&["mpa"], 0.0, 1e6),
    unit(&["mbar"], 0.0, 1e2),
    unit(&["bar", "bara"], 0.0, 1e5),
    unit(&["atm"], 0.0, 101_325.0),
    unit(&["psia"], 0.0, 6_894.757),
];

/// Parse `raw` as `quantity` and return the value in SI units.
///
/// Results must be strictly positive, since both quantities are absolute.
pub fn parse_quantity(raw: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let (value, tag) = split_number(raw)?;
    let tag = tag.to_ascii_lowercase();

    let si = if tag.is_empty() {
        value
    } else if quantity == Quantity::Pressure && (tag == "psi" || tag == "psig" || tag == "barg")
    {
        return Err(UnitError::GaugePressure { unit: tag });
    } else {
        let def = quantity
            .units()
            .iter()
            .find(|d| d.aliases.contains(&tag.as_str()))
            .ok_or_else(|| UnitError::UnknownUnit {
                unit: tag.clone(),
                quantity,
            })?;
        (value + def.offset) * def.scale
    };

    if si <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: si,
            reason: "absolute values must be positive",
        });
    }
    Ok(si)
}

/// Split `"2.5e-1 MPa"` into `(0.25, "MPa")`.
fn split_number(raw: &str) -> Result<(f64, &str), UnitError> {
    let text = raw.trim();
    let bytes = text.as_bytes();

    let mut end = 0;
    while end < bytes.len() {
        let b = bytes[end];
        let sign_or_digit = |i: usize| {
            bytes
                .get(i)
                .is_some_and(|n| n.is_ascii_digit() || *n == b'-' || *n == b'+')
        };
        let in_number = b.is_ascii_digit()
            || b == b'.'
            || ((b == b'-' || b == b'+') && (end == 0 || matches!(bytes[end - 1], b'e' | b'E')))
            || ((b == b'e' || b == b'E') && end > 0 && sign_or_digit(end + 1));
        if !in_number {
            break;
        }
        end += 1;
    }

    let (number, tag) = text.split_at(end);
    let value: f64 = number
        .parse()
        .map_err(|_| UnitError::Malformed(raw.to_string()))?;
    if !value.is_finite() {
        return Err(UnitError::Malformed(raw.to_string()));
    }
    Ok((value, tag.trim()))
}
