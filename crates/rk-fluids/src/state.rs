//! Thermodynamic state definitions.

use rk_core::units::{Pressure, SpecEnthalpy, SpecEntropy, SpecVolume, Temperature};

/// Slack allowed when classifying an entropy as inside the two-phase dome.
///
/// Isentropic expansions that land exactly on a dome boundary can miss it by
/// a few ulps after unit conversion.
pub const QUALITY_SLACK: f64 = 1e-9;

/// Specific properties of a single phase (or of a mixture, via the lever rule).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseProps {
    /// Specific enthalpy [J/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [J/(kg·K)]
    pub s: SpecEntropy,
    /// Specific volume [m³/kg]
    pub v: SpecVolume,
}

/// Saturation properties at one pressure.
///
/// Liquid and vapor branches are named fields so formulas never depend on
/// positional order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation {
    pub p: Pressure,
    pub t: Temperature,
    /// Saturated liquid (x = 0)
    pub liquid: PhaseProps,
    /// Saturated vapor (x = 1)
    pub vapor: PhaseProps,
}

impl Saturation {
    /// Enthalpy of vaporization [J/kg].
    pub fn h_fg(&self) -> SpecEnthalpy {
        self.vapor.h - self.liquid.h
    }

    /// Entropy of vaporization [J/(kg·K)].
    pub fn s_fg(&self) -> SpecEntropy {
        self.vapor.s - self.liquid.s
    }

    /// Vapor quality of a state with entropy `s` at this pressure.
    ///
    /// Returns `None` when `s` lies outside the dome (compressed liquid or
    /// superheated vapor).
    pub fn quality_from_entropy(&self, s: SpecEntropy) -> Option<f64> {
        let s_fg = self.s_fg();
        if !s.is_finite() || s_fg <= 0.0 {
            return None;
        }
        let x = (s - self.liquid.s) / s_fg;
        if (-QUALITY_SLACK..=1.0 + QUALITY_SLACK).contains(&x) {
            Some(x.clamp(0.0, 1.0))
        } else {
            None
        }
    }

    /// Mixture properties at quality `x` (lever rule).
    ///
    /// `x` is assumed to be in [0,1]; callers validate.
    pub fn mix(&self, x: f64) -> PhaseProps {
        PhaseProps {
            h: self.liquid.h + x * self.h_fg(),
            s: self.liquid.s + x * self.s_fg(),
            v: self.liquid.v + x * (self.vapor.v - self.liquid.v),
        }
    }
}

/// Result of an inverse lookup at given pressure and entropy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionState {
    pub t: Temperature,
    /// `Some(x)` only when the state is two-phase.
    pub quality: Option<f64>,
}

impl ExpansionState {
    pub fn is_two_phase(&self) -> bool {
        self.quality.is_some()
    }
}

/// Fully resolved thermodynamic state at one point of a cycle.
///
/// Immutable once built. `quality` is `Some` only for states on or inside the
/// saturation dome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    pub p: Pressure,
    pub t: Temperature,
    /// Specific enthalpy [J/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [J/(kg·K)]
    pub s: SpecEntropy,
    /// Specific volume [m³/kg]
    pub v: SpecVolume,
    pub quality: Option<f64>,
}

impl StatePoint {
    /// Single-phase state from a property record.
    pub fn single_phase(p: Pressure, t: Temperature, props: PhaseProps) -> Self {
        Self {
            p,
            t,
            h: props.h,
            s: props.s,
            v: props.v,
            quality: None,
        }
    }

    /// Saturated liquid (x = 0).
    pub fn saturated_liquid(sat: &Saturation) -> Self {
        Self::two_phase(sat, 0.0)
    }

    /// Saturated vapor (x = 1).
    pub fn saturated_vapor(sat: &Saturation) -> Self {
        Self::two_phase(sat, 1.0)
    }

    /// Liquid-vapor mixture at quality `x`, by the lever rule.
    pub fn two_phase(sat: &Saturation, x: f64) -> Self {
        let props = match x {
            x if x == 0.0 => sat.liquid,
            x if x == 1.0 => sat.vapor,
            x => sat.mix(x),
        };
        Self {
            p: sat.p,
            t: sat.t,
            h: props.h,
            s: props.s,
            v: props.v,
            quality: Some(x),
        }
    }

    pub fn is_two_phase(&self) -> bool {
        self.quality.is_some()
    }
}
