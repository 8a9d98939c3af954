//! Steam property model trait and input guards.

use crate::error::{FluidError, FluidResult};
use crate::state::{ExpansionState, PhaseProps, Saturation};
use rk_core::units::{Pressure, SpecEnthalpy, SpecEntropy, Temperature};

/// Trait for water/steam property oracles.
///
/// Implementations are pure functions of their inputs: no interior mutability,
/// identical inputs give identical outputs. `Send + Sync` keeps backends
/// shareable behind `&dyn SteamModel`.
pub trait SteamModel: Send + Sync {
    /// Backend name, shown in logs and the JSON summary.
    fn name(&self) -> &str;

    /// Saturation temperature and both saturated branches at pressure `p`.
    fn saturation(&self, p: Pressure) -> FluidResult<Saturation>;

    /// Single-phase vapor properties at pressure `p` and temperature `t`.
    ///
    /// Below the critical pressure `t` must exceed the saturation temperature.
    fn superheated(&self, p: Pressure, t: Temperature) -> FluidResult<PhaseProps>;

    /// Temperature at pressure `p` and specific enthalpy `h`.
    fn t_from_ph(&self, p: Pressure, h: SpecEnthalpy) -> FluidResult<Temperature>;

    /// Temperature at pressure `p` and specific entropy `s`.
    fn t_from_ps(&self, p: Pressure, s: SpecEntropy) -> FluidResult<Temperature>;

    /// Enthalpy on the saturation line at pressure `p` and quality `x`.
    ///
    /// Default implementation applies the lever rule to `saturation(p)`.
    fn h_from_px(&self, p: Pressure, x: f64) -> FluidResult<SpecEnthalpy> {
        guard::quality(x)?;
        Ok(self.saturation(p)?.mix(x).h)
    }

    /// Temperature and (if two-phase) quality at pressure `p` and entropy `s`.
    ///
    /// Inside the dome the temperature is the saturation temperature; outside
    /// it falls back to `t_from_ps` and reports no quality.
    fn expansion_state(&self, p: Pressure, s: SpecEntropy) -> FluidResult<ExpansionState> {
        guard::finite(s, "entropy must be finite")?;
        let sat = self.saturation(p)?;
        match sat.quality_from_entropy(s) {
            Some(x) => Ok(ExpansionState {
                t: sat.t,
                quality: Some(x),
            }),
            None => Ok(ExpansionState {
                t: self.t_from_ps(p, s)?,
                quality: None,
            }),
        }
    }
}

/// Input guards shared by the backends.
pub(crate) mod guard {
    use super::*;
    use rk_core::units::constants::{P_CRIT_PA, P_TRIPLE_PA};

    fn non_physical(what: &'static str) -> FluidError {
        FluidError::NonPhysical { what }
    }

    pub fn pressure(p: Pressure) -> FluidResult<()> {
        (p.value.is_finite() && p.value > 0.0)
            .then_some(())
            .ok_or_else(|| non_physical("pressure must be positive and finite"))
    }

    /// Pressure strictly between the triple point and the critical point.
    pub fn saturation_pressure(p: Pressure) -> FluidResult<()> {
        pressure(p)?;
        if (P_TRIPLE_PA..P_CRIT_PA).contains(&p.value) {
            Ok(())
        } else {
            Err(FluidError::OutOfRange {
                what: "saturation pressure (triple point to critical point)",
                value: p.value,
            })
        }
    }

    pub fn temperature(t: Temperature) -> FluidResult<()> {
        (t.value.is_finite() && t.value > 0.0)
            .then_some(())
            .ok_or_else(|| non_physical("temperature must be positive and finite"))
    }

    pub fn above_saturation(t: Temperature, t_sat: Temperature) -> FluidResult<()> {
        if t.value > t_sat.value {
            Ok(())
        } else {
            Err(FluidError::OutOfRange {
                what: "temperature at or below saturation",
                value: t.value,
            })
        }
    }

    /// Enthalpy and entropy may be negative near the triple point.
    pub fn finite(value: f64, what: &'static str) -> FluidResult<()> {
        value.is_finite().then_some(()).ok_or_else(|| non_physical(what))
    }

    pub fn quality(x: f64) -> FluidResult<()> {
        (0.0..=1.0)
            .contains(&x)
            .then_some(())
            .ok_or_else(|| non_physical("quality must be within [0, 1]"))
    }
}
