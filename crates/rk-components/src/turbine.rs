//! Turbine component model.

use crate::error::{ComponentError, ComponentResult};
use crate::traits::SteadyFlowProcess;
use rk_core::units::{Pressure, SpecEnergy};
use rk_fluids::{StatePoint, SteamModel};

/// Ideal steam turbine expanding to a fixed exit pressure.
///
/// ## Model
///
/// Expansion is isentropic and must end inside the liquid-vapor dome:
///
/// ```text
/// s_out = s_in
/// x_out = (s_out - s_f) / s_fg      at P_out
/// h_out = h(P_out, x_out)
/// w_t   = h_in - h_out
/// ```
///
/// An exit entropy outside the dome (superheated exhaust) is reported as
/// `ComponentError::NotTwoPhase`.
///
/// ## Sign Conventions
///
/// - `shaft_work()` returns NEGATIVE value (work extracted from the fluid)
#[derive(Clone, Debug)]
pub struct Turbine {
    /// Component name for debugging
    pub name: String,
    /// Exhaust pressure
    pub outlet_pressure: Pressure,
}

impl Turbine {
    /// Create a new turbine.
    ///
    /// # Errors
    /// Returns error if the exhaust pressure is not positive and finite.
    pub fn new(name: String, outlet_pressure: Pressure) -> ComponentResult<Self> {
        if !outlet_pressure.value.is_finite() || outlet_pressure.value <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "turbine exhaust pressure must be positive",
            });
        }
        Ok(Self {
            name,
            outlet_pressure,
        })
    }
}

impl SteadyFlowProcess for Turbine {
    fn name(&self) -> &str {
        &self.name
    }

    fn outlet(&self, steam: &dyn SteamModel, inlet: &StatePoint) -> ComponentResult<StatePoint> {
        if self.outlet_pressure.value >= inlet.p.value {
            return Err(ComponentError::InvalidArg {
                what: "turbine exhaust pressure must be below inlet pressure",
            });
        }

        let exit = steam.expansion_state(self.outlet_pressure, inlet.s)?;
        let x = exit.quality.ok_or_else(|| ComponentError::NotTwoPhase {
            component: self.name.clone(),
            entropy: inlet.s,
        })?;

        let sat = steam.saturation(self.outlet_pressure)?;
        let h = steam.h_from_px(self.outlet_pressure, x)?;

        Ok(StatePoint {
            p: self.outlet_pressure,
            t: exit.t,
            h,
            s: inlet.s,
            v: sat.mix(x).v,
            quality: Some(x),
        })
    }

    fn shaft_work(&self, inlet: &StatePoint, outlet: &StatePoint) -> SpecEnergy {
        outlet.h - inlet.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_core::units::{celsius, kpa, mpa};
    use rk_fluids::If97Model;

    fn live_steam(steam: &If97Model) -> StatePoint {
        let p = mpa(4.0);
        let t = celsius(400.0);
        StatePoint::single_phase(p, t, steam.superheated(p, t).unwrap())
    }

    #[test]
    fn turbine_creation() {
        let turbine = Turbine::new("HP".into(), kpa(400.0)).unwrap();
        assert_eq!(turbine.name(), "HP");
        assert!(Turbine::new("bad".into(), kpa(0.0)).is_err());
    }

    #[test]
    fn hp_expansion_lands_in_dome() {
        let steam = If97Model::new();
        let inlet = live_steam(&steam);
        let turbine = Turbine::new("HP".into(), kpa(400.0)).unwrap();
        let out = turbine.outlet(&steam, &inlet).unwrap();

        assert_eq!(out.s, inlet.s);
        let x = out.quality.unwrap();
        assert!((x - 0.975).abs() < 0.002, "x = {x}");
        let w = -turbine.shaft_work(&inlet, &out);
        assert!((w - 528.0e3).abs() < 2.0e3, "w = {w}");
    }

    #[test]
    fn superheated_exhaust_is_rejected() {
        let steam = If97Model::new();
        let p = mpa(1.0);
        let t = celsius(600.0);
        let inlet = StatePoint::single_phase(p, t, steam.superheated(p, t).unwrap());
        let turbine = Turbine::new("HP".into(), kpa(400.0)).unwrap();

        let err = turbine.outlet(&steam, &inlet).unwrap_err();
        assert!(matches!(err, ComponentError::NotTwoPhase { .. }));
    }

    #[test]
    fn compression_is_rejected() {
        let steam = If97Model::new();
        let inlet = live_steam(&steam);
        let turbine = Turbine::new("HP".into(), mpa(5.0)).unwrap();
        assert!(matches!(
            turbine.outlet(&steam, &inlet),
            Err(ComponentError::InvalidArg { .. })
        ));
    }
}
