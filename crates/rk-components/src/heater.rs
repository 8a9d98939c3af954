//! Constant-pressure heater (boiler or reheater).

use crate::error::{ComponentError, ComponentResult};
use crate::traits::SteadyFlowProcess;
use rk_core::units::{SpecEnergy, Temperature, constants::P_CRIT_PA};
use rk_fluids::{StatePoint, SteamModel};

/// Heats the stream at constant pressure to a superheated exit temperature.
///
/// Used for both the boiler (feedwater to live steam) and the reheater
/// (HP exhaust back up to a superheated state).
#[derive(Clone, Debug)]
pub struct Heater {
    /// Component name for debugging
    pub name: String,
    /// Exit temperature
    pub outlet_temperature: Temperature,
}

impl Heater {
    pub fn new(name: String, outlet_temperature: Temperature) -> ComponentResult<Self> {
        if !outlet_temperature.value.is_finite() || outlet_temperature.value <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "heater exit temperature must be positive",
            });
        }
        Ok(Self {
            name,
            outlet_temperature,
        })
    }
}

impl SteadyFlowProcess for Heater {
    fn name(&self) -> &str {
        &self.name
    }

    fn outlet(&self, steam: &dyn SteamModel, inlet: &StatePoint) -> ComponentResult<StatePoint> {
        let p = inlet.p;
        if p.value < P_CRIT_PA {
            let t_sat = steam.saturation(p)?.t;
            if self.outlet_temperature.value <= t_sat.value {
                return Err(ComponentError::NotSuperheated {
                    component: self.name.clone(),
                    t: self.outlet_temperature.value,
                    t_sat: t_sat.value,
                });
            }
        }

        let props = steam.superheated(p, self.outlet_temperature)?;
        Ok(StatePoint::single_phase(p, self.outlet_temperature, props))
    }

    fn heat(&self, inlet: &StatePoint, outlet: &StatePoint) -> SpecEnergy {
        outlet.h - inlet.h
    }
}
