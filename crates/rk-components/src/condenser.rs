//! Condenser component model.

use crate::error::ComponentResult;
use crate::traits::SteadyFlowProcess;
use rk_core::units::{Pressure, SpecEnergy};
use rk_fluids::{StatePoint, SteamModel};

/// Rejects heat at constant pressure until the stream is saturated liquid.
#[derive(Clone, Debug)]
pub struct Condenser {
    /// Component name for debugging
    pub name: String,
}

impl Condenser {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    /// Condensate leaving a condenser operating at pressure `p`.
    pub fn condensate(&self, steam: &dyn SteamModel, p: Pressure) -> ComponentResult<StatePoint> {
        let sat = steam.saturation(p)?;
        Ok(StatePoint::saturated_liquid(&sat))
    }
}

impl SteadyFlowProcess for Condenser {
    fn name(&self) -> &str {
        &self.name
    }

    fn outlet(&self, steam: &dyn SteamModel, inlet: &StatePoint) -> ComponentResult<StatePoint> {
        self.condensate(steam, inlet.p)
    }

    fn heat(&self, inlet: &StatePoint, outlet: &StatePoint) -> SpecEnergy {
        outlet.h - inlet.h
    }
}
