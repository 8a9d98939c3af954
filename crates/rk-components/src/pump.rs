//! Pump component model.

use crate::error::{ComponentError, ComponentResult};
use crate::traits::SteadyFlowProcess;
use rk_core::ensure_finite;
use rk_core::units::{Pressure, SpecEnergy};
use rk_fluids::{StatePoint, SteamModel};

/// Ideal feed pump raising liquid to a fixed discharge pressure.
///
/// ## Model
///
/// The liquid is treated as incompressible and the compression as isentropic:
///
/// ```text
/// w_p = v_in * (P_out - P_in)
/// h_out = h_in + w_p
/// s_out = s_in
/// T_out = T(P_out, h_out)
/// ```
///
/// ## Sign Conventions
///
/// - `shaft_work()` returns POSITIVE value (work done on the fluid)
#[derive(Clone, Debug)]
pub struct Pump {
    /// Component name for debugging
    pub name: String,
    /// Discharge pressure
    pub outlet_pressure: Pressure,
}

impl Pump {
    /// Create a new pump.
    ///
    /// # Errors
    /// Returns error if the discharge pressure is not positive and finite.
    pub fn new(name: String, outlet_pressure: Pressure) -> ComponentResult<Self> {
        if !outlet_pressure.value.is_finite() || outlet_pressure.value <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "pump discharge pressure must be positive",
            });
        }
        Ok(Self {
            name,
            outlet_pressure,
        })
    }

    /// Ideal specific pump work `v_in * (P_out - P_in)` [J/kg].
    pub fn specific_work(&self, inlet: &StatePoint) -> ComponentResult<SpecEnergy> {
        let dp = self.outlet_pressure.value - inlet.p.value;
        if dp < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "pump discharge pressure below suction pressure",
            });
        }
        if inlet.v <= 0.0 {
            return Err(ComponentError::NonPhysical {
                what: "pump inlet specific volume must be positive",
            });
        }
        ensure_finite(inlet.v * dp, "pump work").map_err(|_| ComponentError::NonPhysical {
            what: "pump work",
        })
    }
}

impl SteadyFlowProcess for Pump {
    fn name(&self) -> &str {
        &self.name
    }

    fn outlet(&self, steam: &dyn SteamModel, inlet: &StatePoint) -> ComponentResult<StatePoint> {
        let w_p = self.specific_work(inlet)?;
        let h = inlet.h + w_p;
        // Temperature comes from the updated enthalpy, never the inlet one.
        let t = steam.t_from_ph(self.outlet_pressure, h)?;

        Ok(StatePoint {
            p: self.outlet_pressure,
            t,
            h,
            s: inlet.s,
            v: inlet.v,
            quality: None,
        })
    }

    fn shaft_work(&self, inlet: &StatePoint, outlet: &StatePoint) -> SpecEnergy {
        outlet.h - inlet.h
    }
}
