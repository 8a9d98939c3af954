//! Core traits for component models.

use crate::error::ComponentResult;
use rk_core::units::SpecEnergy;
use rk_fluids::{StatePoint, SteamModel};

/// Trait for single-stream steady-flow processes (one inlet, one outlet).
///
/// Quantities are per unit mass flow. Components hold no state between calls.
pub trait SteadyFlowProcess: Send + Sync {
    /// Component name for debugging and identification.
    fn name(&self) -> &str;

    /// Compute the outlet state for a given inlet state.
    fn outlet(&self, steam: &dyn SteamModel, inlet: &StatePoint) -> ComponentResult<StatePoint>;

    /// Specific shaft work transferred between the given port states [J/kg].
    ///
    /// Sign convention:
    /// - Positive: work done ON the fluid (pump)
    /// - Negative: work extracted FROM the fluid (turbine)
    ///
    /// Returns 0 by default (no rotating machinery).
    fn shaft_work(&self, _inlet: &StatePoint, _outlet: &StatePoint) -> SpecEnergy {
        0.0
    }

    /// Specific heat transferred between the given port states [J/kg].
    ///
    /// Sign convention:
    /// - Positive: heat added TO the fluid
    /// - Negative: heat removed FROM the fluid
    ///
    /// Returns 0 by default (adiabatic).
    fn heat(&self, _inlet: &StatePoint, _outlet: &StatePoint) -> SpecEnergy {
        0.0
    }
}
