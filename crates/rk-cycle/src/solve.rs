//! State-point resolution for the ideal reheat Rankine cycle.

use crate::config::CycleParameters;
use crate::error::{CycleError, CycleResult};
use rk_components::{ComponentError, Condenser, Heater, Pump, SteadyFlowProcess, Turbine};
use rk_core::units::{SpecEnergy, to_kelvin, to_kilo, to_kpa};
use rk_fluids::{StatePoint, SteamModel};
use std::fmt;
use tracing::{debug, warn};

/// Qualities closer than this to 0 or 1 are logged as dome-boundary states.
const BOUNDARY_WARN: f64 = 1e-6;

/// Identifies a point on the T-s diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    /// 1: condenser exit, saturated liquid
    Condensate,
    /// 2: pump exit, compressed liquid
    Feedwater,
    /// 2': saturated liquid at boiler pressure
    BoilerLiquid,
    /// 3': saturated vapor at boiler pressure
    BoilerVapor,
    /// 3: boiler exit, superheated
    LiveSteam,
    /// 4: HP turbine exit, two-phase
    HpExhaust,
    /// 5: reheater exit, superheated
    Reheated,
    /// 6: LP turbine exit, two-phase
    LpExhaust,
}

impl StateId {
    /// Cycle points in flow order.
    pub const CYCLE: [StateId; 6] = [
        StateId::Condensate,
        StateId::Feedwater,
        StateId::LiveSteam,
        StateId::HpExhaust,
        StateId::Reheated,
        StateId::LpExhaust,
    ];

    /// Points traced by the T-s overlay, closing back on point 1.
    pub const OVERLAY: [StateId; 9] = [
        StateId::Condensate,
        StateId::Feedwater,
        StateId::BoilerLiquid,
        StateId::BoilerVapor,
        StateId::LiveSteam,
        StateId::HpExhaust,
        StateId::Reheated,
        StateId::LpExhaust,
        StateId::Condensate,
    ];

    /// Every point, in overlay order.
    pub const ALL: [StateId; 8] = [
        StateId::Condensate,
        StateId::Feedwater,
        StateId::BoilerLiquid,
        StateId::BoilerVapor,
        StateId::LiveSteam,
        StateId::HpExhaust,
        StateId::Reheated,
        StateId::LpExhaust,
    ];

    /// Conventional textbook number.
    pub fn label(self) -> &'static str {
        match self {
            StateId::Condensate => "1",
            StateId::Feedwater => "2",
            StateId::BoilerLiquid => "2'",
            StateId::BoilerVapor => "3'",
            StateId::LiveSteam => "3",
            StateId::HpExhaust => "4",
            StateId::Reheated => "5",
            StateId::LpExhaust => "6",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// All resolved states of one cycle evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleStates {
    pub params: CycleParameters,
    pub condensate: StatePoint,
    pub feedwater: StatePoint,
    pub boiler_liquid: StatePoint,
    pub boiler_vapor: StatePoint,
    pub live_steam: StatePoint,
    pub hp_exhaust: StatePoint,
    pub reheated: StatePoint,
    pub lp_exhaust: StatePoint,
    /// Ideal pump work `v1 * (p2 - p1)` [J/kg]
    pub pump_work: SpecEnergy,
}

impl CycleStates {
    pub fn get(&self, id: StateId) -> &StatePoint {
        match id {
            StateId::Condensate => &self.condensate,
            StateId::Feedwater => &self.feedwater,
            StateId::BoilerLiquid => &self.boiler_liquid,
            StateId::BoilerVapor => &self.boiler_vapor,
            StateId::LiveSteam => &self.live_steam,
            StateId::HpExhaust => &self.hp_exhaust,
            StateId::Reheated => &self.reheated,
            StateId::LpExhaust => &self.lp_exhaust,
        }
    }
}

/// Resolve every state point of the ideal reheat cycle.
///
/// Points are computed strictly in flow order 1 → 6; each depends only on
/// points already resolved.
///
/// # Errors
/// - `InvalidParameters` if `params` fails validation
/// - `NotSuperheated` if a heater exit temperature is at or below saturation
/// - `NotTwoPhase` if a turbine exhaust falls outside the dome
/// - `Fluid` for any property lookup failure
pub fn solve_reheat_cycle(
    params: &CycleParameters,
    steam: &dyn SteamModel,
) -> CycleResult<CycleStates> {
    params.validate()?;
    debug!(backend = steam.name(), "solving reheat Rankine cycle");

    let condenser = Condenser::new("condenser".into());
    let pump = Pump::new("feed pump".into(), params.boiler_pressure)?;
    let boiler = Heater::new("boiler".into(), params.boiler_exit_temperature)?;
    let hp_turbine = Turbine::new("HP turbine".into(), params.reheat_pressure)?;
    let reheater = Heater::new("reheater".into(), params.reheat_exit_temperature)?;
    let lp_turbine = Turbine::new("LP turbine".into(), params.condenser_pressure)?;

    let condensate = condenser
        .condensate(steam, params.condenser_pressure)
        .map_err(at(StateId::Condensate))?;
    log_point(StateId::Condensate, &condensate);

    let pump_work = pump.specific_work(&condensate)?;
    let feedwater = pump
        .outlet(steam, &condensate)
        .map_err(at(StateId::Feedwater))?;
    log_point(StateId::Feedwater, &feedwater);

    let boiler_sat = steam.saturation(params.boiler_pressure)?;
    let boiler_liquid = StatePoint::saturated_liquid(&boiler_sat);
    let boiler_vapor = StatePoint::saturated_vapor(&boiler_sat);
    log_point(StateId::BoilerLiquid, &boiler_liquid);
    log_point(StateId::BoilerVapor, &boiler_vapor);

    let live_steam = boiler
        .outlet(steam, &feedwater)
        .map_err(at(StateId::LiveSteam))?;
    log_point(StateId::LiveSteam, &live_steam);

    let hp_exhaust = hp_turbine
        .outlet(steam, &live_steam)
        .map_err(at(StateId::HpExhaust))?;
    log_point(StateId::HpExhaust, &hp_exhaust);

    let reheated = reheater
        .outlet(steam, &hp_exhaust)
        .map_err(at(StateId::Reheated))?;
    log_point(StateId::Reheated, &reheated);

    let lp_exhaust = lp_turbine
        .outlet(steam, &reheated)
        .map_err(at(StateId::LpExhaust))?;
    log_point(StateId::LpExhaust, &lp_exhaust);

    Ok(CycleStates {
        params: *params,
        condensate,
        feedwater,
        boiler_liquid,
        boiler_vapor,
        live_steam,
        hp_exhaust,
        reheated,
        lp_exhaust,
        pump_work,
    })
}

/// Attach the state-point label to component failures.
fn at(id: StateId) -> impl FnOnce(ComponentError) -> CycleError {
    move |e| match e {
        ComponentError::NotTwoPhase { entropy, .. } => CycleError::NotTwoPhase {
            point: id.label(),
            entropy,
        },
        ComponentError::NotSuperheated { t, t_sat, .. } => CycleError::NotSuperheated {
            point: id.label(),
            t,
            t_sat,
        },
        other => CycleError::from(other),
    }
}

fn log_point(id: StateId, point: &StatePoint) {
    debug!(
        point = id.label(),
        p_kpa = to_kpa(point.p),
        t_k = to_kelvin(point.t),
        h_kj_kg = to_kilo(point.h),
        s_kj_kg_k = to_kilo(point.s),
        x = point.quality,
        "state point resolved"
    );
    if !matches!(id, StateId::HpExhaust | StateId::LpExhaust) {
        return;
    }
    if let Some(x) = point.quality {
        if x < BOUNDARY_WARN || x > 1.0 - BOUNDARY_WARN {
            warn!(point = id.label(), x, "turbine exhaust sits on the dome boundary");
        }
    }
}
