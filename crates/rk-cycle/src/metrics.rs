//! Cycle performance metrics.

use crate::solve::CycleStates;
use rk_core::units::SpecEnergy;
use tracing::info;

/// Specific works and heats of one cycle evaluation [J/kg].
///
/// Pure algebra over the resolved enthalpies; nothing is iterated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceMetrics {
    /// w_p = v1 (p2 - p1)
    pub pump_work: SpecEnergy,
    /// w_HPt = h3 - h4
    pub hp_turbine_work: SpecEnergy,
    /// w_LPt = h5 - h6
    pub lp_turbine_work: SpecEnergy,
    /// w_HPt + w_LPt
    pub turbine_work: SpecEnergy,
    /// q_H = (h3 - h2) + (h5 - h4)
    pub heat_input: SpecEnergy,
    /// q_L = h6 - h1
    pub heat_rejected: SpecEnergy,
    /// w_turbine - w_p
    pub net_work: SpecEnergy,
    /// w_p / w_turbine
    pub back_work_ratio: f64,
    /// (w_HPt + w_LPt - w_p) / q_H, in percent
    pub thermal_efficiency: f64,
}

impl PerformanceMetrics {
    pub fn from_states(states: &CycleStates) -> Self {
        let h1 = states.condensate.h;
        let h2 = states.feedwater.h;
        let h3 = states.live_steam.h;
        let h4 = states.hp_exhaust.h;
        let h5 = states.reheated.h;
        let h6 = states.lp_exhaust.h;

        let pump_work = states.pump_work;
        let hp_turbine_work = h3 - h4;
        let lp_turbine_work = h5 - h6;
        let turbine_work = hp_turbine_work + lp_turbine_work;
        let heat_input = (h3 - h2) + (h5 - h4);
        let heat_rejected = h6 - h1;
        let net_work = turbine_work - pump_work;
        let thermal_efficiency =
            (hp_turbine_work + lp_turbine_work - pump_work) / heat_input * 100.0;

        let metrics = Self {
            pump_work,
            hp_turbine_work,
            lp_turbine_work,
            turbine_work,
            heat_input,
            heat_rejected,
            net_work,
            back_work_ratio: pump_work / turbine_work,
            thermal_efficiency,
        };

        info!(
            eta_percent = metrics.thermal_efficiency,
            w_net_kj_kg = net_work * 1e-3,
            q_h_kj_kg = heat_input * 1e-3,
            "cycle performance"
        );
        metrics
    }

    /// Energy balance residual `(q_H - q_L) - w_net` [J/kg]; zero up to rounding.
    pub fn first_law_residual(&self) -> SpecEnergy {
        (self.heat_input - self.heat_rejected) - self.net_work
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CycleParameters;
    use crate::solve::solve_reheat_cycle;
    use rk_core::units::to_kilo;
    use rk_fluids::If97Model;

    fn default_metrics() -> PerformanceMetrics {
        let states = solve_reheat_cycle(&CycleParameters::default(), &If97Model::new()).unwrap();
        PerformanceMetrics::from_states(&states)
    }

    #[test]
    fn textbook_values() {
        let m = default_metrics();
        assert!((to_kilo(m.pump_work) - 4.03).abs() < 0.01);
        assert!((to_kilo(m.hp_turbine_work) - 528.0).abs() < 2.0);
        assert!((to_kilo(m.lp_turbine_work) - 769.0).abs() < 3.0);
        assert!((to_kilo(m.heat_input) - 3605.6).abs() < 5.0);
        assert!((m.thermal_efficiency - 35.9).abs() < 0.15);
    }

    #[test]
    fn derived_quantities_are_consistent() {
        let m = default_metrics();
        assert_eq!(m.turbine_work, m.hp_turbine_work + m.lp_turbine_work);
        assert_eq!(m.net_work, m.turbine_work - m.pump_work);
        assert!(m.back_work_ratio > 0.0 && m.back_work_ratio < 0.01);
        assert!(m.heat_rejected > 0.0);
    }

    #[test]
    fn first_law_closes() {
        let m = default_metrics();
        assert!(m.first_law_residual().abs() < 1e-6, "{}", m.first_law_residual());
    }
}
