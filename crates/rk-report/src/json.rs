//! JSON summary of a cycle evaluation.

use crate::error::ReportResult;
use rk_core::units::{to_celsius, to_kelvin, to_kilo, to_kpa};
use rk_cycle::{CycleStates, PerformanceMetrics, StateId};
use serde::{Deserialize, Serialize};

/// One state point in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSummary {
    pub label: String,
    pub p_kpa: f64,
    pub t_k: f64,
    pub h_kj_kg: f64,
    pub s_kj_kg_k: f64,
    pub v_m3_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
}

/// Metrics in kJ/kg (efficiency in percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub pump_work_kj_kg: f64,
    pub hp_turbine_work_kj_kg: f64,
    pub lp_turbine_work_kj_kg: f64,
    pub turbine_work_kj_kg: f64,
    pub net_work_kj_kg: f64,
    pub heat_input_kj_kg: f64,
    pub heat_rejected_kj_kg: f64,
    pub back_work_ratio: f64,
    pub thermal_efficiency_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersSummary {
    pub condenser_pressure_kpa: f64,
    pub boiler_pressure_kpa: f64,
    pub reheat_pressure_kpa: f64,
    pub boiler_exit_temperature_c: f64,
    pub reheat_exit_temperature_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSummary {
    /// Property backend name
    pub backend: String,
    pub parameters: ParametersSummary,
    /// Points 1, 2, 2', 3', 3, 4, 5, 6
    pub points: Vec<PointSummary>,
    pub metrics: MetricsSummary,
}

impl CycleSummary {
    pub fn new(backend: &str, states: &CycleStates, metrics: &PerformanceMetrics) -> Self {
        let params = &states.params;
        Self {
            backend: backend.to_string(),
            parameters: ParametersSummary {
                condenser_pressure_kpa: to_kpa(params.condenser_pressure),
                boiler_pressure_kpa: to_kpa(params.boiler_pressure),
                reheat_pressure_kpa: to_kpa(params.reheat_pressure),
                boiler_exit_temperature_c: to_celsius(params.boiler_exit_temperature),
                reheat_exit_temperature_c: to_celsius(params.reheat_exit_temperature),
            },
            points: StateId::ALL
                .iter()
                .map(|&id| {
                    let pt = states.get(id);
                    PointSummary {
                        label: id.label().to_string(),
                        p_kpa: to_kpa(pt.p),
                        t_k: to_kelvin(pt.t),
                        h_kj_kg: to_kilo(pt.h),
                        s_kj_kg_k: to_kilo(pt.s),
                        v_m3_kg: pt.v,
                        quality: pt.quality,
                    }
                })
                .collect(),
            metrics: MetricsSummary {
                pump_work_kj_kg: to_kilo(metrics.pump_work),
                hp_turbine_work_kj_kg: to_kilo(metrics.hp_turbine_work),
                lp_turbine_work_kj_kg: to_kilo(metrics.lp_turbine_work),
                turbine_work_kj_kg: to_kilo(metrics.turbine_work),
                net_work_kj_kg: to_kilo(metrics.net_work),
                heat_input_kj_kg: to_kilo(metrics.heat_input),
                heat_rejected_kj_kg: to_kilo(metrics.heat_rejected),
                back_work_ratio: metrics.back_work_ratio,
                thermal_efficiency_percent: metrics.thermal_efficiency,
            },
        }
    }

    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
