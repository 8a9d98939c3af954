//! Console report.

use crate::error::{ReportError, ReportResult};
use rk_core::units::to_kilo;
use rk_cycle::{CycleStates, PerformanceMetrics, StateId};
use std::io::Write;

/// The eleven report lines, in their fixed order.
///
/// Energies are printed in kJ/kg. Fails only if a turbine exhaust carries no
/// quality, which a successful solve never produces.
pub fn report_lines(
    states: &CycleStates,
    metrics: &PerformanceMetrics,
) -> ReportResult<Vec<String>> {
    let x4 = quality(states, StateId::HpExhaust)?;
    let x6 = quality(states, StateId::LpExhaust)?;

    Ok(vec![
        format!("Specific volume: {:.5} m^3/kg", states.condensate.v),
        format!("Work required by pump: {:.1} kJ/kg", to_kilo(metrics.pump_work)),
        format!("h2 = {:.1} kJ/kg", to_kilo(states.feedwater.h)),
        format!("Quality of intermediate pressure steam: {:.4}", x4),
        format!(
            "Work generated by HP turbine: {:.1} kJ/kg",
            to_kilo(metrics.hp_turbine_work)
        ),
        format!("Quality of low pressure steam: {:.4}", x6),
        format!(
            "Work generated by LP turbine: {:.1} kJ/kg",
            to_kilo(metrics.lp_turbine_work)
        ),
        format!(
            "Total work output by turbine: {:.1} kJ/kg",
            to_kilo(metrics.turbine_work)
        ),
        format!("Heat input by boiler: {:.1} kJ/kg", to_kilo(metrics.heat_input)),
        format!(
            "Heat rejected by the condenser: {:.1} kJ/kg",
            to_kilo(metrics.heat_rejected)
        ),
        format!("Thermal efficiency is: {:.1}%", metrics.thermal_efficiency),
    ])
}

/// Write the report, one line per quantity.
pub fn write_text<W: Write>(
    out: &mut W,
    states: &CycleStates,
    metrics: &PerformanceMetrics,
) -> ReportResult<()> {
    for line in report_lines(states, metrics)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn quality(states: &CycleStates, id: StateId) -> ReportResult<f64> {
    states
        .get(id)
        .quality
        .ok_or(ReportError::MissingQuality { point: id.label() })
}
