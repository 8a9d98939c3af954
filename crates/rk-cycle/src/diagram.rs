//! T-s diagram data: saturation dome, cycle overlay and point annotations.
//!
//! Coordinates are in plot units: entropy in kJ/(kg·K), temperature in K.

use crate::error::CycleResult;
use crate::solve::{CycleStates, StateId};
use rk_core::units::{pa, to_kelvin, to_kilo};
use rk_fluids::{Quantity, Spacing, StatePoint, SteamModel, SweepDefinition};
use tracing::debug;

/// Dome sweep bounds [Pa]; the upper bound stays just below the critical point.
pub const DOME_P_START_PA: f64 = 1.0e3;
pub const DOME_P_END_PA: f64 = 22.063e6;
pub const DOME_SAMPLES: usize = 1000;

/// Saturated liquid and vapor lines as (s, T) pairs, ordered by pressure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomeCurve {
    pub liquid: Vec<(f64, f64)>,
    pub vapor: Vec<(f64, f64)>,
}

/// Which side of its anchor a label extends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Left,
    Right,
}

/// Multi-line annotation for one state point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub id: StateId,
    /// Text anchor (s, T)
    pub anchor: (f64, f64),
    pub align: LabelAlign,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramData {
    pub dome: DomeCurve,
    /// Closed polyline through 1, 2, 2', 3', 3, 4, 5, 6, 1
    pub overlay: Vec<(f64, f64)>,
    pub labels: Vec<PointLabel>,
}

impl DiagramData {
    /// Build diagram data with the standard dome sweep.
    pub fn build(states: &CycleStates, steam: &dyn SteamModel) -> CycleResult<Self> {
        Self::with_sweep(states, steam, &default_dome_sweep())
    }

    pub fn with_sweep(
        states: &CycleStates,
        steam: &dyn SteamModel,
        sweep: &SweepDefinition,
    ) -> CycleResult<Self> {
        let dome = saturation_dome(steam, sweep)?;
        let overlay = StateId::OVERLAY
            .iter()
            .map(|&id| ts_point(states.get(id)))
            .collect();
        let labels = StateId::ALL
            .iter()
            .map(|&id| point_label(id, states))
            .collect();

        Ok(Self {
            dome,
            overlay,
            labels,
        })
    }
}

/// Linear pressure sweep from 1 kPa to 22 063 kPa with 1000 samples.
pub fn default_dome_sweep() -> SweepDefinition {
    SweepDefinition {
        quantity: Quantity::Pressure,
        start_si: DOME_P_START_PA,
        end_si: DOME_P_END_PA,
        num_points: DOME_SAMPLES,
        spacing: Spacing::Linear,
    }
}

/// Trace both branches of the saturation dome over a pressure sweep.
pub fn saturation_dome(
    steam: &dyn SteamModel,
    sweep: &SweepDefinition,
) -> CycleResult<DomeCurve> {
    let pressures = sweep.generate_points();
    debug!(samples = pressures.len(), %sweep, "tracing saturation dome");

    let mut dome = DomeCurve {
        liquid: Vec::with_capacity(pressures.len()),
        vapor: Vec::with_capacity(pressures.len()),
    };
    for p in pressures {
        let sat = steam.saturation(pa(p))?;
        let t = to_kelvin(sat.t);
        dome.liquid.push((to_kilo(sat.liquid.s), t));
        dome.vapor.push((to_kilo(sat.vapor.s), t));
    }
    Ok(dome)
}

fn ts_point(point: &StatePoint) -> (f64, f64) {
    (to_kilo(point.s), to_kelvin(point.t))
}

#[derive(Clone, Copy)]
enum Field {
    T,
    H,
    S,
    X,
}

fn label_fields(id: StateId) -> &'static [Field] {
    use Field::*;
    match id {
        StateId::Condensate => &[T, H, S],
        StateId::Feedwater => &[T, H],
        StateId::BoilerLiquid => &[T, H, S],
        StateId::BoilerVapor => &[H, S],
        StateId::LiveSteam => &[T, H],
        StateId::HpExhaust => &[T, H, S, X],
        StateId::Reheated => &[T, H, S],
        StateId::LpExhaust => &[T, H, X],
    }
}

fn point_label(id: StateId, states: &CycleStates) -> PointLabel {
    let point = states.get(id);
    let (s, t) = ts_point(point);

    let (anchor, align) = match id {
        StateId::Condensate => ((s - 0.1, t), LabelAlign::Right),
        StateId::Feedwater => ((s + 0.95, t + 11.0), LabelAlign::Left),
        StateId::BoilerLiquid => ((s - 0.15, t), LabelAlign::Right),
        StateId::BoilerVapor => ((s - 0.1, t - 60.0), LabelAlign::Right),
        StateId::LiveSteam => ((s - 0.47, t - 50.0), LabelAlign::Right),
        StateId::HpExhaust => ((s - 0.1, t - 80.0), LabelAlign::Right),
        StateId::Reheated => ((s + 0.1, t - 70.0), LabelAlign::Left),
        StateId::LpExhaust => ((s + 0.1, t), LabelAlign::Left),
    };
    let fields = label_fields(id);

    let mut lines = Vec::with_capacity(fields.len() + 1);
    lines.push(format!("({})", id.label()));
    for field in fields {
        match field {
            Field::T => lines.push(format!("T = {:.2} K", t)),
            Field::H => lines.push(format!("h = {:.1} kJ/kg", to_kilo(point.h))),
            Field::S => lines.push(format!("s = {:.3} kJ/kgK", s)),
            Field::X => {
                if let Some(x) = point.quality {
                    lines.push(format!("x = {:.3}", x));
                }
            }
        }
    }

    PointLabel {
        id,
        anchor,
        align,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CycleParameters;
    use crate::solve::solve_reheat_cycle;
    use rk_fluids::If97Model;

    fn default_diagram(samples: usize) -> (CycleStates, DiagramData) {
        let steam = If97Model::new();
        let states = solve_reheat_cycle(&CycleParameters::default(), &steam).unwrap();
        let sweep = SweepDefinition {
            num_points: samples,
            ..default_dome_sweep()
        };
        let diagram = DiagramData::with_sweep(&states, &steam, &sweep).unwrap();
        (states, diagram)
    }

    #[test]
    fn default_sweep_bounds() {
        let sweep = default_dome_sweep();
        let pts = sweep.generate_points();
        assert_eq!(pts.len(), 1000);
        assert_eq!(pts[0], 1.0e3);
        assert_eq!(pts[999], 22.063e6);
    }

    #[test]
    fn dome_branches_meet_near_critical_point() {
        let (_, diagram) = default_diagram(50);
        let dome = &diagram.dome;
        assert_eq!(dome.liquid.len(), 50);
        assert_eq!(dome.vapor.len(), 50);

        for (l, v) in dome.liquid.iter().zip(&dome.vapor) {
            assert!(v.0 >= l.0, "vapor entropy must not be below liquid entropy");
            assert_eq!(l.1, v.1);
        }
        let (l_end, v_end) = (dome.liquid[49], dome.vapor[49]);
        assert!((v_end.0 - l_end.0) < 0.5);
        assert!((l_end.1 - 647.1).abs() < 1.0);
    }

    #[test]
    fn overlay_is_closed_and_ordered() {
        let (states, diagram) = default_diagram(10);
        assert_eq!(diagram.overlay.len(), 9);
        assert_eq!(diagram.overlay.first(), diagram.overlay.last());
        let (s3, t3) = diagram.overlay[4];
        assert_eq!(s3, to_kilo(states.live_steam.s));
        assert_eq!(t3, to_kelvin(states.live_steam.t));
    }

    #[test]
    fn labels_use_their_own_states() {
        let (states, diagram) = default_diagram(10);
        assert_eq!(diagram.labels.len(), 8);

        let five = diagram
            .labels
            .iter()
            .find(|l| l.id == StateId::Reheated)
            .unwrap();
        let h5 = format!("h = {:.1} kJ/kg", to_kilo(states.reheated.h));
        assert!(five.lines.contains(&h5), "{:?}", five.lines);

        let six = diagram
            .labels
            .iter()
            .find(|l| l.id == StateId::LpExhaust)
            .unwrap();
        let t6 = format!("T = {:.2} K", to_kelvin(states.lp_exhaust.t));
        assert_eq!(six.lines[0], "(6)");
        assert_eq!(six.lines[1], t6);
        assert!(six.lines[3].starts_with("x = 0.96"));
    }

    #[test]
    fn label_fields_follow_point() {
        let (_, diagram) = default_diagram(10);
        let counts: Vec<usize> = diagram.labels.iter().map(|l| l.lines.len()).collect();
        // heading + fields: (1) THS, (2) TH, (2') THS, (3') HS, (3) TH, (4) THSX, (5) THS, (6) THX
        assert_eq!(counts, vec![4, 3, 4, 3, 3, 5, 4, 4]);
    }
}
