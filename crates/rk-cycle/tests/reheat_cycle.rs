//! End-to-end tests of the reheat cycle analysis with the IF97 backend.

use proptest::prelude::*;
use rk_core::units::{celsius, kpa, mpa, to_kilo};
use rk_cycle::{
    CycleConfigDef, CycleError, CycleParameters, DiagramData, PerformanceMetrics, load, load_json,
    load_yaml, save_json, save_yaml, solve_reheat_cycle,
};
use rk_fluids::If97Model;

#[test]
fn textbook_reheat_efficiency() {
    let states = solve_reheat_cycle(&CycleParameters::default(), &If97Model::new()).unwrap();
    let m = PerformanceMetrics::from_states(&states);

    assert!(
        (m.thermal_efficiency - 35.9).abs() < 0.15,
        "eta = {}",
        m.thermal_efficiency
    );
    let x4 = states.hp_exhaust.quality.unwrap();
    let x6 = states.lp_exhaust.quality.unwrap();
    assert!(x4 > 0.0 && x4 < 1.0);
    assert!(x6 > 0.0 && x6 < 1.0);
}

#[test]
fn first_law_closure() {
    let states = solve_reheat_cycle(&CycleParameters::default(), &If97Model::new()).unwrap();
    let m = PerformanceMetrics::from_states(&states);
    let lhs = m.heat_input - m.heat_rejected;
    let rhs = m.hp_turbine_work + m.lp_turbine_work - m.pump_work;
    assert!((lhs - rhs).abs() < 1e-6, "{lhs} vs {rhs}");
}

#[test]
fn repeated_runs_are_bit_identical() {
    let steam = If97Model::new();
    let params = CycleParameters::default();
    let a = solve_reheat_cycle(&params, &steam).unwrap();
    let b = solve_reheat_cycle(&params, &steam).unwrap();
    assert_eq!(a, b);

    let ma = PerformanceMetrics::from_states(&a);
    let mb = PerformanceMetrics::from_states(&b);
    assert_eq!(ma.thermal_efficiency.to_bits(), mb.thermal_efficiency.to_bits());
}

#[test]
fn formatting_does_not_touch_stored_values() {
    let states = solve_reheat_cycle(&CycleParameters::default(), &If97Model::new()).unwrap();
    let m = PerformanceMetrics::from_states(&states);
    let before = m;
    let _ = format!("{:.1}", to_kilo(m.pump_work));
    let _ = DiagramData::build(&states, &If97Model::new()).unwrap();
    assert_eq!(m, before);
}

#[test]
fn higher_reheat_temperature_improves_efficiency() {
    let steam = If97Model::new();
    let base_states = solve_reheat_cycle(&CycleParameters::default(), &steam).unwrap();
    let base = PerformanceMetrics::from_states(&base_states);

    // 450 °C at 400 kPa gives s5 ≈ 8.05 kJ/(kg·K), still below s_g at 10 kPa.
    let hotter = CycleParameters {
        reheat_exit_temperature: celsius(450.0),
        ..CycleParameters::default()
    };
    let hot_states = solve_reheat_cycle(&hotter, &steam).unwrap();
    let hot = PerformanceMetrics::from_states(&hot_states);

    assert!(hot.thermal_efficiency > base.thermal_efficiency);
    assert!(hot_states.lp_exhaust.quality.unwrap() > base_states.lp_exhaust.quality.unwrap());
    assert!(hot_states.lp_exhaust.quality.unwrap() < 1.0);
}

#[test]
fn reheat_past_lp_dome_is_rejected() {
    // 500 °C at 400 kPa: s5 ≈ 8.19 kJ/(kg·K) exceeds s_g ≈ 8.15 at 10 kPa.
    let params = CycleParameters {
        reheat_exit_temperature: celsius(500.0),
        ..CycleParameters::default()
    };
    let err = solve_reheat_cycle(&params, &If97Model::new()).unwrap_err();
    match err {
        CycleError::NotTwoPhase { point, entropy } => {
            assert_eq!(point, "6");
            assert!((to_kilo(entropy) - 8.193).abs() < 0.01, "s5 = {entropy}");
        }
        other => panic!("expected a superheated LP exhaust, got {other}"),
    }
}

#[test]
fn config_yaml_roundtrip() {
    let params = CycleParameters {
        boiler_pressure: mpa(6.0),
        reheat_pressure: kpa(600.0),
        ..CycleParameters::default()
    };

    let path = std::env::temp_dir().join("rk_cycle_roundtrip.yaml");
    save_yaml(&path, &params).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert!((loaded.boiler_pressure.value - 6.0e6).abs() < 1e-6);
    assert!((loaded.reheat_pressure.value - 6.0e5).abs() < 1e-6);
    assert!((loaded.boiler_exit_temperature.value - 673.15).abs() < 1e-9);
    assert_eq!(loaded.condenser_pressure, params.condenser_pressure);
}

#[test]
fn config_json_roundtrip_by_extension() {
    let params = CycleParameters::default();
    let path = std::env::temp_dir().join("rk_cycle_roundtrip.json");
    save_json(&path, &params).unwrap();

    let a = load_json(&path).unwrap();
    let b = load(&path).unwrap();
    assert_eq!(a, b);
    assert!((a.reheat_exit_temperature.value - 673.15).abs() < 1e-9);
}

#[test]
fn config_file_with_units() {
    let path = std::env::temp_dir().join("rk_cycle_units.yml");
    std::fs::write(
        &path,
        "condenser_pressure: \"0.1 bar\"\nboiler_exit_temperature: \"752 F\"\n",
    )
    .unwrap();

    let params = load(&path).unwrap();
    assert!((params.condenser_pressure.value - 1.0e4).abs() < 1e-6);
    assert!((params.boiler_exit_temperature.value - 673.15).abs() < 1e-6);
}

#[test]
fn invalid_config_surfaces_as_cycle_error() {
    let def = CycleConfigDef {
        reheat_pressure: Some("5 kPa".into()),
        ..Default::default()
    };
    let err = def.resolve().unwrap_err();
    let cycle_err: CycleError = err.into();
    assert!(matches!(cycle_err, CycleError::InvalidParameters(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn first_law_closes_across_operating_range(
        p_boiler_mpa in 3.0_f64..8.0,
        reheat_frac in 0.08_f64..0.2,
        t_boiler_c in 400.0_f64..550.0,
        t_reheat_c in 350.0_f64..500.0,
    ) {
        let params = CycleParameters {
            condenser_pressure: kpa(10.0),
            boiler_pressure: mpa(p_boiler_mpa),
            reheat_pressure: mpa(p_boiler_mpa * reheat_frac),
            boiler_exit_temperature: celsius(t_boiler_c),
            reheat_exit_temperature: celsius(t_reheat_c),
        };

        match solve_reheat_cycle(&params, &If97Model::new()) {
            Ok(states) => {
                let m = PerformanceMetrics::from_states(&states);
                prop_assert!(m.first_law_residual().abs() < 1e-6);
                prop_assert!(m.thermal_efficiency > 0.0 && m.thermal_efficiency < 100.0);
                prop_assert_eq!(states.hp_exhaust.s, states.live_steam.s);
                prop_assert_eq!(states.lp_exhaust.s, states.reheated.s);
            }
            // Hot, low-pressure corners can leave the HP exhaust superheated.
            Err(CycleError::NotTwoPhase { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }
}
