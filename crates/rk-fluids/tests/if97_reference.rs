//! IF97 backend checked against the verification values published with
//! IAPWS R7-97.

use rk_core::units::{k, kpa, mpa, to_kelvin};
use rk_fluids::{If97Model, SteamModel};

#[test]
fn saturation_temperatures() {
    let steam = If97Model::new();
    let cases = [
        (mpa(0.1), 372.755_919),
        (mpa(1.0), 453.035_632),
        (mpa(10.0), 584.149_488),
    ];
    for (p, expected) in cases {
        let t = to_kelvin(steam.saturation(p).unwrap().t);
        assert!(
            (t - expected).abs() < 1e-3,
            "Tsat at {} Pa: {t} vs {expected}",
            p.value
        );
    }
}

#[test]
fn region2_low_pressure_vapor() {
    let steam = If97Model::new();
    let props = steam.superheated(kpa(3.5), k(300.0)).unwrap();
    assert!((props.h - 2_549.911_45e3).abs() < 1.0, "h = {}", props.h);
    assert!((props.s - 8_522.389_67).abs() < 0.01, "s = {}", props.s);
}

#[test]
fn backward_temperature_lookups_recover_input() {
    let steam = If97Model::new();
    let p = mpa(4.0);
    let t_in = k(673.15);
    let props = steam.superheated(p, t_in).unwrap();

    let t_ph = to_kelvin(steam.t_from_ph(p, props.h).unwrap());
    let t_ps = to_kelvin(steam.t_from_ps(p, props.s).unwrap());
    assert!((t_ph - 673.15).abs() < 0.05, "T(p,h) = {t_ph}");
    assert!((t_ps - 673.15).abs() < 0.05, "T(p,s) = {t_ps}");
}

#[test]
fn expansion_into_dome_reports_quality() {
    let steam = If97Model::new();
    // 4 MPa, 400 °C expanded to 400 kPa lands just inside the dome.
    let inlet = steam.superheated(mpa(4.0), k(673.15)).unwrap();
    let exit = steam.expansion_state(kpa(400.0), inlet.s).unwrap();
    let x = exit.quality.unwrap();
    assert!(x > 0.95 && x < 1.0, "x = {x}");
    assert!((to_kelvin(exit.t) - 416.76).abs() < 0.05);
}

#[test]
fn expansion_above_dome_reports_no_quality() {
    let steam = If97Model::new();
    let inlet = steam.superheated(mpa(4.0), k(873.15)).unwrap();
    let exit = steam.expansion_state(mpa(1.0), inlet.s).unwrap();
    assert!(!exit.is_two_phase());
    assert!(to_kelvin(exit.t) > 453.04);
}
