//! IAPWS-IF97 steam property model.
//!
//! Delegates the industrial formulation to the `seuif97` crate, which works in
//! MPa, °C, kJ/kg and kJ/(kg·K). This module converts to and from SI at the
//! boundary so the rest of the workspace only sees Pa, K, J/kg and J/(kg·K).

use crate::error::{FluidError, FluidResult};
use crate::model::{SteamModel, guard};
use crate::state::{PhaseProps, Saturation};
use rk_core::ensure_finite;
use rk_core::units::{
    Pressure, SpecEnthalpy, SpecEntropy, Temperature, celsius, to_celsius, to_mpa,
};
use seuif97::{OH, OS, OT, OV, ph, ps, pt, px};
use tracing::{debug, trace};

/// Value `seuif97` returns when a query falls outside every IF97 region.
const INVALID_VALUE: f64 = -1.0;

/// Upper temperature limit of IF97 regions 1-3 [K].
const T_MAX_K: f64 = 1073.15;

/// Upper pressure limit of IF97 [Pa].
const P_MAX_PA: f64 = 100.0e6;

/// IAPWS-IF97 backend for water and steam.
///
/// Stateless and `Copy`; construct freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Model;

impl If97Model {
    /// Create a new IF97 model.
    pub fn new() -> Self {
        Self
    }

    /// Reject pressures IF97 does not cover.
    fn check_pressure(p: Pressure) -> FluidResult<f64> {
        guard::pressure(p)?;
        if p.value > P_MAX_PA {
            return Err(FluidError::OutOfRange {
                what: "IF97 pressure (max 100 MPa)",
                value: p.value,
            });
        }
        Ok(to_mpa(p))
    }

    /// Saturated-branch properties at `p_mpa` and quality `x` (0 or 1).
    fn branch(p_mpa: f64, x: f64) -> FluidResult<PhaseProps> {
        Ok(PhaseProps {
            h: checked(px(p_mpa, x, OH), "saturated enthalpy")? * 1e3,
            s: checked(px(p_mpa, x, OS), "saturated entropy")? * 1e3,
            v: checked(px(p_mpa, x, OV), "saturated specific volume")?,
        })
    }

    fn saturation_temperature(p_mpa: f64) -> FluidResult<Temperature> {
        let t_c = checked(px(p_mpa, 0.0, OT), "saturation temperature")?;
        Ok(celsius(t_c))
    }
}

/// Convert a raw `seuif97` output into a checked value.
fn checked(value: f64, what: &'static str) -> FluidResult<f64> {
    let value = ensure_finite(value, what)?;
    if value == INVALID_VALUE {
        return Err(FluidError::Backend {
            message: format!("IF97 returned no value for {what}"),
        });
    }
    Ok(value)
}

impl SteamModel for If97Model {
    fn name(&self) -> &str {
        "IAPWS-IF97"
    }

    fn saturation(&self, p: Pressure) -> FluidResult<Saturation> {
        guard::saturation_pressure(p)?;
        let p_mpa = to_mpa(p);
        trace!(p_mpa, "IF97 saturation query");

        Ok(Saturation {
            p,
            t: Self::saturation_temperature(p_mpa)?,
            liquid: Self::branch(p_mpa, 0.0)?,
            vapor: Self::branch(p_mpa, 1.0)?,
        })
    }

    fn superheated(&self, p: Pressure, t: Temperature) -> FluidResult<PhaseProps> {
        let p_mpa = Self::check_pressure(p)?;
        guard::temperature(t)?;
        if t.value > T_MAX_K {
            return Err(FluidError::OutOfRange {
                what: "IF97 temperature (max 1073.15 K)",
                value: t.value,
            });
        }
        if guard::saturation_pressure(p).is_ok() {
            guard::above_saturation(t, Self::saturation_temperature(p_mpa)?)?;
        }

        let t_c = to_celsius(t);
        debug!(p_mpa, t_c, "IF97 superheated query");
        Ok(PhaseProps {
            h: checked(pt(p_mpa, t_c, OH), "enthalpy")? * 1e3,
            s: checked(pt(p_mpa, t_c, OS), "entropy")? * 1e3,
            v: checked(pt(p_mpa, t_c, OV), "specific volume")?,
        })
    }

    fn t_from_ph(&self, p: Pressure, h: SpecEnthalpy) -> FluidResult<Temperature> {
        let p_mpa = Self::check_pressure(p)?;
        guard::finite(h, "enthalpy must be finite")?;
        let t_c = checked(ph(p_mpa, h * 1e-3, OT), "temperature from (p, h)")?;
        Ok(celsius(t_c))
    }

    fn t_from_ps(&self, p: Pressure, s: SpecEntropy) -> FluidResult<Temperature> {
        let p_mpa = Self::check_pressure(p)?;
        guard::finite(s, "entropy must be finite")?;
        let t_c = checked(ps(p_mpa, s * 1e-3, OT), "temperature from (p, s)")?;
        Ok(celsius(t_c))
    }

    fn h_from_px(&self, p: Pressure, x: f64) -> FluidResult<SpecEnthalpy> {
        guard::saturation_pressure(p)?;
        guard::quality(x)?;
        Ok(checked(px(to_mpa(p), x, OH), "enthalpy from (p, x)")? * 1e3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_core::units::{k, kpa, mpa, to_kelvin};

    #[test]
    fn model_name() {
        assert_eq!(If97Model::new().name(), "IAPWS-IF97");
    }

    #[test]
    fn checked_rejects_sentinel_and_nan() {
        assert!(checked(INVALID_VALUE, "h").is_err());
        assert!(matches!(
            checked(f64::NAN, "h"),
            Err(FluidError::Core(_))
        ));
        assert_eq!(checked(2.5, "h").unwrap(), 2.5);
    }

    #[test]
    fn rejects_pressure_above_limit() {
        let err = If97Model::new()
            .superheated(mpa(150.0), k(700.0))
            .unwrap_err();
        assert!(matches!(err, FluidError::OutOfRange { .. }));
    }

    #[test]
    fn rejects_subcooled_superheated_query() {
        // 4 MPa saturates near 523.7 K
        let err = If97Model::new()
            .superheated(mpa(4.0), k(500.0))
            .unwrap_err();
        assert!(matches!(err, FluidError::OutOfRange { .. }));
    }

    #[test]
    fn saturation_rejects_supercritical() {
        let err = If97Model::new().saturation(mpa(25.0)).unwrap_err();
        assert!(matches!(err, FluidError::OutOfRange { .. }));
    }

    #[test]
    fn saturation_at_10kpa_matches_tables() {
        let sat = If97Model::new().saturation(kpa(10.0)).unwrap();
        assert!((to_kelvin(sat.t) - 318.956).abs() < 0.01);
        assert!((sat.liquid.h - 191.81e3).abs() < 0.1e3);
        assert!((sat.liquid.s - 649.2).abs() < 1.0);
        assert!((sat.liquid.v - 0.001_010).abs() < 2e-6);
        assert!((sat.vapor.h - 2583.9e3).abs() < 1.0e3);
        assert!((sat.vapor.s - 8_149.0).abs() < 3.0);
    }

    #[test]
    fn h_from_px_agrees_with_lever_rule() {
        let model = If97Model::new();
        let p = kpa(400.0);
        let sat = model.saturation(p).unwrap();
        let direct = model.h_from_px(p, 0.75).unwrap();
        let lever = sat.mix(0.75).h;
        assert!((direct - lever).abs() < 1.0, "{direct} vs {lever}");
    }
}
