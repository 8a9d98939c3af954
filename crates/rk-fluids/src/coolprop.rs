//! CoolProp backend (IAPWS-95 through `rfluids`).

use crate::error::{FluidError, FluidResult};
use crate::model::{SteamModel, guard};
use crate::state::{PhaseProps, Saturation};
use rfluids::prelude::*;
use rk_core::units::{Pressure, SpecEnthalpy, SpecEntropy, Temperature, k};
use std::fmt::Display;
use tracing::trace;

/// Water properties from CoolProp.
///
/// Each query builds its own `Fluid`, so the model holds no state and is
/// `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolPropModel;

fn backend<E: Display>(context: &'static str) -> impl FnOnce(E) -> FluidError {
    move |e| FluidError::Backend {
        message: format!("CoolProp {context}: {e}"),
    }
}

impl CoolPropModel {
    pub fn new() -> Self {
        Self
    }

    fn water(a: FluidInput, b: FluidInput) -> FluidResult<Fluid> {
        Fluid::from(Pure::Water)
            .in_state(a, b)
            .map_err(backend("state update"))
    }

    fn props(fluid: &mut Fluid) -> FluidResult<PhaseProps> {
        let h = fluid.enthalpy().map_err(backend("enthalpy"))?;
        let s = fluid.entropy().map_err(backend("entropy"))?;
        let rho = fluid.density().map_err(backend("density"))?;
        Ok(PhaseProps { h, s, v: 1.0 / rho })
    }

    fn temperature(fluid: &mut Fluid) -> FluidResult<Temperature> {
        Ok(k(fluid.temperature().map_err(backend("temperature"))?))
    }
}

impl SteamModel for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn saturation(&self, p: Pressure) -> FluidResult<Saturation> {
        guard::saturation_pressure(p)?;
        trace!(p_pa = p.value, "CoolProp saturation query");

        let mut liquid = Self::water(FluidInput::pressure(p.value), FluidInput::quality(0.0))?;
        let mut vapor = Self::water(FluidInput::pressure(p.value), FluidInput::quality(1.0))?;
        Ok(Saturation {
            p,
            t: Self::temperature(&mut liquid)?,
            liquid: Self::props(&mut liquid)?,
            vapor: Self::props(&mut vapor)?,
        })
    }

    fn superheated(&self, p: Pressure, t: Temperature) -> FluidResult<PhaseProps> {
        guard::pressure(p)?;
        guard::temperature(t)?;
        if guard::saturation_pressure(p).is_ok() {
            guard::above_saturation(t, self.saturation(p)?.t)?;
        }

        let mut fluid = Self::water(
            FluidInput::pressure(p.value),
            FluidInput::temperature(t.value),
        )?;
        Self::props(&mut fluid)
    }

    fn t_from_ph(&self, p: Pressure, h: SpecEnthalpy) -> FluidResult<Temperature> {
        guard::pressure(p)?;
        guard::finite(h, "enthalpy must be finite")?;
        Self::temperature(&mut Self::water(
            FluidInput::pressure(p.value),
            FluidInput::enthalpy(h),
        )?)
    }

    fn t_from_ps(&self, p: Pressure, s: SpecEntropy) -> FluidResult<Temperature> {
        guard::pressure(p)?;
        guard::finite(s, "entropy must be finite")?;
        Self::temperature(&mut Self::water(
            FluidInput::pressure(p.value),
            FluidInput::entropy(s),
        )?)
    }
}
