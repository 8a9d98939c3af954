//! Error types for cycle analysis.

use crate::config::ConfigError;
use rk_components::ComponentError;
use rk_fluids::FluidError;
use thiserror::Error;

pub type CycleResult<T> = Result<T, CycleError>;

#[derive(Error, Debug)]
pub enum CycleError {
    /// A turbine exit landed outside the two-phase dome.
    #[error("State point {point}: turbine exit is not two-phase (s = {entropy:.1} J/(kg·K))")]
    NotTwoPhase { point: &'static str, entropy: f64 },

    /// A heater exit temperature is not above saturation at its pressure.
    #[error(
        "State point {point}: exit temperature {t:.2} K is not above saturation temperature {t_sat:.2} K"
    )]
    NotSuperheated {
        point: &'static str,
        t: f64,
        t_sat: f64,
    },

    #[error("Invalid cycle parameters: {0}")]
    InvalidParameters(#[from] ConfigError),

    #[error("Steam property error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Component error: {0}")]
    Component(ComponentError),
}

impl From<ComponentError> for CycleError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::Fluid(inner) => CycleError::Fluid(inner),
            other => CycleError::Component(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluid_errors_are_unwrapped_from_components() {
        let err: CycleError = ComponentError::Fluid(FluidError::InvalidArg { what: "p" }).into();
        assert!(matches!(err, CycleError::Fluid(_)));

        let err: CycleError = ComponentError::InvalidArg { what: "p" }.into();
        assert!(matches!(err, CycleError::Component(_)));
    }

    #[test]
    fn error_names_point() {
        let err = CycleError::NotTwoPhase {
            point: "6",
            entropy: 8500.0,
        };
        assert!(err.to_string().starts_with("State point 6"));
    }
}
