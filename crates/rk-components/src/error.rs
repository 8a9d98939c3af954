//! Error types for component operations.

use rk_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur during component calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Isentropic expansion ended outside the liquid-vapor dome.
    #[error("{component}: expansion exit is not two-phase (s = {entropy} J/(kg·K))")]
    NotTwoPhase { component: String, entropy: f64 },

    /// Heater target temperature at or below saturation.
    #[error("{component}: exit temperature {t} K is not above saturation ({t_sat} K)")]
    NotSuperheated {
        component: String,
        t: f64,
        t_sat: f64,
    },

    #[error("Steam property error: {0}")]
    Fluid(#[from] FluidError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;
