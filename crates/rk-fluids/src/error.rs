//! Steam property errors.

use rk_core::CoreError;
use thiserror::Error;

/// Result type for property lookups.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during steam property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative pressure, quality outside [0,1], etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Input outside the validity range of the backend.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Backend (IF97 or CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
