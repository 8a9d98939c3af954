//! rk-core: stable foundation for the reheat Rankine calculator.
//!
//! Contains:
//! - units (uom SI types + constructors, water reference constants)
//! - numeric (Real + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
