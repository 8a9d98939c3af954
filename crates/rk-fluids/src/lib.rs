//! rk-fluids: steam property oracle for the reheat Rankine calculator.
//!
//! Provides:
//! - Saturation, single-phase and cycle state records (`Saturation`, `PhaseProps`, `StatePoint`)
//! - `SteamModel` trait for property lookups and inverse lookups
//! - IAPWS-IF97 backend (`seuif97`), the default
//! - CoolProp backend (`rfluids`) behind the `coolprop` feature
//! - Unit-tagged quantity parsing and sweep generation
//!
//! # Architecture
//!
//! The rest of the workspace only sees the `SteamModel` trait, so cycle code is
//! independent of the backend. Both backends are stateless and deterministic.
//!
//! # Example
//!
//! ```no_run
//! use rk_fluids::{If97Model, SteamModel};
//! use rk_core::units::kpa;
//!
//! let steam = If97Model::new();
//! let sat = steam.saturation(kpa(10.0)).unwrap();
//! println!("h_f = {} J/kg, h_g = {} J/kg", sat.liquid.h, sat.vapor.h);
//! ```

#[cfg(feature = "coolprop")]
pub mod coolprop;
pub mod error;
pub mod if97;
pub mod model;
pub mod state;
pub mod sweeps;
pub mod units;

// Re-exports for ergonomics
#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropModel;
pub use error::{FluidError, FluidResult};
pub use if97::If97Model;
pub use model::SteamModel;
pub use state::{ExpansionState, PhaseProps, Saturation, StatePoint};
pub use sweeps::{Spacing, SweepDefinition};
pub use units::{Quantity, UnitError, parse_quantity};
