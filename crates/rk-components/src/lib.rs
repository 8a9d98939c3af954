//! rk-components: steady-flow process models for steam power cycles.
//!
//! Provides the four ideal processes of a Rankine cycle:
//! - Pump (incompressible, isentropic compression)
//! - Turbine (isentropic expansion into the two-phase dome)
//! - Heater (constant-pressure heating to a target temperature; boiler and reheater)
//! - Condenser (constant-pressure cooling to saturated liquid)
//!
//! All components implement the `SteadyFlowProcess` trait and are deterministic
//! functions of the inlet state and their parameters.
//!
//! # Example
//!
//! ```no_run
//! use rk_components::{Pump, SteadyFlowProcess};
//! use rk_fluids::{If97Model, StatePoint, SteamModel};
//! use rk_core::units::{kpa, mpa};
//!
//! let steam = If97Model::new();
//! let sat = steam.saturation(kpa(10.0)).unwrap();
//! let inlet = StatePoint::saturated_liquid(&sat);
//!
//! let pump = Pump::new("feed pump".into(), mpa(4.0)).unwrap();
//! let outlet = pump.outlet(&steam, &inlet).unwrap();
//! println!("Pump work: {} J/kg", pump.shaft_work(&inlet, &outlet));
//! ```

pub mod condenser;
pub mod error;
pub mod heater;
pub mod pump;
pub mod traits;
pub mod turbine;

// Re-exports
pub use condenser::Condenser;
pub use error::{ComponentError, ComponentResult};
pub use heater::Heater;
pub use pump::Pump;
pub use traits::SteadyFlowProcess;
pub use turbine::Turbine;
