//! rk-cycle: ideal reheat Rankine cycle analysis.
//!
//! The analysis is a single pass:
//! 1. `solve_reheat_cycle` resolves the six cycle state points (plus the
//!    saturated reference points 2' and 3') from `CycleParameters`.
//! 2. `PerformanceMetrics::from_states` derives works, heats and efficiency.
//! 3. `DiagramData::build` prepares the T-s diagram (dome, overlay, labels).
//!
//! # Example
//!
//! ```no_run
//! use rk_cycle::{CycleParameters, PerformanceMetrics, solve_reheat_cycle};
//! use rk_fluids::If97Model;
//!
//! let params = CycleParameters::default();
//! let states = solve_reheat_cycle(&params, &If97Model::new()).unwrap();
//! let metrics = PerformanceMetrics::from_states(&states);
//! println!("eta = {:.1}%", metrics.thermal_efficiency);
//! ```

pub mod config;
pub mod diagram;
pub mod error;
pub mod metrics;
pub mod solve;

pub use config::{
    ConfigError, ConfigResult, CycleConfigDef, CycleParameters, load, load_def, load_json,
    load_yaml, save_json, save_yaml,
};
pub use diagram::{DiagramData, DomeCurve, LabelAlign, PointLabel};
pub use error::{CycleError, CycleResult};
pub use metrics::PerformanceMetrics;
pub use solve::{CycleStates, StateId, solve_reheat_cycle};
