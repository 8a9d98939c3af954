//! rk-report: presentation of reheat Rankine cycle results.
//!
//! - `text`: the fixed-order, fixed-precision console report
//! - `json`: machine-readable summary of state points and metrics
//! - `plot`: annotated T-s diagram rendered to PNG
//!
//! Rounding happens only while formatting; the solved values are borrowed,
//! never modified.

pub mod error;
pub mod json;
pub mod plot;
pub mod text;

pub use error::{ReportError, ReportResult};
pub use json::{CycleSummary, MetricsSummary, ParametersSummary, PointSummary};
pub use plot::{DEFAULT_PLOT_FILE, PlotConfig, render_ts_diagram};
pub use text::{report_lines, write_text};
