//! Error types for report generation.

use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    /// A state expected to be two-phase carries no quality.
    #[error("State point {point} has no vapor quality")]
    MissingQuality { point: &'static str },

    #[error("Plot rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
