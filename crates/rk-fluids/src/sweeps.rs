//! Sample grids over a single quantity.
//!
//! The T-s diagram traces the saturation dome by querying the property model
//! at every pressure of a [`SweepDefinition`].

use crate::units::{Quantity, UnitError, parse_quantity};
use rk_core::linspace;
use std::fmt;

/// How samples are distributed between the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    #[default]
    Linear,
    /// Equal ratios between neighbours; bounds must be positive
    Logarithmic,
}

/// Closed range `[start_si, end_si]` sampled at `num_points` points.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub quantity: Quantity,
    pub start_si: f64,
    pub end_si: f64,
    pub num_points: usize,
    pub spacing: Spacing,
}

impl SweepDefinition {
    pub fn new(
        quantity: Quantity,
        (start_si, end_si): (f64, f64),
        num_points: usize,
        spacing: Spacing,
    ) -> Result<Self, UnitError> {
        let out_of_range = |value, reason| Err(UnitError::OutOfRange { value, reason });

        if num_points < 2 {
            return out_of_range(num_points as f64, "a sweep needs at least two points");
        }
        if !(start_si.is_finite() && end_si.is_finite()) || start_si == end_si {
            return out_of_range(end_si, "sweep bounds must be finite and distinct");
        }
        if spacing == Spacing::Logarithmic && start_si.min(end_si) <= 0.0 {
            return out_of_range(start_si.min(end_si), "logarithmic bounds must be positive");
        }

        Ok(Self {
            quantity,
            start_si,
            end_si,
            num_points,
            spacing,
        })
    }

    /// Sweep between unit-tagged bounds such as `"1 kPa"` and `"22063 kPa"`.
    pub fn from_text(
        quantity: Quantity,
        (start, end): (&str, &str),
        num_points: usize,
        spacing: Spacing,
    ) -> Result<Self, UnitError> {
        let bounds = (
            parse_quantity(start, quantity)?,
            parse_quantity(end, quantity)?,
        );
        Self::new(quantity, bounds, num_points, spacing)
    }

    /// All sample values, both bounds included exactly.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points;
        let mut points = match self.spacing {
            Spacing::Linear => linspace(self.start_si, self.end_si, n),
            Spacing::Logarithmic => linspace(self.start_si.ln(), self.end_si.ln(), n)
                .into_iter()
                .map(f64::exp)
                .collect(),
        };
        if let [first, .., last] = points.as_mut_slice() {
            *first = self.start_si;
            *last = self.end_si;
        }
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spacing = match self.spacing {
            Spacing::Linear => "linear",
            Spacing::Logarithmic => "log",
        };
        write!(
            f,
            "{} {} .. {} ({} {spacing} points)",
            self.quantity, self.start_si, self.end_si, self.num_points
        )
    }
}
