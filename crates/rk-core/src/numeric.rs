use crate::CoreError;

/// Floating point type used throughout the calculator
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Evenly spaced samples over `[start, end]`, endpoint included.
///
/// Returns `[start]` when fewer than two samples are requested.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n < 2 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as Real;
    let mut out: Vec<Real> = (0..n).map(|i| start + i as Real * step).collect();
    out[n - 1] = end;
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_is_monotone(start in -1e3_f64..1e3, span in 1e-3_f64..1e4, n in 2_usize..500) {
            let xs = linspace(start, start + span, n);
            prop_assert_eq!(xs.len(), n);
            prop_assert!(xs.windows(2).all(|w| w[1] >= w[0]));
        }
    }
}
