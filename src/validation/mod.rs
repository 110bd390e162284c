// src/validation/mod.rs

//! Opt-in plausibility checks for callers of the engine.
//!
//! The engine accepts any numerically valid input and returns whatever the
//! arithmetic produces. These helpers let a caller reject physically
//! implausible values before or after a call.

use crate::core::Sb1Error;
use num_traits::Float;

// Default tolerance values (can be overridden by caller)
const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-9;
const DEFAULT_PACKING_TOLERANCE: f64 = 1e-12;

/// Compares two floats with a relative tolerance.
///
/// The tolerance is scaled by the larger magnitude of the two inputs, so the
/// comparison is meaningful for both tiny and huge values. Exact equality
/// (including both zero) always passes; NaN never does.
///
/// # Arguments
/// * `a`, `b` - Values to compare.
/// * `rel_tol` - Allowed relative deviation. Defaults to 1e-9.
pub fn approx_eq<T: Float>(a: T, b: T, rel_tol: Option<T>) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let tolerance = rel_tol
        .or_else(|| T::from(DEFAULT_RELATIVE_TOLERANCE))
        .unwrap_or_else(T::epsilon);
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= tolerance * scale
}

/// Checks that a packing ratio describes a real arrangement of
/// non-overlapping spheres, i.e. lies in `[0, 1]`.
///
/// # Arguments
/// * `ratio` - Result of `packing_efficiency`.
/// * `tolerance` - Allowed overshoot at either bound. Defaults to 1e-12.
///
/// # Returns
/// * `Ok(())` if the ratio is finite and within bounds.
/// * `Err(Sb1Error::ModelingInconsistency)` otherwise.
pub fn check_packing_plausibility(ratio: f64, tolerance: Option<f64>) -> Result<(), Sb1Error> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_PACKING_TOLERANCE);
    if ratio.is_finite() && ratio >= -effective_tolerance && ratio <= 1.0 + effective_tolerance {
        return Ok(());
    }

    tracing::debug!(ratio, effective_tolerance, "packing ratio outside [0, 1]");
    Err(Sb1Error::ModelingInconsistency {
        message: format!("Packing ratio {:.4} is outside [0, 1] (tolerance {})", ratio, effective_tolerance),
    })
}

/// Checks that a volume is finite and non-negative.
pub fn check_physical_volume(volume: f64) -> Result<(), Sb1Error> {
    if volume.is_finite() && volume >= 0.0 {
        Ok(())
    } else {
        tracing::debug!(volume, "volume is not physical");
        Err(Sb1Error::ModelingInconsistency {
            message: format!("Volume {} is negative or not finite", volume),
        })
    }
}
