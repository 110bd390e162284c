// src/core/ratio.rs

use super::constants::sb1_constants::PI;
use std::fmt;

/// The cube-to-Hahn conversion ratio, `6 / π ≈ 1.909859`.
///
/// A diameter-1 sphere occupies `π/6` cubic units. Multiplying a standard volume
/// by this ratio removes that factor, so the same sphere measures exactly 1 in
/// normalized units. The value is computed once in [`ConversionRatio::new`] and
/// cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRatio {
    value: f64,
}

impl ConversionRatio {
    /// Computes the ratio from the double-precision value of π.
    pub fn new() -> Self {
        let value = 6.0 / PI;
        tracing::trace!(ratio = value, "computed cube-to-Hahn conversion ratio");
        Self { value }
    }

    /// The stored ratio.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Default for ConversionRatio {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubeToHahn({:.10})", self.value)
    }
}
