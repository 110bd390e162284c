// src/engine/mod.rs

//! The Sphere-Base-One calculation engine.
//! `SphereBaseOne` owns the conversion ratio and exposes every calculation
//! as a method, delegating to the free functions in `units` and `calculations`.

use crate::calculations;
use crate::core::{ConversionRatio, Sb1Error};
use crate::units;

/// Calculation engine for the normalized sphere unit system.
///
/// Construction computes the cube-to-Hahn ratio once; every method after that is
/// a pure function of its arguments and that ratio. The engine is `Copy` and
/// holds no interior mutability, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphereBaseOne {
    ratio: ConversionRatio,
}

impl SphereBaseOne {
    /// Creates a new engine. Always succeeds.
    pub fn new() -> Self {
        Self { ratio: ConversionRatio::new() }
    }

    /// The cube-to-Hahn ratio (`6 / π`) this engine converts with.
    pub fn ratio(&self) -> f64 {
        self.ratio.value()
    }

    /// s-state energy factor `n²` for quantum index `n`.
    pub fn energy_level(&self, n: i64) -> u128 {
        calculations::energy_level(n)
    }

    /// Converts a standard cubic volume into Hahn units.
    pub fn convert_to_normalized(&self, standard_volume: f64) -> f64 {
        units::convert_to_normalized(standard_volume, &self.ratio)
    }

    /// Converts a Hahn volume back into standard cubic units.
    pub fn convert_from_normalized(&self, normalized_volume: f64) -> f64 {
        units::convert_from_normalized(normalized_volume, &self.ratio)
    }

    /// Packing ratio of `sphere_count` unit spheres in a container of
    /// `container_volume` cubic units.
    ///
    /// # Returns
    /// * `Ok(f64)` with the ratio. Values outside `[0, 1]` are not rejected;
    ///   see [`crate::validation::check_packing_plausibility`].
    /// * `Err(Sb1Error::DomainViolation)` if `container_volume` is zero.
    pub fn packing_efficiency(&self, container_volume: f64, sphere_count: f64) -> Result<f64, Sb1Error> {
        calculations::packing_efficiency(container_volume, sphere_count, &self.ratio)
    }

    /// Orbital period `sqrt(a³)` relative to the reference orbit.
    ///
    /// # Returns
    /// * `Ok(f64)` for `distance_ratio >= 0` (and NaN for NaN input).
    /// * `Err(Sb1Error::DomainViolation)` if `distance_ratio` is negative.
    pub fn orbital_period(&self, distance_ratio: f64) -> Result<f64, Sb1Error> {
        calculations::orbital_period(distance_ratio)
    }
}
