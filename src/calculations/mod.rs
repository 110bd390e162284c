// src/calculations/mod.rs

//! Scalar physics formulas expressed in Sphere-Base-One units.
//!
//! Each formula is the textbook relation with the `π` (and, for orbits, `G`)
//! factors normalized away:
//! - s-state energy factor: `E = n²` instead of `(h²/8mL²)(nπ)²`
//! - packing efficiency: spheres count as exactly 1 volume unit each
//! - orbital period: `T = sqrt(a³)` instead of `T² = 4π²a³/GM`
//!
//! Domain errors are strict: a zero container volume or a negative distance
//! ratio returns `Sb1Error::DomainViolation`. NaN inputs pass through as NaN.

use crate::core::{ConversionRatio, Sb1Error, HAHN_SPHERE_VOLUME};
use crate::units::convert_to_normalized;

/// Dimensionless energy factor of the s-state (l = 0) with quantum index `n`.
///
/// Returns `n²`. Widening to `u128` keeps this total over all of `i64`.
pub fn energy_level(n: i64) -> u128 {
    let magnitude = u128::from(n.unsigned_abs());
    magnitude * magnitude
}

/// Ratio of packed sphere volume to container volume.
///
/// The container is converted to Hahn units, each sphere contributes exactly
/// one unit, and the two are divided. Counts that give a ratio outside `[0, 1]`
/// are returned as computed.
///
/// # Arguments
/// * `container_volume` - Container volume in standard cubic units.
/// * `sphere_count` - Number of diameter-1 spheres packed inside.
/// * `ratio` - The cube-to-Hahn ratio.
///
/// # Returns
/// * `Ok(f64)` with the packing ratio.
/// * `Err(Sb1Error::DomainViolation)` if `container_volume` is zero.
pub fn packing_efficiency(container_volume: f64, sphere_count: f64, ratio: &ConversionRatio) -> Result<f64, Sb1Error> {
    if container_volume == 0.0 {
        tracing::debug!(container_volume, sphere_count, "rejecting packing efficiency for empty container");
        return Err(Sb1Error::DomainViolation {
            operation: "packing_efficiency",
            message: "container volume is zero; packing ratio is undefined".to_string(),
        });
    }

    let hahn_container_volume = convert_to_normalized(container_volume, ratio);
    let packed_volume = sphere_count * HAHN_SPHERE_VOLUME;
    Ok(packed_volume / hahn_container_volume)
}

/// Orbital period relative to the reference orbit, `T = sqrt(a³)`.
///
/// # Returns
/// * `Ok(f64)` with the period (reference orbit = 1).
/// * `Err(Sb1Error::DomainViolation)` if `distance_ratio` is negative.
pub fn orbital_period(distance_ratio: f64) -> Result<f64, Sb1Error> {
    if distance_ratio < 0.0 {
        tracing::debug!(distance_ratio, "rejecting orbital period for negative distance ratio");
        return Err(Sb1Error::DomainViolation {
            operation: "orbital_period",
            message: format!("distance ratio {} is negative; sqrt(a^3) has no real value", distance_ratio),
        });
    }

    let cubed = distance_ratio.powi(3);
    Ok(cubed.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_energy_level_squares() {
        assert_eq!(energy_level(3), 9);
        assert_eq!(energy_level(-2), 4);
        assert_eq!(energy_level(0), 0);
    }

    #[test]
    fn test_energy_level_extremes_do_not_overflow() {
        assert_eq!(energy_level(i64::MIN), 1u128 << 126);
        assert_eq!(energy_level(i64::MAX), (i64::MAX as u128) * (i64::MAX as u128));
    }

    #[test]
    fn test_packing_efficiency_negative_zero_rejected() {
        let ratio = ConversionRatio::new();
        assert!(packing_efficiency(-0.0, 5.0, &ratio).is_err());
    }

    #[test]
    fn test_packing_efficiency_nan_propagates() -> Result<(), Sb1Error> {
        let ratio = ConversionRatio::new();
        assert!(packing_efficiency(f64::NAN, 5.0, &ratio)?.is_nan());
        assert!(packing_efficiency(10.0, f64::NAN, &ratio)?.is_nan());
        Ok(())
    }

    #[test]
    fn test_orbital_period_known_values() -> Result<(), Sb1Error> {
        assert_eq!(orbital_period(1.0)?, 1.0);
        assert_eq!(orbital_period(0.0)?, 0.0);
        assert_eq!(orbital_period(4.0)?, 8.0);
        assert!((orbital_period(8.0)? - 512f64.sqrt()).abs() < TEST_TOLERANCE);
        Ok(())
    }

    #[test]
    fn test_orbital_period_negative_rejected() {
        match orbital_period(-0.5) {
            Err(Sb1Error::DomainViolation { operation, .. }) => assert_eq!(operation, "orbital_period"),
            other => panic!("expected domain violation, got {:?}", other),
        }
    }

    #[test]
    fn test_orbital_period_nan_propagates() -> Result<(), Sb1Error> {
        assert!(orbital_period(f64::NAN)?.is_nan());
        Ok(())
    }
}
