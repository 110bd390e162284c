// src/lib.rs

//! `hahn_sb1` - Sphere-Base-One scalar physics
//!
//! This library works in a normalized geometric unit system in which a sphere
//! of diameter 1 has volume exactly 1 (the "Hahn unit"). The `π/6` factor of the
//! standard sphere-volume formula is folded into a single conversion ratio,
//! `6 / π`, computed once per engine, so call sites never handle `π` directly.

pub mod core;
pub mod units;
pub mod calculations;
pub mod engine;
pub mod validation;
pub mod diagnostics;

// Re-export the most common types for easier top-level use
pub use crate::core::{ConversionRatio, Sb1Error};
pub use engine::SphereBaseOne;
pub use diagnostics::DiagnosticReport;
pub use validation::{
    approx_eq,
    check_packing_plausibility,
    check_physical_volume,
};

// Example 1: Engine construction and the four calculations
/// ```
/// use hahn_sb1::{SphereBaseOne, Sb1Error, approx_eq};
///
/// # fn main() -> Result<(), Sb1Error> {
/// let sb1 = SphereBaseOne::new();
///
/// // s-state energy factor is a plain integer square
/// assert_eq!(sb1.energy_level(3), 9);
///
/// // One cubic unit holds 6/π Hahn units
/// assert!(approx_eq(sb1.convert_to_normalized(1.0), 1.909_859_317_1, None));
///
/// // 740 unit spheres in a 1000 cubic-unit container
/// let density = sb1.packing_efficiency(1000.0, 740.0)?;
/// println!("Packing: {:.4}", density);
///
/// // Kepler's third law with Earth = 1
/// assert_eq!(sb1.orbital_period(1.0)?, 1.0);
/// assert!(approx_eq(sb1.orbital_period(8.0)?, 512f64.sqrt(), None));
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Strict domain handling and opt-in plausibility checks
/// ```
/// use hahn_sb1::{SphereBaseOne, Sb1Error, check_packing_plausibility};
///
/// let sb1 = SphereBaseOne::new();
///
/// // Out-of-domain inputs are rejected, not turned into inf/NaN
/// assert!(matches!(
///     sb1.orbital_period(-1.0),
///     Err(Sb1Error::DomainViolation { operation: "orbital_period", .. })
/// ));
/// assert!(sb1.packing_efficiency(0.0, 10.0).is_err());
///
/// // Implausible but computable ratios are returned; the caller decides
/// let overpacked = sb1.packing_efficiency(1.0, 5.0).unwrap();
/// assert!(overpacked > 1.0);
/// assert!(check_packing_plausibility(overpacked, None).is_err());
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
