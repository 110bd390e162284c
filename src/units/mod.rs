// src/units/mod.rs

//! Volume conversion between standard cubic units and normalized (Hahn) units.
//!
//! Both directions are plain multiplications by the conversion ratio. No
//! validation happens here: zero maps to zero, negative volumes stay negative
//! and NaN propagates.

use crate::core::ConversionRatio;

/// Converts a volume in standard cubic units into Hahn volumetric units.
///
/// # Arguments
/// * `standard_volume` - Volume in cubic units (m³, ft³, ...).
/// * `ratio` - The cube-to-Hahn ratio to scale by.
pub fn convert_to_normalized(standard_volume: f64, ratio: &ConversionRatio) -> f64 {
    standard_volume * ratio.value()
}

/// Converts a Hahn volume back into standard cubic units.
pub fn convert_from_normalized(normalized_volume: f64, ratio: &ConversionRatio) -> f64 {
    normalized_volume / ratio.value()
}
