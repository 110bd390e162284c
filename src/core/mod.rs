// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod ratio;

pub use error::Sb1Error;
pub use ratio::ConversionRatio;

pub mod constants;
pub use constants::sb1_constants::{HAHN_SPHERE_VOLUME, PI, REFERENCE_ORBIT_RATIO, STANDARD_SPHERE_VOLUME};
