//! Error handling logic

use std::fmt;

/// Errors raised by Sphere-Base-One calculations.
///
/// The engine only ever produces `DomainViolation`. `ModelingInconsistency`
/// comes from the opt-in checks in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sb1Error {
    /// Input lies outside the mathematical domain of the operation
    /// (zero container volume, negative distance ratio).
    DomainViolation {
        /// Name of the rejecting operation
        operation: &'static str,
        /// DomainViolation failure message
        message: String,
    },

    /// Input is numerically valid but physically implausible,
    /// e.g. a packing ratio above 1.0 or a negative volume.
    ModelingInconsistency {
        /// ModelingInconsistency failure message
        message: String,
    },
}

impl fmt::Display for Sb1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sb1Error::DomainViolation { operation, message } => write!(f, "Domain Violation ({}): {}", operation, message),
            Sb1Error::ModelingInconsistency { message } => write!(f, "Modeling Inconsistency: {}", message),
        }
    }
}

impl std::error::Error for Sb1Error {}
