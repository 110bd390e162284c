// src/diagnostics/mod.rs

//! Self-diagnostic: evaluates the engine at two reference points and renders
//! them for a human reader.
use crate::core::Sb1Error;
use crate::engine::SphereBaseOne;
use std::fmt;

/// Quantum index probed by the diagnostic.
pub const DIAGNOSTIC_QUANTUM_INDEX: i64 = 3;
/// Container volume (cubic units) for the packing check.
pub const DIAGNOSTIC_CONTAINER_VOLUME: f64 = 1000.0;
/// Sphere count for the packing check; targets the ~74% close-packing density.
pub const DIAGNOSTIC_SPHERE_COUNT: f64 = 740.0;

/// Values gathered by one diagnostic run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticReport {
    energy_level: u128,
    packing_efficiency: f64,
}

impl DiagnosticReport {
    /// Runs the reference calculations against `engine`.
    pub fn collect(engine: &SphereBaseOne) -> Result<Self, Sb1Error> {
        Ok(Self {
            energy_level: engine.energy_level(DIAGNOSTIC_QUANTUM_INDEX),
            packing_efficiency: engine.packing_efficiency(DIAGNOSTIC_CONTAINER_VOLUME, DIAGNOSTIC_SPHERE_COUNT)?,
        })
    }

    /// Energy factor of the probed quantum index.
    pub fn energy_level(&self) -> u128 {
        self.energy_level
    }

    /// Packing ratio of the reference container.
    pub fn packing_efficiency(&self) -> f64 {
        self.packing_efficiency
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- HAHN PROTOCOL DIAGNOSTIC ---")?;
        writeln!(f, "Quantum Integer State (n={}): {}", DIAGNOSTIC_QUANTUM_INDEX, self.energy_level)?;
        write!(f, "Packing Logic Check (Target ~74%): {:.4}", self.packing_efficiency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_values() -> Result<(), Sb1Error> {
        let report = DiagnosticReport::collect(&SphereBaseOne::new())?;
        assert_eq!(report.energy_level(), 9);
        assert!((report.packing_efficiency() - 0.3874).abs() < 1e-3);
        Ok(())
    }

    #[test]
    fn test_report_display() -> Result<(), Sb1Error> {
        let report = DiagnosticReport::collect(&SphereBaseOne::new())?;
        let rendered = report.to_string();
        assert!(rendered.starts_with("--- HAHN PROTOCOL DIAGNOSTIC ---"));
        assert!(rendered.contains("Quantum Integer State (n=3): 9"));
        assert!(rendered.contains("Packing Logic Check (Target ~74%): 0.3875"));
        Ok(())
    }
}
