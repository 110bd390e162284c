//! Self-diagnostic for the Sphere-Base-One engine.
//! Prints the s-state energy factor for n = 3 and the packing ratio of the
//! reference container. Set `RUST_LOG=hahn_sb1=trace` to see engine events.

use hahn_sb1::{DiagnosticReport, Sb1Error, SphereBaseOne, check_packing_plausibility};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Sb1Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sb1 = SphereBaseOne::new();
    println!("Cube-to-Hahn ratio: {:.10}", sb1.ratio());

    match DiagnosticReport::collect(&sb1) {
        Ok(report) => {
            println!("{}", report);
            if let Err(e) = check_packing_plausibility(report.packing_efficiency(), None) {
                eprintln!("Warning: {}", e);
            }
        }
        Err(e) => {
            eprintln!("\n--- Diagnostic Failed ---");
            eprintln!("Error: {}", e);
            return Err(e);
        }
    }

    // Out-of-domain input is reported, not turned into NaN
    match sb1.orbital_period(-1.0) {
        Ok(period) => println!("Orbital period (a = -1): {}", period),
        Err(e) => println!("Orbital period (a = -1): rejected ({})", e),
    }

    Ok(())
}
