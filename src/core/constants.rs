//! Geometric constants of the Sphere-Base-One unit system.

/// Constants the normalized sphere unit is built from
pub mod sb1_constants {
    /// Used to derive the standard sphere volume.
    pub const PI: f64 = std::f64::consts::PI;
    /// Volume of a diameter-1 sphere in standard cubic units (`π/6`).
    pub const STANDARD_SPHERE_VOLUME: f64 = PI / 6.0;
    /// Volume of the same sphere in normalized units. Exactly one by definition.
    pub const HAHN_SPHERE_VOLUME: f64 = 1.0;
    /// Semi-major-axis ratio of the reference orbit (Earth = 1).
    pub const REFERENCE_ORBIT_RATIO: f64 = 1.0;
}
