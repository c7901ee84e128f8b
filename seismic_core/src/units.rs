//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by the seismic engine. These are
//! plain f64 newtypes with transparent serialization, so JSON stays as bare
//! numbers.
//!
//! ## Conventions
//!
//! - Area loads: kilograms per square meter (kg/m²) as entered, converted to
//!   kilonewtons per square meter (kN/m²) with [`GRAVITY_FACTOR`]
//! - Force: kilonewtons (kN)
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::units::{KgPerSqM, KnPerSqM};
//!
//! let dead = KgPerSqM(500.0);
//! let dead_kn: KnPerSqM = dead.into();
//! assert!((dead_kn.0 - 4.905).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Mass-per-area to force-per-area conversion: g / 1000 (kg → kN).
pub const GRAVITY_FACTOR: f64 = 9.81 / 1000.0;

// ============================================================================
// Area Loads
// ============================================================================

/// Area mass intensity in kg/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerSqM(pub f64);

/// Area force intensity in kN/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerSqM(pub f64);

impl From<KgPerSqM> for KnPerSqM {
    fn from(mass: KgPerSqM) -> Self {
        KnPerSqM(mass.0 * GRAVITY_FACTOR)
    }
}

impl Add for KgPerSqM {
    type Output = KgPerSqM;
    fn add(self, rhs: KgPerSqM) -> KgPerSqM {
        KgPerSqM(self.0 + rhs.0)
    }
}

impl Mul<f64> for KgPerSqM {
    type Output = KgPerSqM;
    fn mul(self, rhs: f64) -> KgPerSqM {
        KgPerSqM(self.0 * rhs)
    }
}

// ============================================================================
// Force
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl Add for KiloNewtons {
    type Output = KiloNewtons;
    fn add(self, rhs: KiloNewtons) -> KiloNewtons {
        KiloNewtons(self.0 + rhs.0)
    }
}

/// Intensity times tributary area gives force.
impl Mul<f64> for KnPerSqM {
    type Output = KiloNewtons;
    fn mul(self, area_m2: f64) -> KiloNewtons {
        KiloNewtons(self.0 * area_m2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mass_to_force_conversion() {
        let kn: KnPerSqM = KgPerSqM(1000.0).into();
        assert_relative_eq!(kn.0, 9.81, epsilon = 1e-12);
    }

    #[test]
    fn test_intensity_times_area() {
        let force = KnPerSqM(2.0) * 300.0;
        assert_eq!(force, KiloNewtons(600.0));
        assert_eq!(force + KiloNewtons(1.0), KiloNewtons(601.0));
    }

    #[test]
    fn test_mass_arithmetic() {
        let total = KgPerSqM(5.5) + KgPerSqM(4.0) * 0.25;
        assert_relative_eq!(total.0, 6.5);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&KgPerSqM(5.5)).unwrap();
        assert_eq!(json, "5.5");
        let parsed: KiloNewtons = serde_json::from_str("12.25").unwrap();
        assert_eq!(parsed, KiloNewtons(12.25));
    }
}
