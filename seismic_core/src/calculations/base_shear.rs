//! # Equivalent Lateral Force Base Shear
//!
//! Seismic base shear per ASCE 7-10 Section 12.8.1:
//!
//! ```text
//! V  = Cs · W
//! Cs = SDS / (R/Ie)
//!
//! Cs ≤ SD1 / (T·R/Ie)          for T ≤ TL
//! Cs ≤ SD1·TL / (T²·R/Ie)      for T > TL
//! Cs ≥ max(0.044·SDS·Ie, 0.01)
//! ```
//!
//! The lower bound is applied after the upper bound, so it always governs
//! when the two conflict.

use serde::{Deserialize, Serialize};

use super::parameters::SeismicParameters;
use crate::building::{Geometry, Loads};
use crate::units::KiloNewtons;

/// Coefficient on SDS·Ie for the minimum Cs (Eq. 12.8-5)
pub const CS_MIN_SDS_FACTOR: f64 = 0.044;

/// Absolute minimum Cs
pub const CS_MIN_ABSOLUTE: f64 = 0.01;

/// Base shear result.
///
/// ## JSON Example
///
/// ```json
/// {
///   "v": 4.52,
///   "cs": 0.0787,
///   "cs_initial": 0.0787,
///   "cs_max": 0.1163,
///   "cs_min": 0.0277,
///   "seismic_weight": 57.39
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseShearResult {
    /// Base shear V (kN)
    pub v: f64,
    /// Governing seismic response coefficient Cs
    pub cs: f64,
    /// Unbounded Cs = SDS/(R/Ie)
    pub cs_initial: f64,
    /// Upper bound on Cs (infinite when T = 0)
    pub cs_max: f64,
    /// Lower bound on Cs
    pub cs_min: f64,
    /// Effective seismic weight W (kN)
    pub seismic_weight: f64,
}

impl BaseShearResult {
    /// Which bound, if any, set Cs
    pub fn governing_limit(&self) -> &'static str {
        if self.cs == self.cs_min && self.cs_min > self.cs_initial.min(self.cs_max) {
            "Minimum Cs"
        } else if self.cs == self.cs_max && self.cs_max < self.cs_initial {
            "Maximum Cs"
        } else {
            "SDS/(R/Ie)"
        }
    }
}

/// Effective seismic weight W = A · n · (D + partitions + 0.25·L) · g/1000.
pub fn seismic_weight(geometry: &Geometry, loads: &Loads) -> KiloNewtons {
    let per_floor = loads.seismic_intensity() * geometry.floor_area_m2();
    KiloNewtons(per_floor.0 * geometry.number_of_floors as f64)
}

/// Upper bound on Cs for period `ta`.
///
/// A non-positive period leaves Cs unbounded (the limit as T → 0⁺).
pub fn maximum_coefficient(params: &SeismicParameters, ta: f64) -> f64 {
    if ta <= 0.0 {
        return f64::INFINITY;
    }
    let ratio = params.response_ratio();
    if ta <= params.tl {
        params.sd1 / (ta * ratio)
    } else {
        params.sd1 * params.tl / (ta * ta * ratio)
    }
}

/// Lower bound on Cs
pub fn minimum_coefficient(params: &SeismicParameters) -> f64 {
    (CS_MIN_SDS_FACTOR * params.sds * params.importance).max(CS_MIN_ABSOLUTE)
}

/// Compute the equivalent static base shear.
pub fn calculate_base_shear(
    params: &SeismicParameters,
    geometry: &Geometry,
    loads: &Loads,
    ta: f64,
) -> BaseShearResult {
    let weight = seismic_weight(geometry, loads).0;

    let cs_initial = params.sds / params.response_ratio();
    let cs_max = maximum_coefficient(params, ta);
    let cs_min = minimum_coefficient(params);

    let cs = cs_initial.min(cs_max).max(cs_min);
    let v = cs * weight;

    log::debug!(
        "Cs: initial={:.4} max={:.4} min={:.4} -> {:.4}; W={:.1} kN V={:.2} kN",
        cs_initial,
        cs_max,
        cs_min,
        cs,
        weight,
        v
    );

    BaseShearResult {
        v,
        cs,
        cs_initial,
        cs_max,
        cs_min,
        seismic_weight: weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::parameters::SeismicInput;
    use crate::site::SiteClass;
    use approx::assert_relative_eq;

    fn params_with(sds: f64, sd1: f64) -> SeismicParameters {
        let mut params = SeismicParameters::compute(&SeismicInput::new(0.8, 0.3, SiteClass::SD)).unwrap();
        params.sds = sds;
        params.sd1 = sd1;
        params
    }

    fn geometry() -> Geometry {
        Geometry::new(20.0, 15.0, 3, 3.5)
    }

    fn loads() -> Loads {
        Loads::new(5.5, 0.0, 4.0)
    }

    #[test]
    fn test_seismic_weight() {
        // 300 m² × 3 floors × (5.5 + 0.25·4.0) × 0.00981
        let w = seismic_weight(&geometry(), &loads());
        assert_relative_eq!(w.0, 300.0 * 3.0 * 6.5 * 0.00981, epsilon = 1e-9);
    }

    #[test]
    fn test_partitions_count_as_dead_load() {
        let with_partitions = seismic_weight(&geometry(), &Loads::new(5.5, 1.0, 4.0));
        let folded = seismic_weight(&geometry(), &Loads::new(6.5, 0.0, 4.0));
        assert_relative_eq!(with_partitions.0, folded.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cs_capped_by_maximum() {
        // Cs = 1.0/8 = 0.125; CsMax = 0.6/(1.0·8) = 0.075; CsMin = 0.044
        let params = params_with(1.0, 0.6);
        let result = calculate_base_shear(&params, &geometry(), &loads(), 1.0);
        assert_relative_eq!(result.cs_initial, 0.125);
        assert_relative_eq!(result.cs, result.cs_max);
        assert_relative_eq!(result.cs, 0.075);
        assert_eq!(result.governing_limit(), "Maximum Cs");
    }

    #[test]
    fn test_cs_raised_to_minimum_after_cap() {
        // CsMax = 0.1/(2·8) = 0.00625 is below CsMin = max(0.044·0.5, 0.01) = 0.022
        let params = params_with(0.5, 0.1);
        let result = calculate_base_shear(&params, &geometry(), &loads(), 2.0);
        assert_relative_eq!(result.cs_max, 0.00625);
        assert_relative_eq!(result.cs, result.cs_min);
        assert_relative_eq!(result.cs, 0.022);
        assert_eq!(result.governing_limit(), "Minimum Cs");
    }

    #[test]
    fn test_absolute_minimum() {
        // 0.044·0.1 = 0.0044 < 0.01
        let params = params_with(0.1, 0.05);
        assert_relative_eq!(minimum_coefficient(&params), 0.01);
    }

    #[test]
    fn test_unbounded_cs_governs() {
        let params = params_with(0.6, 0.36);
        let result = calculate_base_shear(&params, &geometry(), &loads(), 0.4);
        assert_relative_eq!(result.cs, 0.6 / 8.0);
        assert_eq!(result.governing_limit(), "SDS/(R/Ie)");
        assert_relative_eq!(result.v, result.cs * result.seismic_weight);
    }

    #[test]
    fn test_long_period_branch_of_maximum() {
        let params = params_with(1.0, 0.6);
        // At T = TL both expressions agree
        let at_tl = maximum_coefficient(&params, 12.0);
        assert_relative_eq!(at_tl, 0.6 / (12.0 * 8.0));
        // Beyond TL: SD1·TL/(T²·R/Ie)
        assert_relative_eq!(maximum_coefficient(&params, 15.0), 0.6 * 12.0 / (225.0 * 8.0));
    }

    #[test]
    fn test_zero_period_leaves_cs_unbounded() {
        let params = params_with(1.0, 0.6);
        assert!(maximum_coefficient(&params, 0.0).is_infinite());
        let result = calculate_base_shear(&params, &geometry(), &loads(), 0.0);
        assert!(result.v.is_finite());
        assert_relative_eq!(result.cs, 0.125);
    }

    #[test]
    fn test_importance_scales_cs() {
        let mut params = params_with(0.6, 0.36);
        params.importance = 1.5;
        let result = calculate_base_shear(&params, &geometry(), &loads(), 0.4);
        assert_relative_eq!(result.cs_initial, 0.6 / (8.0 / 1.5));
    }
}
