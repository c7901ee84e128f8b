//! # Fundamental Period
//!
//! Approximate fundamental period per ASCE 7-10 Section 12.8.2:
//!
//! ```text
//! Ta   = Ct · hn^x
//! Tmax = Cu · Ta
//! ```
//!
//! Ct is selected by concrete strength, x = 0.9, and Cu steps down as SD1
//! increases (Table 12.8-1).

use serde::{Deserialize, Serialize};

use super::parameters::SeismicParameters;
use crate::building::{Geometry, MaterialProperties};

/// Concrete strength (MPa) at or above which the lower Ct applies
pub const FC_THRESHOLD_MPA: f64 = 25.0;

/// Ct for f'c ≥ 25 MPa (concrete moment frame)
pub const CT_HIGH_STRENGTH: f64 = 0.0466;

/// Ct for f'c < 25 MPa
pub const CT_LOW_STRENGTH: f64 = 0.0488;

/// Period exponent x
pub const PERIOD_EXPONENT: f64 = 0.9;

/// Approximate period and its code upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundamentalPeriod {
    /// Structural height hn (m)
    pub hn: f64,
    /// Period coefficient Ct
    pub ct: f64,
    /// Period exponent x
    pub x: f64,
    /// Upper-limit coefficient Cu
    pub cu: f64,
    /// Approximate fundamental period Ta (s)
    pub ta: f64,
    /// Upper bound Cu·Ta (s)
    pub tmax: f64,
}

/// Ct from concrete compressive strength
pub fn period_coefficient(fc_mpa: f64) -> f64 {
    if fc_mpa >= FC_THRESHOLD_MPA {
        CT_HIGH_STRENGTH
    } else {
        CT_LOW_STRENGTH
    }
}

/// Cu per ASCE 7-10 Table 12.8-1 (each tier inclusive of its lower SD1 bound)
pub fn upper_limit_coefficient(sd1: f64) -> f64 {
    if sd1 >= 0.4 {
        1.4
    } else if sd1 >= 0.3 {
        1.5
    } else if sd1 >= 0.2 {
        1.6
    } else {
        1.7
    }
}

/// Estimate Ta and Tmax for the building.
///
/// Inputs are assumed validated; a positive height gives a positive Ta.
pub fn estimate_period(
    geometry: &Geometry,
    materials: &MaterialProperties,
    params: &SeismicParameters,
) -> FundamentalPeriod {
    let hn = geometry.total_height_m();
    let ct = period_coefficient(materials.fc_mpa);
    let x = PERIOD_EXPONENT;
    let ta = ct * hn.powf(x);
    let cu = upper_limit_coefficient(params.sd1);
    let tmax = cu * ta;

    log::debug!("hn={:.2}m Ct={} Ta={:.3}s Cu={} Tmax={:.3}s", hn, ct, ta, cu, tmax);

    FundamentalPeriod { hn, ct, x, cu, ta, tmax }
}
