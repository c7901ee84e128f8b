//! # Site Classification & Site Coefficients
//!
//! Soil site classes and the short-period (Fa) and 1-second (Fv) site
//! amplification coefficients per ASCE 7-10 Tables 11.4-1 and 11.4-2.
//!
//! ## Interpolation Policy
//!
//! Coefficients are linearly interpolated between tabulated spectral values.
//! Queries below the first grid point or above the last return the end
//! value (clamp, never extrapolate).
//!
//! | Site class | Description                      |
//! |------------|----------------------------------|
//! | SA         | Hard rock                        |
//! | SB         | Rock                             |
//! | SC         | Very dense soil and soft rock    |
//! | SD         | Stiff soil                       |
//! | SE         | Soft clay soil                   |
//! | SF         | Requires site response analysis  |
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::site::{site_coefficient_fa, SiteClass};
//!
//! // Ss = 0.8 on stiff soil falls between the 0.75 and 1.0 columns
//! let fa = site_coefficient_fa(0.8, SiteClass::SD);
//! assert!((fa - 1.18).abs() < 1e-9);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Tabulated Ss values (g) for the Fa table columns
pub const SS_GRID: [f64; 5] = [0.25, 0.5, 0.75, 1.0, 1.25];

/// Tabulated S1 values (g) for the Fv table columns
pub const S1_GRID: [f64; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];

/// Fa rows in [`SiteClass::ALL`] order, aligned with [`SS_GRID`]
pub const FA_TABLE: [[f64; 5]; 6] = [
    [0.8, 0.8, 0.8, 0.8, 0.8], // SA
    [1.0, 1.0, 1.0, 1.0, 1.0], // SB
    [1.2, 1.2, 1.1, 1.0, 1.0], // SC
    [1.6, 1.4, 1.2, 1.1, 1.0], // SD
    [2.5, 1.7, 1.2, 0.9, 0.9], // SE
    [0.0, 0.0, 0.0, 0.0, 0.0], // SF
];

/// Fv rows in [`SiteClass::ALL`] order, aligned with [`S1_GRID`]
pub const FV_TABLE: [[f64; 5]; 6] = [
    [0.8, 0.8, 0.8, 0.8, 0.8], // SA
    [1.0, 1.0, 1.0, 1.0, 1.0], // SB
    [1.7, 1.6, 1.5, 1.4, 1.3], // SC
    [2.4, 2.0, 1.8, 1.6, 1.5], // SD
    [3.5, 3.2, 2.8, 2.4, 2.4], // SE
    [0.0, 0.0, 0.0, 0.0, 0.0], // SF
];

/// Soil site class per ASCE 7-10 Chapter 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SiteClass {
    /// Hard rock
    SA,
    /// Rock
    SB,
    /// Very dense soil and soft rock
    SC,
    /// Stiff soil (default when soil properties are unknown)
    #[default]
    SD,
    /// Soft clay soil
    SE,
    /// Soils requiring site response analysis (liquefiable, sensitive clays, peat)
    SF,
}

impl SiteClass {
    /// All site classes, hard rock to soft soil
    pub const ALL: [SiteClass; 6] = [
        SiteClass::SA,
        SiteClass::SB,
        SiteClass::SC,
        SiteClass::SD,
        SiteClass::SE,
        SiteClass::SF,
    ];

    /// Two-letter code ("SA" ... "SF")
    pub fn code(&self) -> &'static str {
        match self {
            SiteClass::SA => "SA",
            SiteClass::SB => "SB",
            SiteClass::SC => "SC",
            SiteClass::SD => "SD",
            SiteClass::SE => "SE",
            SiteClass::SF => "SF",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            SiteClass::SA => "Hard rock",
            SiteClass::SB => "Rock",
            SiteClass::SC => "Very dense soil and soft rock",
            SiteClass::SD => "Stiff soil",
            SiteClass::SE => "Soft clay soil",
            SiteClass::SF => "Site-specific response analysis required",
        }
    }

    /// SF has no generic table values; its hazard must come from a site study.
    pub fn is_site_specific(&self) -> bool {
        matches!(self, SiteClass::SF)
    }

    fn row(&self) -> usize {
        match self {
            SiteClass::SA => 0,
            SiteClass::SB => 1,
            SiteClass::SC => 2,
            SiteClass::SD => 3,
            SiteClass::SE => 4,
            SiteClass::SF => 5,
        }
    }

    /// Fa row for this class
    pub fn fa_row(&self) -> &'static [f64; 5] {
        &FA_TABLE[self.row()]
    }

    /// Fv row for this class
    pub fn fv_row(&self) -> &'static [f64; 5] {
        &FV_TABLE[self.row()]
    }
}

impl std::fmt::Display for SiteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SiteClass {
    type Err = CalcError;

    /// Accepts "SD", "sd", or the bare letter "D".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let letter = normalized.strip_prefix('S').filter(|rest| !rest.is_empty()).unwrap_or(normalized.as_str());
        match letter {
            "A" => Ok(SiteClass::SA),
            "B" => Ok(SiteClass::SB),
            "C" => Ok(SiteClass::SC),
            "D" => Ok(SiteClass::SD),
            "E" => Ok(SiteClass::SE),
            "F" => Ok(SiteClass::SF),
            _ => Err(CalcError::unknown_site_class(s)),
        }
    }
}

/// Soil investigation data consumed by the seismic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SoilData {
    /// Site class from the geotechnical report
    pub site_class: SiteClass,
}

impl SoilData {
    pub fn new(site_class: SiteClass) -> Self {
        Self { site_class }
    }
}

/// Clamped piecewise-linear interpolation over an ascending grid.
///
/// Returns the first value for `x <= grid[0]`, the last value for
/// `x >= grid[n-1]`, and `y0 + (x - x0) / (x1 - x0) * (y1 - y0)` in between.
/// An empty table yields 0.0.
pub fn interpolate(x: f64, grid: &[f64], values: &[f64]) -> f64 {
    let n = grid.len().min(values.len());
    if n == 0 {
        return 0.0;
    }
    if x <= grid[0] {
        return values[0];
    }
    if x >= grid[n - 1] {
        return values[n - 1];
    }

    for i in 0..n - 1 {
        let (x0, x1) = (grid[i], grid[i + 1]);
        if x >= x0 && x <= x1 {
            let (y0, y1) = (values[i], values[i + 1]);
            return y0 + (x - x0) / (x1 - x0) * (y1 - y0);
        }
    }

    // Unreachable for an ascending grid
    values[n - 1]
}

/// Short-period site coefficient Fa (ASCE 7-10 Table 11.4-1)
pub fn site_coefficient_fa(ss: f64, site_class: SiteClass) -> f64 {
    interpolate(ss, &SS_GRID, site_class.fa_row())
}

/// Long-period site coefficient Fv (ASCE 7-10 Table 11.4-2)
pub fn site_coefficient_fv(s1: f64, site_class: SiteClass) -> f64 {
    interpolate(s1, &S1_GRID, site_class.fv_row())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fa_clamps_below_grid() {
        for class in SiteClass::ALL {
            for ss in [0.0, 0.1, 0.25] {
                assert_eq!(site_coefficient_fa(ss, class), class.fa_row()[0]);
            }
        }
    }

    #[test]
    fn test_fa_clamps_above_grid() {
        for class in SiteClass::ALL {
            for ss in [1.25, 1.5, 3.0] {
                assert_eq!(site_coefficient_fa(ss, class), class.fa_row()[4]);
            }
        }
    }

    #[test]
    fn test_fv_clamps_at_ends() {
        for class in SiteClass::ALL {
            assert_eq!(site_coefficient_fv(0.05, class), class.fv_row()[0]);
            assert_eq!(site_coefficient_fv(0.6, class), class.fv_row()[4]);
        }
    }

    #[test]
    fn test_fa_interpolates_within_interval() {
        // SD: 1.2 at 0.75, 1.1 at 1.0
        assert_relative_eq!(site_coefficient_fa(0.8, SiteClass::SD), 1.18, epsilon = 1e-12);
        // SE: 2.5 at 0.25, 1.7 at 0.5
        assert_relative_eq!(site_coefficient_fa(0.375, SiteClass::SE), 2.1, epsilon = 1e-12);
    }

    #[test]
    fn test_fv_exact_grid_points() {
        assert_relative_eq!(site_coefficient_fv(0.3, SiteClass::SD), 1.8, epsilon = 1e-12);
        assert_relative_eq!(site_coefficient_fv(0.2, SiteClass::SC), 1.6, epsilon = 1e-12);
        assert_relative_eq!(site_coefficient_fv(0.45, SiteClass::SE), 2.4, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_degenerate_tables() {
        assert_eq!(interpolate(1.0, &[], &[]), 0.0);
        assert_eq!(interpolate(1.0, &[0.5], &[2.0]), 2.0);
    }

    #[test]
    fn test_site_class_parsing() {
        assert_eq!("SD".parse::<SiteClass>().unwrap(), SiteClass::SD);
        assert_eq!(" se ".parse::<SiteClass>().unwrap(), SiteClass::SE);
        assert_eq!("A".parse::<SiteClass>().unwrap(), SiteClass::SA);
        assert_eq!("F".parse::<SiteClass>().unwrap(), SiteClass::SF);
        assert!("SX".parse::<SiteClass>().is_err());
        assert!("".parse::<SiteClass>().is_err());
    }

    #[test]
    fn test_site_class_serialization() {
        let json = serde_json::to_string(&SiteClass::SD).unwrap();
        assert_eq!(json, "\"SD\"");
        let soil: SoilData = serde_json::from_str(r#"{"site_class":"SE"}"#).unwrap();
        assert_eq!(soil.site_class, SiteClass::SE);
    }

    #[test]
    fn test_only_sf_is_site_specific() {
        let specific: Vec<_> = SiteClass::ALL.iter().filter(|c| c.is_site_specific()).collect();
        assert_eq!(specific, vec![&SiteClass::SF]);
        assert!(SiteClass::SF.fa_row().iter().all(|&v| v == 0.0));
    }
}
