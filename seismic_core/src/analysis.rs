//! # Seismic Analysis Pipeline
//!
//! Validates the input records and runs the full equivalent lateral force
//! procedure: site parameters → spectrum and period → base shear → floor
//! forces → story shears.
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::analysis::{analyze, SeismicAnalysisInput};
//! use seismic_core::building::{Geometry, Loads, MaterialProperties};
//! use seismic_core::calculations::SeismicInput;
//! use seismic_core::site::SiteClass;
//!
//! let input = SeismicAnalysisInput {
//!     seismic: SeismicInput::new(0.8, 0.3, SiteClass::SD),
//!     soil: None,
//!     geometry: Geometry::new(20.0, 15.0, 3, 3.5),
//!     loads: Loads::new(5.5, 0.0, 4.0),
//!     materials: MaterialProperties::new(28.0),
//! };
//!
//! let analysis = analyze(&input).unwrap();
//! let total: f64 = analysis.floor_forces.iter().map(|f| f.force).sum();
//! assert!((total - analysis.base_shear.v).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::building::{Geometry, Loads, MaterialProperties};
use crate::calculations::{
    asce_ref, calculate_base_shear, distribute, estimate_period, story_shears, BaseShearResult,
    FloorForce, FundamentalPeriod, ResponseSpectrum, ResponseSpectrumPoint, SeismicInput,
    SeismicParameters, StoryShear,
};
use crate::errors::CalcResult;
use crate::site::{SiteClass, SoilData};

/// Everything the pipeline needs for one building.
///
/// ## JSON Example
///
/// ```json
/// {
///   "seismic": { "ss": 0.8, "s1": 0.3, "site_class": "SD", "r": 8.0, "importance": 1.0 },
///   "soil": { "site_class": "SD" },
///   "geometry": { "length_m": 20.0, "width_m": 15.0, "number_of_floors": 3, "height_per_floor_m": 3.5 },
///   "loads": { "dead_load": 5.5, "partition_load": 0.0, "live_load": 4.0 },
///   "materials": { "fc_mpa": 28.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeismicAnalysisInput {
    /// Hazard and system factors
    pub seismic: SeismicInput,

    /// Soil data; when present its site class overrides `seismic.site_class`
    #[serde(default)]
    pub soil: Option<SoilData>,

    pub geometry: Geometry,

    pub loads: Loads,

    #[serde(default)]
    pub materials: MaterialProperties,
}

impl SeismicAnalysisInput {
    /// Site class actually used by the analysis
    pub fn effective_site_class(&self) -> SiteClass {
        self.soil.map(|s| s.site_class).unwrap_or(self.seismic.site_class)
    }

    /// Validate every record before any calculation runs.
    pub fn validate(&self) -> CalcResult<()> {
        self.seismic.validate()?;
        self.geometry.validate()?;
        self.loads.validate()?;
        self.materials.validate()?;
        Ok(())
    }
}

/// Complete output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicAnalysis {
    pub parameters: SeismicParameters,
    pub spectrum: Vec<ResponseSpectrumPoint>,
    pub period: FundamentalPeriod,
    pub base_shear: BaseShearResult,
    pub floor_forces: Vec<FloorForce>,
    pub story_shears: Vec<StoryShear>,
}

impl SeismicAnalysis {
    /// Base overturning moment (kN·m)
    pub fn base_overturning_moment(&self) -> f64 {
        self.story_shears
            .first()
            .map(|s| s.overturning_moment)
            .unwrap_or(0.0)
    }

    /// Code sections applied, in pipeline order, as (step, reference) pairs
    pub fn references(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("Site coefficients", asce_ref::SITE_COEFFICIENTS),
            ("Design spectral accelerations", asce_ref::DESIGN_PARAMETERS),
            ("Design response spectrum", asce_ref::RESPONSE_SPECTRUM),
            ("Approximate period", asce_ref::APPROXIMATE_PERIOD),
            ("Period upper limit", asce_ref::PERIOD_UPPER_LIMIT),
            ("Seismic weight", asce_ref::SEISMIC_WEIGHT),
            ("Seismic response coefficient", asce_ref::RESPONSE_COEFFICIENT),
            ("Vertical distribution", asce_ref::VERTICAL_DISTRIBUTION),
            ("Story shear", asce_ref::STORY_SHEAR),
            ("Overturning", asce_ref::OVERTURNING),
        ]
    }
}

/// Run the full equivalent lateral force analysis.
///
/// # Returns
///
/// * `Ok(SeismicAnalysis)` - All intermediate and final results
/// * `Err(CalcError)` - If any input record is malformed
pub fn analyze(input: &SeismicAnalysisInput) -> CalcResult<SeismicAnalysis> {
    input.validate()?;

    let seismic = SeismicInput {
        site_class: input.effective_site_class(),
        ..input.seismic
    };
    let parameters = SeismicParameters::compute(&seismic)?;

    let spectrum = ResponseSpectrum::from_values(&parameters.design_values()).points();
    let period = estimate_period(&input.geometry, &input.materials, &parameters);
    let base_shear = calculate_base_shear(&parameters, &input.geometry, &input.loads, period.ta);
    let floor_forces = distribute(base_shear.v, period.ta, &input.geometry, &input.loads);
    let story_shears = story_shears(&floor_forces, input.geometry.height_per_floor_m);

    log::info!(
        "ELF analysis: site {} SDS={:.3} SD1={:.3} Ta={:.3}s Cs={:.4} V={:.2} kN over {} floors",
        parameters.site_class,
        parameters.sds,
        parameters.sd1,
        period.ta,
        base_shear.cs,
        base_shear.v,
        floor_forces.len()
    );

    Ok(SeismicAnalysis {
        parameters,
        spectrum,
        period,
        base_shear,
        floor_forces,
        story_shears,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_input() -> SeismicAnalysisInput {
        SeismicAnalysisInput {
            seismic: SeismicInput::new(0.8, 0.3, SiteClass::SD),
            soil: None,
            geometry: Geometry::new(20.0, 15.0, 3, 3.5),
            loads: Loads::new(5.5, 0.0, 4.0),
            materials: MaterialProperties::new(28.0),
        }
    }

    #[test]
    fn test_pipeline_produces_consistent_results() {
        let analysis = analyze(&test_input()).unwrap();
        assert_eq!(analysis.floor_forces.len(), 3);
        assert_eq!(analysis.story_shears.len(), 3);
        assert_relative_eq!(analysis.story_shears[0].shear, analysis.base_shear.v, epsilon = 1e-9);
        assert!(analysis.base_overturning_moment() > 0.0);
    }

    #[test]
    fn test_soil_data_overrides_site_class() {
        let mut input = test_input();
        input.soil = Some(SoilData::new(SiteClass::SF));
        let analysis = analyze(&input).unwrap();
        assert_eq!(analysis.parameters.site_class, SiteClass::SF);
        assert_eq!(analysis.parameters.sds, 0.0);
        // Zero hazard still produces the Cs floor, not an error
        assert_relative_eq!(analysis.base_shear.cs, 0.01);
    }

    #[test]
    fn test_invalid_records_fail_before_calculation() {
        let mut input = test_input();
        input.geometry.number_of_floors = 0;
        assert!(analyze(&input).is_err());

        let mut input = test_input();
        input.seismic.s1 = -0.2;
        let err = analyze(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_references_cover_pipeline() {
        let analysis = analyze(&test_input()).unwrap();
        let refs = analysis.references();
        assert_eq!(refs.len(), 10);
        assert!(refs.iter().all(|(_, section)| section.starts_with("ASCE 7-10")));
    }

    #[test]
    fn test_input_from_json() {
        let json = r#"{
            "seismic": { "ss": 0.8, "s1": 0.3, "site_class": "SD" },
            "geometry": { "length_m": 20.0, "width_m": 15.0, "number_of_floors": 3, "height_per_floor_m": 3.5 },
            "loads": { "dead_load": 5.5, "live_load": 4.0 }
        }"#;
        let input: SeismicAnalysisInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.materials, MaterialProperties::default());
        assert!(input.soil.is_none());
        assert_eq!(input, SeismicAnalysisInput { materials: MaterialProperties::default(), ..test_input() });
    }
}
