//! # Seismic Calculations
//!
//! The equivalent lateral force (ELF) procedure, leaf-first:
//!
//! - [`parameters`] - Site coefficients, SDS/SD1, corner periods
//! - [`spectrum`] - Design response spectrum curve
//! - [`period`] - Approximate fundamental period Ta and its cap
//! - [`base_shear`] - Seismic response coefficient Cs and base shear V
//! - [`vertical_distribution`] - Floor forces, story shears, overturning
//!
//! Every function here is pure: outputs depend only on the arguments.

pub mod base_shear;
pub mod parameters;
pub mod period;
pub mod spectrum;
pub mod vertical_distribution;

// Re-export commonly used types
pub use base_shear::{calculate_base_shear, BaseShearResult};
pub use parameters::{derive, SeismicInput, SeismicParameters, SiteDesignValues};
pub use period::{estimate_period, FundamentalPeriod};
pub use spectrum::{ResponseSpectrum, ResponseSpectrumPoint};
pub use vertical_distribution::{distribute, story_shears, FloorForce, StoryShear};

/// ASCE 7-10 section references for each step, for report collaborators.
pub mod asce_ref {
    /// Site coefficients Fa and Fv
    pub const SITE_COEFFICIENTS: &str = "ASCE 7-10 11.4.3";
    /// SMS, SM1
    pub const MCE_PARAMETERS: &str = "ASCE 7-10 11.4.3";
    /// SDS, SD1
    pub const DESIGN_PARAMETERS: &str = "ASCE 7-10 11.4.4";
    /// Design response spectrum
    pub const RESPONSE_SPECTRUM: &str = "ASCE 7-10 11.4.5";
    /// Approximate fundamental period Ta
    pub const APPROXIMATE_PERIOD: &str = "ASCE 7-10 12.8.2.1";
    /// Upper limit coefficient Cu
    pub const PERIOD_UPPER_LIMIT: &str = "ASCE 7-10 Table 12.8-1";
    /// Seismic response coefficient Cs
    pub const RESPONSE_COEFFICIENT: &str = "ASCE 7-10 12.8.1.1";
    /// Effective seismic weight W
    pub const SEISMIC_WEIGHT: &str = "ASCE 7-10 12.7.2";
    /// Vertical distribution Fx
    pub const VERTICAL_DISTRIBUTION: &str = "ASCE 7-10 12.8.3";
    /// Story shear Vx
    pub const STORY_SHEAR: &str = "ASCE 7-10 12.8.4";
    /// Overturning
    pub const OVERTURNING: &str = "ASCE 7-10 12.8.5";
}
