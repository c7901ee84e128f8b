//! # Building Records
//!
//! Geometry, area loads, and material data describing the building under
//! analysis. The model assumes a uniform floor plan and uniform loading on
//! every level.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "geometry": {
//!     "length_m": 20.0,
//!     "width_m": 15.0,
//!     "number_of_floors": 3,
//!     "height_per_floor_m": 3.5
//!   },
//!   "loads": { "dead_load": 5.5, "partition_load": 0.0, "live_load": 4.0 },
//!   "materials": { "fc_mpa": 28.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::units::{KgPerSqM, KnPerSqM};

/// Fraction of floor live load included in the effective seismic weight
pub const LIVE_LOAD_PARTICIPATION: f64 = 0.25;

/// Plan and elevation geometry of a regular multi-story building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Plan length in meters
    pub length_m: f64,

    /// Plan width in meters
    pub width_m: f64,

    /// Number of floors above the base (≥ 1)
    pub number_of_floors: u32,

    /// Story height in meters
    pub height_per_floor_m: f64,
}

impl Geometry {
    pub fn new(length_m: f64, width_m: f64, number_of_floors: u32, height_per_floor_m: f64) -> Self {
        Self {
            length_m,
            width_m,
            number_of_floors,
            height_per_floor_m,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_m", self.length_m)?;
        require_positive("width_m", self.width_m)?;
        require_positive("height_per_floor_m", self.height_per_floor_m)?;
        if self.number_of_floors < 1 {
            return Err(CalcError::invalid_input(
                "number_of_floors",
                self.number_of_floors.to_string(),
                "Building must have at least one floor",
            ));
        }
        Ok(())
    }

    /// Plan area of one floor (m²)
    pub fn floor_area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// Structural height hn above the base (m)
    pub fn total_height_m(&self) -> f64 {
        self.height_per_floor_m * self.number_of_floors as f64
    }

    /// Elevation of floor `floor` above the base, 1 = first suspended level
    pub fn floor_height_m(&self, floor: u32) -> f64 {
        floor as f64 * self.height_per_floor_m
    }
}

/// Uniform area loads applied on every floor, in kg/m².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Loads {
    /// Superimposed and self-weight dead load
    pub dead_load: f64,

    /// Partition allowance, treated as dead load
    #[serde(default)]
    pub partition_load: f64,

    /// Floor live load
    pub live_load: f64,
}

impl Loads {
    pub fn new(dead_load: f64, partition_load: f64, live_load: f64) -> Self {
        Self {
            dead_load,
            partition_load,
            live_load,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("dead_load", self.dead_load)?;
        require_non_negative("partition_load", self.partition_load)?;
        require_non_negative("live_load", self.live_load)?;
        Ok(())
    }

    /// Dead plus partition load as force per area
    pub fn dead_intensity(&self) -> KnPerSqM {
        (KgPerSqM(self.dead_load) + KgPerSqM(self.partition_load)).into()
    }

    /// Effective seismic intensity: D + partitions + 0.25 L
    pub fn seismic_intensity(&self) -> KnPerSqM {
        let mass = KgPerSqM(self.dead_load)
            + KgPerSqM(self.partition_load)
            + KgPerSqM(self.live_load) * LIVE_LOAD_PARTICIPATION;
        mass.into()
    }
}

/// Material properties relevant to the period estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Concrete compressive strength f'c (MPa)
    pub fc_mpa: f64,
}

impl MaterialProperties {
    pub fn new(fc_mpa: f64) -> Self {
        Self { fc_mpa }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("fc_mpa", self.fc_mpa)
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self { fc_mpa: 28.0 }
    }
}
