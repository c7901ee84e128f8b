//! # seismic_core - Seismic Design Parameter Engine
//!
//! `seismic_core` implements the equivalent lateral force procedure for
//! regular multi-story buildings: site coefficients from code tables, the
//! design response spectrum, the approximate fundamental period, base shear,
//! and its vertical distribution over the floors.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All records implement Serialize/Deserialize
//! - **Clamp, don't fail**: Table lookups clamp and zero-hazard sites resolve
//!   to limiting values; only malformed records are errors
//!
//! ## Quick Start
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
//! let json = serde_json::to_string_pretty(&analysis).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`site`] - Site classes and Fa/Fv interpolation
//! - [`building`] - Geometry, loads, and material records
//! - [`calculations`] - The six ELF steps
//! - [`analysis`] - Validated end-to-end pipeline
//! - [`project`] - Job container with metadata and risk category
//! - [`units`] - Unit newtypes and the gravity conversion
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod building;
pub mod calculations;
pub mod errors;
pub mod project;
pub mod site;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, SeismicAnalysis, SeismicAnalysisInput};
pub use building::{Geometry, Loads, MaterialProperties};
pub use errors::{CalcError, CalcResult};
pub use project::{BuildingCase, Project};
pub use site::{SiteClass, SoilData};
