//! # Project Data Structures
//!
//! The `Project` struct groups the buildings analyzed for one job, together
//! with job metadata and code settings. It is a plain serializable record;
//! storing it is up to the caller.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (code edition, risk category)
//! └── buildings: HashMap<Uuid, BuildingCase> (labelled analysis inputs)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::project::{BuildingCase, Project};
//! use seismic_core::analysis::SeismicAnalysisInput;
//! use seismic_core::building::{Geometry, Loads, MaterialProperties};
//! use seismic_core::calculations::SeismicInput;
//! use seismic_core::site::SiteClass;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let id = project.add_building(BuildingCase::new("Block A", SeismicAnalysisInput {
//!     seismic: SeismicInput::new(0.8, 0.3, SiteClass::SD),
//!     soil: None,
//!     geometry: Geometry::new(20.0, 15.0, 3, 3.5),
//!     loads: Loads::new(5.5, 0.0, 4.0),
//!     materials: MaterialProperties::default(),
//! }));
//!
//! let analysis = project.analyze(&id).unwrap();
//! assert!(analysis.base_shear.v > 0.0);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{analyze, SeismicAnalysis, SeismicAnalysisInput};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for serialized projects
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (code edition, risk category)
    pub settings: GlobalSettings,

    /// Buildings under analysis, keyed by UUID
    pub buildings: HashMap<Uuid, BuildingCase>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "25-001")
    /// * `client` - Client name
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            buildings: HashMap::new(),
        }
    }

    /// Add a building and return the UUID assigned to it.
    pub fn add_building(&mut self, case: BuildingCase) -> Uuid {
        let id = Uuid::new_v4();
        self.buildings.insert(id, case);
        self.touch();
        id
    }

    /// Remove a building by UUID.
    pub fn remove_building(&mut self, id: &Uuid) -> Option<BuildingCase> {
        let case = self.buildings.remove(id);
        if case.is_some() {
            self.touch();
        }
        case
    }

    /// Get a building by UUID.
    pub fn get_building(&self, id: &Uuid) -> Option<&BuildingCase> {
        self.buildings.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Analyze one building.
    ///
    /// The project risk category supplies the importance factor unless the
    /// building overrides it.
    pub fn analyze(&self, id: &Uuid) -> CalcResult<SeismicAnalysis> {
        let case = self
            .buildings
            .get(id)
            .ok_or_else(|| CalcError::missing_field(format!("buildings.{}", id)))?;
        analyze(&self.effective_input(case))
    }

    /// Analyze every building, ordered by label.
    pub fn analyze_all(&self) -> Vec<(Uuid, CalcResult<SeismicAnalysis>)> {
        let mut cases: Vec<_> = self.buildings.iter().collect();
        cases.sort_by(|a, b| a.1.label.cmp(&b.1.label));
        cases
            .into_iter()
            .map(|(id, case)| (*id, analyze(&self.effective_input(case))))
            .collect()
    }

    fn effective_input(&self, case: &BuildingCase) -> SeismicAnalysisInput {
        let mut input = case.input;
        if !case.override_importance {
            input.seismic.importance = self.settings.risk_category.importance_factor();
        }
        input
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON, rejecting unknown schema versions
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let project: Project = serde_json::from_str(json)?;
        if project.meta.version != SCHEMA_VERSION {
            return Err(CalcError::invalid_input(
                "meta.version",
                project.meta.version.clone(),
                format!("Expected schema version {}", SCHEMA_VERSION),
            ));
        }
        Ok(project)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// A labelled building within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingCase {
    /// User label (e.g., "Block A")
    pub label: String,

    /// Analysis input
    pub input: SeismicAnalysisInput,

    /// Keep `input.seismic.importance` instead of the project risk category's
    #[serde(default)]
    pub override_importance: bool,
}

impl BuildingCase {
    pub fn new(label: impl Into<String>, input: SeismicAnalysisInput) -> Self {
        Self {
            label: label.into(),
            input,
            override_importance: false,
        }
    }

    /// Builder: keep the importance factor given in the input
    pub fn with_own_importance(mut self) -> Self {
        self.override_importance = true;
        self
    }
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Governing code edition
    pub code: String,

    /// Risk category (I through IV)
    pub risk_category: RiskCategory,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: "ASCE 7-10".to_string(),
            risk_category: RiskCategory::II,
        }
    }
}

/// Risk category per ASCE 7 Table 1.5-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RiskCategory {
    I,
    #[default]
    II,
    III,
    IV,
}

impl RiskCategory {
    /// Seismic importance factor Ie (ASCE 7-10 Table 1.5-2)
    pub fn importance_factor(&self) -> f64 {
        match self {
            RiskCategory::I | RiskCategory::II => 1.0,
            RiskCategory::III => 1.25,
            RiskCategory::IV => 1.5,
        }
    }
}
