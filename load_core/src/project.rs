//! # Project Data Structures
//!
//! The `Project` struct is the root container for a load-generation job:
//! job metadata, global code settings, and the stored analysis results.
//! Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (code variant, design method, risk category)
//! └── analyses: HashMap<Uuid, StoredAnalysis> (all calculator results)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use load_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("25-042"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::loads::DesignMethod;
use crate::result::LoadResult;
use crate::site::RiskCategory;
use crate::standards::CodeVariant;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Analyses are stored in a flat UUID-keyed map so callers can hold
/// stable references across reordering and re-runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (code variant, design method, risk category)
    pub settings: GlobalSettings,

    /// Stored calculator results, keyed by UUID
    pub analyses: HashMap<Uuid, StoredAnalysis>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use load_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
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
            analyses: HashMap::new(),
        }
    }

    /// Store a calculator result under a label.
    ///
    /// Returns the UUID assigned to the analysis.
    pub fn add_analysis(&mut self, label: impl Into<String>, result: LoadResult) -> Uuid {
        let id = Uuid::new_v4();
        self.analyses.insert(
            id,
            StoredAnalysis {
                label: label.into(),
                result,
            },
        );
        self.touch();
        id
    }

    /// Remove a stored analysis by UUID.
    ///
    /// Returns the removed analysis if it existed.
    pub fn remove_analysis(&mut self, id: &Uuid) -> Option<StoredAnalysis> {
        let analysis = self.analyses.remove(id);
        if analysis.is_some() {
            self.touch();
        }
        analysis
    }

    /// Get a stored analysis by UUID.
    pub fn get_analysis(&self, id: &Uuid) -> Option<&StoredAnalysis> {
        self.analyses.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of stored analyses.
    pub fn analysis_count(&self) -> usize {
        self.analyses.len()
    }

    /// Whether any stored result relied on a fallback/default, in which
    /// case the rendered report carries the corresponding notices.
    pub fn any_fallbacks(&self) -> bool {
        self.analyses.values().any(|a| a.result.used_fallback())
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
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
    /// Code variant loads are generated for
    pub code: CodeVariant,

    /// Design philosophy for the combination set
    pub design_method: DesignMethod,

    /// Risk category (drives importance factors)
    pub risk_category: RiskCategory,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: CodeVariant::Asce7,
            design_method: DesignMethod::Lrfd,
            risk_category: RiskCategory::II,
        }
    }
}

/// A labeled calculator result stored in the project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAnalysis {
    /// User label (e.g. "Wind - transverse")
    pub label: String,

    /// The calculator output
    pub result: LoadResult,
}
