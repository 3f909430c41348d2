//! # Project Data Structures
//!
//! The `TccProject` struct is the root container saved to disk. Projects
//! serialize to `.tcc` files as human-readable JSON and hold everything
//! needed to re-run a calculation. Results are never stored; they are
//! recomputed from the input on load.
//!
//! ## Structure
//!
//! ```text
//! TccProject
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: CalcSettings (deflection sampling)
//! └── input: TccInput (materials, geometry, connection, load, strength)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tcc_core::project::TccProject;
//! use tcc_core::calculations::TccInput;
//!
//! let project = TccProject::new("Jane Engineer", "26-042", TccInput::example());
//! let result = project.run().unwrap();
//! assert!(result.passes());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::tcc::{calculate, TccInput, TccResult};
use crate::errors::CalcResult;
use crate::settings::CalcSettings;

/// Current schema version for .tcc files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TccProject {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Calculation settings
    #[serde(default)]
    pub settings: CalcSettings,

    /// The element being verified
    pub input: TccInput,
}

impl TccProject {
    /// Create a new project around an input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tcc_core::project::TccProject;
    /// use tcc_core::calculations::TccInput;
    ///
    /// let project = TccProject::new("John Doe", "26-001", TccInput::example());
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, input: TccInput) -> Self {
        let now = Utc::now();
        TccProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                created: now,
                modified: now,
            },
            settings: CalcSettings::default(),
            input,
        }
    }

    /// Replace the input and mark the project as modified.
    pub fn set_input(&mut self, input: TccInput) {
        self.input = input;
        self.touch();
    }

    /// Replace the settings and mark the project as modified.
    pub fn set_settings(&mut self, settings: CalcSettings) {
        self.settings = settings;
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Run the calculation for the stored input and settings.
    pub fn run(&self) -> CalcResult<TccResult> {
        calculate(&self.input, &self.settings)
    }
}

impl Default for TccProject {
    fn default() -> Self {
        TccProject::new("", "", TccInput::example())
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TccProject::new("John Doe", "26-001", TccInput::example());
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "26-001");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.meta.created, project.meta.modified);
        assert_eq!(project.settings, CalcSettings::default());
    }

    #[test]
    fn test_project_serialization() {
        let project = TccProject::new("Jane Engineer", "26-042", TccInput::example());
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("26-042"));
        assert!(json.contains("k_ser_n_per_m"));

        let roundtrip: TccProject = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, project);
    }

    #[test]
    fn test_missing_settings_default() {
        let project = TccProject::default();
        let mut value = serde_json::to_value(&project).unwrap();
        value.as_object_mut().unwrap().remove("settings");
        let loaded: TccProject = serde_json::from_value(value).unwrap();
        assert_eq!(loaded.settings, CalcSettings::default());
    }

    #[test]
    fn test_set_input_touches() {
        let mut project = TccProject::default();
        let created = project.meta.created;
        let mut input = TccInput::example();
        input.label = "TCC-2".to_string();
        project.set_input(input);
        assert_eq!(project.input.label, "TCC-2");
        assert!(project.meta.modified >= created);
    }

    #[test]
    fn test_run_uses_settings() {
        let mut project = TccProject::default();
        project.set_settings(CalcSettings::with_deflection_points(10));
        let result = project.run().unwrap();
        assert_eq!(result.deflection.points().count(), 20);
    }
}
