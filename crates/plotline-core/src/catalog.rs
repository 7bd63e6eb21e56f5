//! Stage template catalog.
//!
//! The catalog is the fixed, ordered list of build stages every new plot is
//! seeded from. It is read once at start-up and never changes afterwards;
//! plots keep their own copy of each stage's name and duration.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Definition of a single build stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageTemplate {
    /// Display name of the stage
    pub name: String,

    /// Nominal duration in work days
    pub duration: u32,
}

impl StageTemplate {
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Ordered, validated list of stage templates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StageCatalog(Vec<StageTemplate>);

impl StageCatalog {
    /// Builds a catalog after checking it is usable.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Catalog` when the list is empty, a name is blank
    /// or repeated, or a duration is zero.
    pub fn new(templates: Vec<StageTemplate>) -> Result<Self> {
        if templates.is_empty() {
            return Err(TrackerError::catalog("catalog must contain at least one stage"));
        }

        let mut seen = HashSet::new();
        for (position, template) in templates.iter().enumerate() {
            let name = template.name.trim();
            if name.is_empty() {
                return Err(TrackerError::catalog(format!(
                    "stage at position {position} has a blank name"
                )));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(TrackerError::catalog(format!(
                    "stage '{name}' appears more than once"
                )));
            }
            if template.duration == 0 {
                return Err(TrackerError::catalog(format!(
                    "stage '{name}' must last at least one work day"
                )));
            }
        }

        Ok(Self(templates))
    }

    /// Parses a catalog from a JSON array of `{"name", "duration"}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let templates: Vec<StageTemplate> = serde_json::from_str(json)?;
        Self::new(templates)
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn templates(&self) -> &[StageTemplate] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StageTemplate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all nominal durations, in work days.
    pub fn total_duration(&self) -> u32 {
        self.0
            .iter()
            .fold(0, |total: u32, t| total.saturating_add(t.duration))
    }
}

impl Default for StageCatalog {
    /// The standard new-build house sequence.
    fn default() -> Self {
        Self(
            [
                ("Site Preparation", 5),
                ("Foundations", 10),
                ("Substructure", 5),
                ("Superstructure", 20),
                ("Roofing", 10),
                ("First Fix", 10),
                ("Plastering", 7),
                ("Second Fix", 10),
                ("Decoration", 7),
                ("Snagging & Handover", 5),
            ]
            .into_iter()
            .map(|(name, duration)| StageTemplate::new(name, duration))
            .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for StageCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let templates = Vec::<StageTemplate>::deserialize(deserializer)?;
        Self::new(templates).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a StageCatalog {
    type Item = &'a StageTemplate;
    type IntoIter = std::slice::Iter<'a, StageTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
