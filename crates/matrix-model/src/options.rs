//! Dashboard configuration options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::Result;
use crate::filter::FilterSet;
use crate::schema;

/// Defaults applied when a session starts or a command omits a setting.
///
/// Every field has a default, so a partial TOML file only overrides what it
/// names:
///
/// ```toml
/// grouping = ["fuel_origin", "generator_type"]
/// history_category = "generator_type"
///
/// [filters]
/// status = ["Operação"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOptions {
    /// Grouping columns used before the user picks any.
    pub grouping: Vec<Dimension>,
    /// Measure columns summed by summaries.
    pub measures: Vec<String>,
    /// Category used for the historical evolution series.
    pub history_category: Dimension,
    /// Filters active when a session starts.
    pub filters: FilterSet,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            grouping: vec![Dimension::FuelOrigin],
            measures: schema::DEFAULT_MEASURES
                .iter()
                .map(|measure| (*measure).to_string())
                .collect(),
            history_category: Dimension::FuelOrigin,
            filters: FilterSet::default(),
        }
    }
}

impl DashboardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    #[must_use]
    pub fn with_grouping(mut self, grouping: Vec<Dimension>) -> Self {
        self.grouping = grouping;
        self
    }

    #[must_use]
    pub fn with_history_category(mut self, category: Dimension) -> Self {
        self.history_category = category;
        self
    }
}
