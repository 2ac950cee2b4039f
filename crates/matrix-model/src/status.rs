//! Plant operating status.
//!
//! The processed dataset stores the regulator's Portuguese labels; English
//! labels are accepted as well so hand-made fixtures stay readable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantStatus {
    /// In commercial operation ("Operação").
    Operating,
    /// Construction started ("Construção").
    UnderConstruction,
    /// Granted but construction not started ("Construção não iniciada").
    Planned,
}

impl PlantStatus {
    pub const ALL: [PlantStatus; 3] = [
        PlantStatus::Operating,
        PlantStatus::UnderConstruction,
        PlantStatus::Planned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantStatus::Operating => "operating",
            PlantStatus::UnderConstruction => "under construction",
            PlantStatus::Planned => "planned",
        }
    }

    /// Label used by the source dataset.
    pub fn source_label(&self) -> &'static str {
        match self {
            PlantStatus::Operating => "Operação",
            PlantStatus::UnderConstruction => "Construção",
            PlantStatus::Planned => "Construção não iniciada",
        }
    }

    /// Heading used for the status metric cards.
    pub fn metric_title(&self) -> &'static str {
        match self {
            PlantStatus::Operating => "Total Installed Electric Power",
            PlantStatus::UnderConstruction => "Total in Construction Electric Power",
            PlantStatus::Planned => "Total Projected Electric Power",
        }
    }
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "operating" | "operação" | "operacao" | "operative" => Ok(PlantStatus::Operating),
            "under construction" | "in construction" | "construção" | "construcao" => {
                Ok(PlantStatus::UnderConstruction)
            }
            "planned" | "projected" | "construção não iniciada" | "construcao nao iniciada" => {
                Ok(PlantStatus::Planned)
            }
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}
