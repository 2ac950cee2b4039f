//! Categorical dimensions used for filtering and grouping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::schema;

/// A categorical column of the plant table that filters and groupings can
/// refer to.
///
/// The fuel dimensions go from general to specific:
/// `FuelOrigin` > `FuelType` > `FuelTypeName`, with `GeneratorType`
/// describing the technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Status,
    State,
    FuelOrigin,
    FuelType,
    FuelTypeName,
    GeneratorType,
}

impl Dimension {
    /// Every dimension, in the order the dashboard shows filter widgets.
    pub const ALL: [Dimension; 6] = [
        Dimension::Status,
        Dimension::State,
        Dimension::FuelOrigin,
        Dimension::FuelType,
        Dimension::FuelTypeName,
        Dimension::GeneratorType,
    ];

    /// Dimensions offered as chart categories.
    pub const CATEGORIES: [Dimension; 4] = [
        Dimension::FuelOrigin,
        Dimension::FuelType,
        Dimension::FuelTypeName,
        Dimension::GeneratorType,
    ];

    /// Canonical column name in the plant table.
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Status => schema::STATUS,
            Dimension::State => schema::STATE,
            Dimension::FuelOrigin => schema::FUEL_ORIGIN,
            Dimension::FuelType => schema::FUEL_TYPE,
            Dimension::FuelTypeName => schema::FUEL_TYPE_NAME,
            Dimension::GeneratorType => schema::GENERATOR_TYPE,
        }
    }

    /// Display label for widgets and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Status => "Status",
            Dimension::State => "State",
            Dimension::FuelOrigin => "Fuel Origin",
            Dimension::FuelType => "Fuel Type",
            Dimension::FuelTypeName => "Fuel Type Name",
            Dimension::GeneratorType => "Generator Type",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Dimension {
    type Err = ModelError;

    /// Accepts the column name, the label, or a legacy alias
    /// (case-insensitive, `-`/space treated as `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        let normalized = schema::canonical_column(&normalized).unwrap_or(normalized.as_str());
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.column() == normalized)
            .ok_or_else(|| ModelError::UnknownDimension(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_columns_labels_and_aliases() {
        assert_eq!("fuel_type".parse::<Dimension>().unwrap(), Dimension::FuelType);
        assert_eq!(
            "Generator Type".parse::<Dimension>().unwrap(),
            Dimension::GeneratorType
        );
        assert_eq!("states".parse::<Dimension>().unwrap(), Dimension::State);
        assert_eq!("STATUS".parse::<Dimension>().unwrap(), Dimension::Status);
        assert!("installed_power".parse::<Dimension>().is_err());
    }

    #[test]
    fn display_is_column_name() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.to_string(), dimension.column());
        }
    }
}
