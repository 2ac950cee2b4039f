//! Canonical column names of the processed plant dataset.
//!
//! The loader renames legacy headers to these names; everything downstream
//! of the loader only ever sees this schema.

/// Operating status of the plant.
pub const STATUS: &str = "status";
/// Brazilian state abbreviation.
pub const STATE: &str = "state";
/// Most general energy-source classification.
pub const FUEL_ORIGIN: &str = "fuel_origin";
/// Fuel type code.
pub const FUEL_TYPE: &str = "fuel_type";
/// Human readable fuel type.
pub const FUEL_TYPE_NAME: &str = "fuel_type_name";
/// Generator technology.
pub const GENERATOR_TYPE: &str = "generator_type";
/// Installed electric power in kW.
pub const INSTALLED_POWER: &str = "installed_power";
/// Declared electric power in kW.
pub const DECLARED_POWER: &str = "declared_power";
/// Date the plant entered commercial operation.
pub const COMMISSION_DATE: &str = "commission_date";
pub const PLANT_NAME: &str = "plant_name";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";

/// Derived column: commission year in history frames.
pub const YEAR: &str = "year";
/// Derived column: running total of installed power in history frames.
pub const CUMULATIVE_POWER: &str = "cumulative_power";

/// Measures summed when the caller does not name any.
pub const DEFAULT_MEASURES: &[&str] = &[INSTALLED_POWER];

/// Numeric measure columns known to the schema.
pub const MEASURE_COLUMNS: &[&str] = &[INSTALLED_POWER, DECLARED_POWER];

/// Legacy header spellings found in older exports, mapped to canonical names.
///
/// Matching is case-insensitive.
pub const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("states", STATE),
    ("electric_power_inst", INSTALLED_POWER),
    ("electric_power_decl", DECLARED_POWER),
    ("datentradaoperacao", COMMISSION_DATE),
    ("nomempreendimento", PLANT_NAME),
];

/// Returns the canonical name for a raw header, if it is a known alias or a
/// case variant of a canonical column.
pub fn canonical_column(raw: &str) -> Option<&'static str> {
    let normalized = raw.trim().to_lowercase();
    LEGACY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, canonical)| *canonical)
        .or_else(|| {
            [
                STATUS,
                STATE,
                FUEL_ORIGIN,
                FUEL_TYPE,
                FUEL_TYPE_NAME,
                GENERATOR_TYPE,
                INSTALLED_POWER,
                DECLARED_POWER,
                COMMISSION_DATE,
                PLANT_NAME,
                LATITUDE,
                LONGITUDE,
            ]
            .into_iter()
            .find(|name| *name == normalized)
        })
}
