//! Column normalization and schema checks for the plant table.
//!
//! Older exports of the dataset used different header spellings
//! (`states`, `Status`, `electric_power_inst`, ...). They are renamed here so
//! the engine only ever deals with one canonical schema.

use std::collections::BTreeSet;

use polars::prelude::{DataFrame, DataType};
use tracing::{debug, warn};

use matrix_model::{Dimension, schema};

use crate::error::{IngestError, Result};

/// Rename known legacy or case-variant headers to their canonical names.
///
/// Unknown columns are left untouched. When a canonical column already exists
/// the legacy one is kept under its original name instead of guessing which
/// of the two is authoritative.
pub fn normalize_columns(mut df: DataFrame) -> Result<DataFrame> {
    let original: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut taken: BTreeSet<String> = original.iter().cloned().collect();

    for raw in &original {
        let cleaned = raw.trim_start_matches('\u{feff}').trim();
        let Some(canonical) = schema::canonical_column(cleaned) else {
            continue;
        };
        if raw == canonical {
            continue;
        }
        if taken.contains(canonical) {
            warn!(
                column = %raw,
                canonical,
                "canonical column already present, keeping legacy column as-is"
            );
            continue;
        }
        debug!(column = %raw, canonical, "renaming legacy column");
        df.rename(raw, canonical.into())?;
        taken.remove(raw);
        taken.insert(canonical.to_string());
    }
    Ok(df)
}

/// Columns the engine cannot work without.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = Dimension::ALL
        .iter()
        .map(|dimension| dimension.column())
        .collect();
    columns.push(schema::INSTALLED_POWER);
    columns
}

/// Check that every required column is present.
pub fn validate_schema(df: &DataFrame) -> Result<()> {
    let present: BTreeSet<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    let missing: Vec<String> = required_columns()
        .into_iter()
        .filter(|column| !present.contains(column))
        .map(str::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns { columns: missing })
    }
}

/// Cast dimension columns to `String` and parse measure columns as
/// `Float64` so filters and sums behave the same whatever the CSV held.
///
/// # Errors
///
/// [`IngestError::InvalidMeasure`] when a measure cell is not a number.
/// Unparseable coordinates become null; nothing sums them.
pub fn cast_schema(mut df: DataFrame) -> Result<DataFrame> {
    for dimension in Dimension::ALL {
        cast_column(&mut df, dimension.column(), &DataType::String)?;
    }
    for measure in schema::MEASURE_COLUMNS {
        parse_measure(&mut df, measure)?;
    }
    for coordinate in [schema::LATITUDE, schema::LONGITUDE] {
        cast_column(&mut df, coordinate, &DataType::Float64)?;
    }
    Ok(df)
}

/// Check measure values after casting: `installed_power` is present on every
/// row and no power is negative.
pub fn validate_measures(df: &DataFrame) -> Result<()> {
    for measure in schema::MEASURE_COLUMNS {
        let Ok(column) = df.column(measure) else {
            continue;
        };
        let casted = column.cast(&DataType::Float64)?;
        let values = casted.f64()?;
        let missing = values.null_count();
        if *measure == schema::INSTALLED_POWER && missing > 0 {
            return Err(IngestError::InvalidMeasure {
                column: measure.to_string(),
                message: format!("{missing} rows without a value"),
            });
        }
        let negative = values.into_iter().flatten().filter(|value| *value < 0.0).count();
        if negative > 0 {
            return Err(IngestError::InvalidMeasure {
                column: measure.to_string(),
                message: format!("{negative} negative values"),
            });
        }
    }
    Ok(())
}

fn cast_column(df: &mut DataFrame, name: &str, dtype: &DataType) -> Result<()> {
    let Ok(column) = df.column(name) else {
        return Ok(());
    };
    if column.dtype() == dtype {
        return Ok(());
    }
    let casted = column.cast(dtype)?;
    df.with_column(casted)?;
    Ok(())
}

/// Strict `Float64` parse: a cell that is not a number fails the load.
fn parse_measure(df: &mut DataFrame, name: &str) -> Result<()> {
    let Ok(column) = df.column(name) else {
        return Ok(());
    };
    if column.dtype() == &DataType::Float64 {
        return Ok(());
    }
    let parsed = column
        .strict_cast(&DataType::Float64)
        .map_err(|e| IngestError::InvalidMeasure {
            column: name.to_string(),
            message: e.to_string(),
        })?;
    df.with_column(parsed)?;
    Ok(())
}
