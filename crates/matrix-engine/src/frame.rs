//! Column access helpers shared by the engine modules.

use polars::prelude::{Column, DataFrame, DataType, Float64Chunked, StringChunked};

use crate::error::{EngineError, Result};

/// Look up a column, turning absence into [`EngineError::InvalidColumn`].
pub(crate) fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| EngineError::InvalidColumn {
        column: name.to_string(),
    })
}

/// A column's values as strings, whatever its stored type.
pub(crate) fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = require_column(df, name)?;
    let casted = column.cast(&DataType::String)?;
    Ok(casted.str()?.clone())
}

/// A column's values as `f64`, whatever numeric type it is stored as.
pub(crate) fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = require_column(df, name)?;
    let casted = column.cast(&DataType::Float64)?;
    Ok(casted.f64()?.clone())
}
