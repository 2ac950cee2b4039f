//! CSV loading of the processed plant dataset.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::info;

use crate::error::{IngestError, Result};
use crate::normalize::{cast_schema, normalize_columns, validate_measures, validate_schema};

/// Read raw CSV into a DataFrame without touching column names.
///
/// Every column is read as text; typing happens in [`cast_schema`] once the
/// headers are canonical, so a late decimal in a column of whole numbers
/// cannot fail the read.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load the plant table: read, normalize headers, validate and cast.
///
/// The result always carries the canonical schema the engine expects.
pub fn read_plant_table(path: &Path) -> Result<DataFrame> {
    let df = read_csv_frame(path)?;
    let df = normalize_columns(df)?;
    validate_schema(&df)?;
    let df = cast_schema(df)?;
    validate_measures(&df)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "plant table loaded"
    );
    Ok(df)
}
