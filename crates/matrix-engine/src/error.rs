//! Error types for the dashboard engine.

use thiserror::Error;

/// Contract violations raised by engine operations.
///
/// A filter or grouping that matches no rows is not an error; it produces an
/// empty table.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A filter, grouping, or measure column is not part of the table.
    #[error("column '{column}' not found in table")]
    InvalidColumn { column: String },

    /// A measure column does not hold numbers.
    #[error("measure column '{column}' is not numeric ({dtype})")]
    NonNumericMeasure { column: String, dtype: String },

    /// A column is named more than once across grouping and measures.
    #[error("column '{column}' is listed more than once")]
    DuplicateColumn { column: String },

    /// `group_and_sum` was called without grouping columns.
    #[error("at least one grouping column is required")]
    EmptyGrouping,

    /// `group_and_sum` was called without measure columns.
    #[error("at least one measure column is required")]
    EmptyMeasures,

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    Polars { message: String },
}

impl From<polars::prelude::PolarsError> for EngineError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Polars {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
