//! Aggregation engine.

use std::collections::BTreeSet;

use polars::prelude::{DataFrame, DataType, Expr, IntoLazy, col};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::frame::require_column;

/// Group `df` by `group_columns` and sum each of `measure_columns`.
///
/// The summary has one row per key tuple present in the input (keys that
/// never occur are not materialized), in first-appearance order. Measures are
/// summed as `Float64` and keep their column names. An empty input yields an
/// empty summary with the same schema.
///
/// # Errors
///
/// - [`EngineError::EmptyGrouping`] / [`EngineError::EmptyMeasures`] when a
///   column list is empty.
/// - [`EngineError::InvalidColumn`] when a named column is not in `df`.
/// - [`EngineError::DuplicateColumn`] when a column is named twice.
/// - [`EngineError::NonNumericMeasure`] when a measure column is not numeric.
pub fn group_and_sum<G, M>(
    df: &DataFrame,
    group_columns: &[G],
    measure_columns: &[M],
) -> Result<DataFrame>
where
    G: AsRef<str>,
    M: AsRef<str>,
{
    if group_columns.is_empty() {
        return Err(EngineError::EmptyGrouping);
    }
    if measure_columns.is_empty() {
        return Err(EngineError::EmptyMeasures);
    }
    let mut seen = BTreeSet::new();
    for name in group_columns
        .iter()
        .map(AsRef::as_ref)
        .chain(measure_columns.iter().map(AsRef::as_ref))
    {
        require_column(df, name)?;
        if !seen.insert(name) {
            return Err(EngineError::DuplicateColumn {
                column: name.to_string(),
            });
        }
    }
    for name in measure_columns.iter().map(AsRef::as_ref) {
        let dtype = require_column(df, name)?.dtype();
        if !(dtype.is_float() || dtype.is_integer()) {
            return Err(EngineError::NonNumericMeasure {
                column: name.to_string(),
                dtype: dtype.to_string(),
            });
        }
    }

    let keys: Vec<Expr> = group_columns
        .iter()
        .map(|name| col(name.as_ref()))
        .collect();
    let sums: Vec<Expr> = measure_columns
        .iter()
        .map(|name| {
            col(name.as_ref())
                .cast(DataType::Float64)
                .sum()
                .alias(name.as_ref())
        })
        .collect();

    let summary = df
        .clone()
        .lazy()
        .group_by_stable(keys)
        .agg(sums)
        .collect()?;
    debug!(
        input_rows = df.height(),
        groups = summary.height(),
        "group and sum"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn plants() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("state".into(), vec!["SP", "RJ", "SP"]).into_column(),
            Series::new("installed_power".into(), vec![10.0, 20.0, 30.0]).into_column(),
            Series::new("declared_power".into(), vec![9.0, 19.0, 29.0]).into_column(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn sums_two_measures_per_state() {
        let summary = group_and_sum(
            &plants(),
            &["state"],
            &["installed_power", "declared_power"],
        )
        .unwrap();
        assert_eq!(summary.height(), 2);
        let installed: Vec<Option<f64>> = summary
            .column("installed_power")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        let declared: Vec<Option<f64>> = summary
            .column("declared_power")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(installed, vec![Some(40.0), Some(20.0)]);
        assert_eq!(declared, vec![Some(38.0), Some(19.0)]);
    }

    #[test]
    fn rejects_empty_column_lists() {
        let none: [&str; 0] = [];
        assert!(matches!(
            group_and_sum(&plants(), &none, &["installed_power"]),
            Err(EngineError::EmptyGrouping)
        ));
        assert!(matches!(
            group_and_sum(&plants(), &["state"], &none),
            Err(EngineError::EmptyMeasures)
        ));
    }

    #[test]
    fn text_measure_is_rejected() {
        let err = group_and_sum(&plants(), &["installed_power"], &["state"]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::NonNumericMeasure { ref column, .. } if column == "state"
        ));
    }

    #[test]
    fn repeated_columns_are_rejected() {
        let err = group_and_sum(
            &plants(),
            &["state"],
            &["installed_power", "installed_power"],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::DuplicateColumn { ref column } if column == "installed_power"
        ));

        let err = group_and_sum(&plants(), &["state", "state"], &["installed_power"]).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateColumn { .. }));
    }

    #[test]
    fn unknown_measure_is_invalid_column() {
        let err = group_and_sum(&plants(), &["state"], &["capacity"]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidColumn { ref column } if column == "capacity"
        ));
    }
}
