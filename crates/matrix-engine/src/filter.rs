//! Filter predicate engine.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tracing::debug;

use matrix_model::FilterSet;

use crate::error::Result;
use crate::frame::string_column;

/// Keep the rows that satisfy every active constraint of `filters`.
///
/// Each constrained dimension keeps rows whose value is one of the accepted
/// values; unconstrained dimensions pass everything through. Constraints are
/// combined with AND and row order is preserved. Null cells never match a
/// constraint. The input frame is not modified.
///
/// # Errors
///
/// [`EngineError::InvalidColumn`](crate::EngineError::InvalidColumn) when a
/// constrained dimension has no column in `df`.
pub fn apply_filters(df: &DataFrame, filters: &FilterSet) -> Result<DataFrame> {
    if filters.is_empty() {
        return Ok(df.clone());
    }

    let mut keep = vec![true; df.height()];
    for (dimension, accepted) in filters.active() {
        let values = string_column(df, dimension.column())?;
        for (slot, value) in keep.iter_mut().zip(&values) {
            if *slot {
                *slot = value.is_some_and(|value| accepted.contains(value));
            }
        }
    }

    let mask = BooleanChunked::from_slice("filter".into(), &keep);
    let filtered = df.filter(&mask)?;
    debug!(
        input_rows = df.height(),
        output_rows = filtered.height(),
        constraints = filters.active().count(),
        "filters applied"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_model::Dimension;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn frame(status: &[&str], state: &[&str]) -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("status".into(), status.to_vec()).into_column(),
            Series::new("state".into(), state.to_vec()).into_column(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn unknown_dimension_column_is_invalid() {
        let df = frame(&["Operação"], &["SP"]);
        let filters = FilterSet::new().with(Dimension::FuelType, ["UHE"]);
        let err = apply_filters(&df, &filters).unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::InvalidColumn { ref column } if column == "fuel_type"
        ));
    }

    #[test]
    fn empty_table_stays_empty() {
        let df = frame(&[], &[]);
        let filters = FilterSet::new().with(Dimension::State, ["SP"]);
        let filtered = apply_filters(&df, &filters).unwrap();
        assert_eq!(filtered.height(), 0);
        assert_eq!(filtered.width(), 2);
    }

    #[test]
    fn null_cells_never_match() {
        let columns: Vec<Column> = vec![
            Series::new("status".into(), vec![Some("Operação"), None]).into_column(),
            Series::new("state".into(), vec!["SP", "SP"]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();
        let filters = FilterSet::new().with(Dimension::Status, ["Operação"]);
        assert_eq!(apply_filters(&df, &filters).unwrap().height(), 1);
    }
}
