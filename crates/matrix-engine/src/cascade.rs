//! Cascading options resolver.
//!
//! A filter widget offers only the values that would still produce rows given
//! the selections made in the *other* widgets. A dimension's own selection is
//! never applied to itself, so a deselected value can always be picked again.
//!
//! Hierarchical cascades (only the tiers above a dimension narrow it) are the
//! same call with a narrower filter set, see [`FilterSet::restricted_to`].

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::DataFrame;
use tracing::debug;

use matrix_model::{Dimension, FilterSet};

use crate::error::Result;
use crate::filter::apply_filters;
use crate::frame::string_column;

/// Sorted distinct values of `target` among rows matching every constraint
/// of `other_filters` except the one on `target` itself.
///
/// `df` must be the full source table, not a previously filtered result:
/// each call is independent of the others.
pub fn valid_options(
    df: &DataFrame,
    target: Dimension,
    other_filters: &FilterSet,
) -> Result<Vec<String>> {
    let constraints = other_filters.without(target);
    let constrained = apply_filters(df, &constraints)?;
    let options = distinct_values(&constrained, target.column())?;
    debug!(
        dimension = %target,
        options = options.len(),
        "options resolved"
    );
    Ok(options)
}

/// Option lists for every dimension, each resolved against `df` with all the
/// other dimensions' constraints.
pub fn cascade_options(
    df: &DataFrame,
    filters: &FilterSet,
) -> Result<BTreeMap<Dimension, Vec<String>>> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| Ok((dimension, valid_options(df, dimension, filters)?)))
        .collect()
}

/// Sorted distinct non-null values of a column.
pub fn distinct_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let values = string_column(df, column)?;
    let distinct: BTreeSet<&str> = values.into_iter().flatten().collect();
    Ok(distinct.into_iter().map(str::to_string).collect())
}
