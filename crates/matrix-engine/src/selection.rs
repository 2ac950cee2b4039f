//! Selection stability guard and per-session selection state.

use polars::prelude::DataFrame;
use tracing::debug;

use matrix_model::{DashboardOptions, Dimension, FilterSet};

use crate::aggregate::group_and_sum;
use crate::cascade::valid_options;
use crate::error::Result;
use crate::filter::apply_filters;

/// Keep a multi-choice selection from becoming empty.
///
/// Returns `(current, last_valid)`. A non-empty `new_selection` becomes both
/// the current selection and the new baseline; an empty one is rejected and
/// `last_valid_selection` is restored.
pub fn ensure_nonempty<T: Clone>(
    new_selection: Vec<T>,
    last_valid_selection: Vec<T>,
) -> (Vec<T>, Vec<T>) {
    if new_selection.is_empty() {
        (last_valid_selection.clone(), last_valid_selection)
    } else {
        (new_selection.clone(), new_selection)
    }
}

/// Everything a dashboard session remembers between interactions.
///
/// The state is a plain value: each transition borrows the current state and
/// returns the next one, so a failed transition leaves the caller's state
/// intact. The source table is passed in rather than stored.
#[derive(Debug, Clone)]
pub struct SelectionState {
    filters: FilterSet,
    grouping: Vec<Dimension>,
    filtered: DataFrame,
}

impl SelectionState {
    /// Start a session over the full `source` table with no filters.
    pub fn new(source: &DataFrame, grouping: Vec<Dimension>) -> Self {
        Self {
            filters: FilterSet::new(),
            grouping,
            filtered: source.clone(),
        }
    }

    /// Start a session from configured defaults.
    pub fn from_options(source: &DataFrame, options: &DashboardOptions) -> Result<Self> {
        Self::new(source, options.grouping.clone()).apply(source, options.filters.clone())
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Last valid grouping; never empty once a non-empty grouping was chosen.
    pub fn grouping(&self) -> &[Dimension] {
        &self.grouping
    }

    /// Rows of the source table matching the active filters.
    pub fn filtered(&self) -> &DataFrame {
        &self.filtered
    }

    /// Replace the active filters and recompute the filtered table.
    pub fn apply(&self, source: &DataFrame, filters: FilterSet) -> Result<Self> {
        let filtered = apply_filters(source, &filters)?;
        debug!(rows = filtered.height(), "selection filters applied");
        Ok(Self {
            filters,
            grouping: self.grouping.clone(),
            filtered,
        })
    }

    /// Drop every filter; grouping is kept.
    #[must_use]
    pub fn reset(&self, source: &DataFrame) -> Self {
        Self {
            filters: FilterSet::new(),
            grouping: self.grouping.clone(),
            filtered: source.clone(),
        }
    }

    /// Change the grouping columns. An empty choice keeps the previous one.
    #[must_use]
    pub fn regroup(&self, grouping: Vec<Dimension>) -> Self {
        let (current, _) = ensure_nonempty(grouping, self.grouping.clone());
        Self {
            filters: self.filters.clone(),
            grouping: current,
            filtered: self.filtered.clone(),
        }
    }

    /// Grouped summary of the filtered table.
    pub fn summary<M: AsRef<str>>(&self, measures: &[M]) -> Result<DataFrame> {
        let columns: Vec<&str> = self
            .grouping
            .iter()
            .map(|dimension| dimension.column())
            .collect();
        group_and_sum(&self.filtered, &columns, measures)
    }

    /// Options for one filter widget given the other active filters.
    pub fn options_for(&self, source: &DataFrame, dimension: Dimension) -> Result<Vec<String>> {
        valid_options(source, dimension, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_restores_last_valid() {
        let (current, last) = ensure_nonempty(Vec::<&str>::new(), vec!["A", "B"]);
        assert_eq!(current, vec!["A", "B"]);
        assert_eq!(last, vec!["A", "B"]);
    }

    #[test]
    fn non_empty_selection_becomes_baseline() {
        let (current, last) = ensure_nonempty(vec!["C"], vec!["A", "B"]);
        assert_eq!(current, vec!["C"]);
        assert_eq!(last, vec!["C"]);
    }
}
