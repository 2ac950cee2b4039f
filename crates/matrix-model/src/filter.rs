//! Per-dimension membership constraints.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::{ModelError, Result};

/// The collection of value constraints currently active, keyed by dimension.
///
/// An empty value set means "no constraint" for that dimension, never
/// "match nothing". Dimensions combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    constraints: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSet::set`].
    #[must_use]
    pub fn with<I, S>(mut self, dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(dimension, values);
        self
    }

    /// Replace the accepted values for a dimension. An empty iterator clears
    /// the constraint.
    pub fn set<I, S>(&mut self, dimension: Dimension, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.constraints.remove(&dimension);
        } else {
            self.constraints.insert(dimension, values);
        }
    }

    pub fn clear(&mut self, dimension: Dimension) {
        self.constraints.remove(&dimension);
    }

    /// Accepted values for a dimension; `None` when unconstrained.
    pub fn values(&self, dimension: Dimension) -> Option<&BTreeSet<String>> {
        self.constraints.get(&dimension)
    }

    pub fn is_active(&self, dimension: Dimension) -> bool {
        self.constraints.contains_key(&dimension)
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constrained dimensions with their accepted values.
    pub fn active(&self) -> impl Iterator<Item = (Dimension, &BTreeSet<String>)> {
        self.constraints
            .iter()
            .map(|(dimension, values)| (*dimension, values))
    }

    /// Copy of this set with one dimension's constraint removed.
    #[must_use]
    pub fn without(&self, dimension: Dimension) -> Self {
        let mut other = self.clone();
        other.clear(dimension);
        other
    }

    /// Copy of this set keeping only the given dimensions.
    ///
    /// Used to apply just the tiers above a dimension in a hierarchical
    /// cascade (e.g. only `fuel_origin` when resolving `fuel_type`).
    #[must_use]
    pub fn restricted_to(&self, dimensions: &[Dimension]) -> Self {
        Self {
            constraints: self
                .constraints
                .iter()
                .filter(|(dimension, _)| dimensions.contains(dimension))
                .map(|(dimension, values)| (*dimension, values.clone()))
                .collect(),
        }
    }

    /// Parse a `dimension=value[,value...]` assignment and add it to the set.
    ///
    /// Values are trimmed; empty values are dropped, so `state=` clears the
    /// state constraint.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<Dimension> {
        let (name, raw_values) = assignment
            .split_once('=')
            .ok_or_else(|| ModelError::InvalidFilter(assignment.to_string()))?;
        let dimension: Dimension = name.parse()?;
        let values: Vec<&str> = raw_values
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect();
        self.set(dimension, values);
        Ok(dimension)
    }

    /// Build a filter set from a list of assignments. Later assignments for
    /// the same dimension replace earlier ones.
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self> {
        let mut set = Self::new();
        for assignment in assignments {
            set.apply_assignment(assignment.as_ref())?;
        }
        Ok(set)
    }
}
