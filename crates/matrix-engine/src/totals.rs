//! Installed power totals per operating status.

use polars::prelude::DataFrame;
use serde::Serialize;

use matrix_model::{PlantStatus, schema};

use crate::aggregate::group_and_sum;
use crate::error::Result;
use crate::frame::{float_column, string_column};

/// Installed power of all plants sharing one raw status label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusTotal {
    /// Status label as stored in the table.
    pub label: String,
    /// Parsed status, `None` for labels the model does not know.
    pub status: Option<PlantStatus>,
    pub installed_kw: f64,
    pub installed_mw: f64,
}

/// Sum installed power per status label.
///
/// Known statuses come first in operating, under construction, planned
/// order; unknown labels follow alphabetically. Rows with a null status are
/// left out.
pub fn status_totals(df: &DataFrame) -> Result<Vec<StatusTotal>> {
    let summary = group_and_sum(df, &[schema::STATUS], &[schema::INSTALLED_POWER])?;
    let labels = string_column(&summary, schema::STATUS)?;
    let powers = float_column(&summary, schema::INSTALLED_POWER)?;

    let mut totals: Vec<StatusTotal> = labels
        .into_iter()
        .zip(&powers)
        .filter_map(|(label, power)| {
            let label = label?;
            let installed_kw = power.unwrap_or(0.0);
            Some(StatusTotal {
                label: label.to_string(),
                status: label.parse().ok(),
                installed_kw,
                installed_mw: installed_kw / 1000.0,
            })
        })
        .collect();
    totals.sort_by(|a, b| {
        (a.status.is_none(), a.status, &a.label).cmp(&(b.status.is_none(), b.status, &b.label))
    });
    Ok(totals)
}

/// Installed power in kW for one status, summing every label that parses to it.
pub fn installed_for(totals: &[StatusTotal], status: PlantStatus) -> f64 {
    totals
        .iter()
        .filter(|total| total.status == Some(status))
        .map(|total| total.installed_kw)
        .sum()
}
