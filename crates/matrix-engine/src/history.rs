//! Historical evolution of installed power.
//!
//! Builds the data behind the stacked area chart: for every commission year
//! between the first and the last one, the running total of installed power
//! of operating plants per category.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, warn};

use matrix_model::{Dimension, PlantStatus, schema};

use crate::error::Result;
use crate::frame::{float_column, string_column};

/// Extract the year from a `YYYY-MM-DD` date, ignoring any time part.
pub fn commission_year(raw: &str) -> Option<i32> {
    let date = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

/// Cumulative installed power per year and category.
///
/// Only operating plants with a parseable commission date count. Every
/// category present anywhere in `df` gets a row for every year from the
/// earliest to the latest commission year; years without new plants repeat
/// the previous total and years before a category's first plant are zero.
///
/// Columns: `year` (Int32), the category column (String),
/// `cumulative_power` (Float64), sorted by year then category.
///
/// # Errors
///
/// [`EngineError::InvalidColumn`](crate::EngineError::InvalidColumn) when
/// the status, category, commission date or installed power column is
/// missing.
pub fn cumulative_history(df: &DataFrame, category: Dimension) -> Result<DataFrame> {
    let category_column = category.column();
    let statuses = string_column(df, schema::STATUS)?;
    let categories = string_column(df, category_column)?;
    let dates = string_column(df, schema::COMMISSION_DATE)?;
    let powers = float_column(df, schema::INSTALLED_POWER)?;

    let universe: BTreeSet<&str> = categories.into_iter().flatten().collect();
    let mut yearly: BTreeMap<(i32, &str), f64> = BTreeMap::new();
    let mut undated = 0usize;

    let rows = statuses
        .into_iter()
        .zip(&categories)
        .zip(&dates)
        .zip(&powers);
    for (((status, category_value), date), power) in rows {
        let operating = status
            .and_then(|status| status.parse::<PlantStatus>().ok())
            .is_some_and(|status| status == PlantStatus::Operating);
        if !operating {
            continue;
        }
        let Some(year) = date.and_then(commission_year) else {
            undated += 1;
            continue;
        };
        let Some(category_value) = category_value else {
            continue;
        };
        *yearly.entry((year, category_value)).or_default() += power.unwrap_or(0.0);
    }
    if undated > 0 {
        warn!(
            undated,
            "operating plants without a parseable commission date left out of history"
        );
    }

    let first_year = yearly.keys().map(|(year, _)| *year).min();
    let last_year = yearly.keys().map(|(year, _)| *year).max();
    let mut years: Vec<i32> = Vec::new();
    let mut names: Vec<String> = Vec::new();
    let mut cumulative: Vec<f64> = Vec::new();
    if let (Some(first), Some(last)) = (first_year, last_year) {
        let mut running: BTreeMap<&str, f64> = universe.iter().map(|name| (*name, 0.0)).collect();
        for year in first..=last {
            for name in &universe {
                let total = running.entry(*name).or_default();
                *total += yearly.get(&(year, *name)).copied().unwrap_or(0.0);
                years.push(year);
                names.push((*name).to_string());
                cumulative.push(*total);
            }
        }
    }
    debug!(
        category = %category,
        points = years.len(),
        "cumulative history built"
    );

    let columns: Vec<Column> = vec![
        Series::new(schema::YEAR.into(), years).into_column(),
        Series::new(category_column.into(), names).into_column(),
        Series::new(schema::CUMULATIVE_POWER.into(), cumulative).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commission_year_accepts_date_and_datetime() {
        assert_eq!(commission_year("1984-05-05"), Some(1984));
        assert_eq!(commission_year("2001-12-31 00:00:00"), Some(2001));
        assert_eq!(commission_year("2001-12-31T08:30:00"), Some(2001));
        assert_eq!(commission_year("05/05/1984"), None);
        assert_eq!(commission_year(""), None);
    }
}
