//! Terminal, CSV and JSON rendering of engine results.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{Column, CsvWriter, DataFrame, DataType, SerWriter};
use serde_json::json;

use matrix_engine::StatusTotal;
use matrix_model::Dimension;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn total_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string())
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Formats a floating-point number without trailing zeros after the point.
pub fn format_numeric(value: f64) -> String {
    let text = format!("{value}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Cell text of one column. Floats drop trailing zeros; nulls are empty.
fn column_cells(column: &Column) -> Result<Vec<String>> {
    if column.dtype().is_float() {
        let casted = column.cast(&DataType::Float64)?;
        Ok(casted
            .f64()?
            .into_iter()
            .map(|value| value.map(format_numeric).unwrap_or_default())
            .collect())
    } else {
        let casted = column.cast(&DataType::String)?;
        Ok(casted
            .str()?
            .into_iter()
            .map(|value| value.unwrap_or_default().to_string())
            .collect())
    }
}

/// Cell text for every row, in column order.
pub fn frame_rows(df: &DataFrame) -> Result<Vec<Vec<String>>> {
    let columns = df
        .get_columns()
        .iter()
        .map(column_cells)
        .collect::<Result<Vec<_>>>()?;
    Ok((0..df.height())
        .map(|row| {
            columns
                .iter()
                .map(|cells| cells.get(row).cloned().unwrap_or_default())
                .collect()
        })
        .collect())
}

/// Sum of a numeric column, skipping nulls.
pub fn column_total(df: &DataFrame, name: &str) -> Option<f64> {
    let casted = df.column(name).ok()?.cast(&DataType::Float64).ok()?;
    Some(casted.f64().ok()?.into_iter().flatten().sum())
}

fn is_numeric(df: &DataFrame, index: usize) -> bool {
    df.get_columns()
        .get(index)
        .is_some_and(|column| column.dtype().is_float() || column.dtype().is_integer())
}

/// Table of a DataFrame with right-aligned numeric columns.
///
/// When `totals` is set, a TOTAL row sums every numeric column.
pub fn frame_table(df: &DataFrame, totals: bool) -> Result<Table> {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in frame_rows(df)? {
        table.add_row(row);
    }
    if totals && df.height() > 0 {
        let cells: Vec<Cell> = df
            .get_columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                if index == 0 {
                    total_cell("TOTAL")
                } else if is_numeric(df, index) {
                    total_cell(format_numeric(
                        column_total(df, column.name().as_str()).unwrap_or(0.0),
                    ))
                } else {
                    Cell::new("")
                }
            })
            .collect();
        table.add_row(cells);
    }
    for index in 0..df.width() {
        if is_numeric(df, index) {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    Ok(table)
}

/// Megawatts with two decimals.
pub fn format_mw(value: f64) -> String {
    format!("{value:.2}")
}

pub fn totals_table(totals: &[StatusTotal]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Metric"),
        header_cell("Installed (MW)"),
    ]);
    apply_table_style(&mut table);
    for total in totals {
        let metric = total.status.map_or("-", |status| status.metric_title());
        table.add_row(vec![
            Cell::new(&total.label),
            Cell::new(metric),
            Cell::new(format_mw(total.installed_mw)),
        ]);
    }
    let overall: f64 = totals.iter().map(|total| total.installed_mw).sum();
    table.add_row(vec![
        total_cell("TOTAL"),
        Cell::new(""),
        total_cell(format_mw(overall)),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

pub fn options_table(dimension: Dimension, options: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(dimension.label())]);
    apply_table_style(&mut table);
    for option in options {
        table.add_row(vec![option.as_str()]);
    }
    table
}

/// Options as a JSON document: `{"dimension": ..., "options": [...]}`.
pub fn options_json(dimension: Dimension, options: &[String]) -> Result<String> {
    let document = json!({
        "dimension": dimension,
        "options": options,
    });
    serde_json::to_string_pretty(&document).context("serialize options")
}

pub fn dimensions_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dimension"),
        header_cell("Column"),
        header_cell("Category"),
    ]);
    apply_table_style(&mut table);
    for dimension in Dimension::ALL {
        let category = if Dimension::CATEGORIES.contains(&dimension) {
            "yes"
        } else {
            "-"
        };
        table.add_row(vec![dimension.label(), dimension.column(), category]);
    }
    table
}

/// Write a DataFrame as CSV with a header row.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create output file {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write CSV {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn summary_df() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("fuel_type".into(), vec!["Hydro", "Solar"]).into_column(),
            Series::new("installed_power".into(), vec![300.0, 50.5]).into_column(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn rows_format_floats_without_trailing_zeros() {
        let rows = frame_rows(&summary_df()).unwrap();
        assert_eq!(rows, vec![vec!["Hydro", "300"], vec!["Solar", "50.5"]]);
    }

    #[test]
    fn column_total_sums_numeric_column() {
        assert_eq!(column_total(&summary_df(), "installed_power"), Some(350.5));
        assert_eq!(column_total(&summary_df(), "missing"), None);
    }

    #[test]
    fn frame_table_adds_total_row() {
        let rendered = frame_table(&summary_df(), true).unwrap().to_string();
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("350.5"));
    }

    #[test]
    fn format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(300.0), "300");
        assert_eq!(format_numeric(12.50), "12.5");
        assert_eq!(format_numeric(1000.0), "1000");
    }

    #[test]
    fn megawatts_use_two_decimals() {
        assert_eq!(format_mw(1.5), "1.50");
        assert_eq!(format_mw(0.0), "0.00");
    }
}
