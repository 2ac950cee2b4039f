use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use matrix_engine::{SelectionState, cumulative_history, status_totals};
use matrix_ingest::read_plant_table;
use matrix_model::{DashboardOptions, FilterSet};

use crate::cli::{DataArgs, HistoryArgs, OptionsArgs, OptionsFormatArg, SummaryArgs};
use crate::render::{
    dimensions_table, frame_table, options_json, options_table, totals_table, write_csv,
};

/// Configured defaults, or built-in ones when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<DashboardOptions> {
    match path {
        Some(path) => DashboardOptions::load(path)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(DashboardOptions::default()),
    }
}

/// Configured filters with the command-line assignments applied on top.
///
/// A dimension named on the command line replaces its configured values.
pub fn resolve_filters(options: &DashboardOptions, args: &DataArgs) -> Result<FilterSet> {
    let mut filters = options.filters.clone();
    for assignment in &args.filters {
        filters
            .apply_assignment(assignment)
            .with_context(|| format!("invalid --filter '{assignment}'"))?;
    }
    Ok(filters)
}

/// Load the dataset and start a session with the resolved filters applied.
fn open_session(
    args: &DataArgs,
    options: &DashboardOptions,
) -> Result<(DataFrame, SelectionState)> {
    let source = read_plant_table(&args.data)
        .with_context(|| format!("load dataset {}", args.data.display()))?;
    let filters = resolve_filters(options, args)?;
    let state = SelectionState::new(&source, options.grouping.clone())
        .apply(&source, filters)
        .context("apply filters")?;
    Ok((source, state))
}

/// Filter, group and sum. Returns the summary written or printed.
pub fn run_summary(args: &SummaryArgs, options: &DashboardOptions) -> Result<DataFrame> {
    let span = info_span!("summary", data = %args.data.data.display());
    let _guard = span.enter();
    let (_, state) = open_session(&args.data, options)?;
    let state = state.regroup(args.group_by.clone());
    let measures = if args.measures.is_empty() {
        options.measures.clone()
    } else {
        args.measures.clone()
    };
    let mut summary = state.summary(&measures).context("summarize")?;
    info!(
        rows = state.filtered().height(),
        groups = summary.height(),
        "summary complete"
    );
    match &args.output {
        Some(path) => write_csv(&mut summary, path)?,
        None => println!("{}", frame_table(&summary, true)?),
    }
    Ok(summary)
}

/// Options still available for one dimension given the other filters.
pub fn run_options(args: &OptionsArgs, options: &DashboardOptions) -> Result<Vec<String>> {
    let span = info_span!("options", dimension = %args.dimension);
    let _guard = span.enter();
    let (source, state) = open_session(&args.data, options)?;
    let values = state
        .options_for(&source, args.dimension)
        .context("resolve options")?;
    match args.format {
        OptionsFormatArg::Table => println!("{}", options_table(args.dimension, &values)),
        OptionsFormatArg::Json => println!("{}", options_json(args.dimension, &values)?),
    }
    Ok(values)
}

pub fn run_totals(args: &DataArgs, options: &DashboardOptions) -> Result<()> {
    let span = info_span!("totals", data = %args.data.display());
    let _guard = span.enter();
    let (_, state) = open_session(args, options)?;
    let totals = status_totals(state.filtered()).context("compute status totals")?;
    info!(statuses = totals.len(), "totals complete");
    println!("{}", totals_table(&totals));
    Ok(())
}

pub fn run_history(args: &HistoryArgs, options: &DashboardOptions) -> Result<DataFrame> {
    let category = args.category.unwrap_or(options.history_category);
    let span = info_span!("history", category = %category);
    let _guard = span.enter();
    let (_, state) = open_session(&args.data, options)?;
    let mut history =
        cumulative_history(state.filtered(), category).context("build history")?;
    info!(points = history.height(), "history complete");
    match &args.output {
        Some(path) => write_csv(&mut history, path)?,
        None => println!("{}", frame_table(&history, false)?),
    }
    Ok(history)
}

pub fn run_dimensions() {
    println!("{}", dimensions_table());
}
