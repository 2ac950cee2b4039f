//! CLI argument definitions for `matrix-dash`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use matrix_model::Dimension;

#[derive(Parser)]
#[command(
    name = "matrix-dash",
    version,
    about = "Explore the Brazilian electric matrix plant dataset",
    long_about = "Filter, group and summarize the power plant dataset.\n\n\
                  Filters select plants by status, state, fuel and generator type;\n\
                  summaries sum installed power per group."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Dashboard defaults (grouping, measures, filters) in TOML.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter the dataset and sum measures per group.
    Summary(SummaryArgs),

    /// List the values a filter can still take given the other filters.
    Options(OptionsArgs),

    /// Installed power per operating status, in MW.
    Totals(DataArgs),

    /// Cumulative installed power of operating plants per year.
    History(HistoryArgs),

    /// List the filterable dimensions.
    Dimensions,
}

/// Dataset location and active filters, shared by every data command.
#[derive(Args, Clone)]
pub struct DataArgs {
    /// Path to the processed plant dataset (CSV with header).
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Restrict a dimension to a set of values, e.g. `--filter state=SP,RJ`.
    ///
    /// Repeat for several dimensions. An empty value list clears the
    /// dimension's configured filter.
    #[arg(long = "filter", value_name = "DIMENSION=VALUES")]
    pub filters: Vec<String>,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Grouping dimensions (default: configured grouping).
    #[arg(
        long = "group-by",
        value_name = "DIMENSION",
        value_delimiter = ',',
        value_parser = parse_dimension
    )]
    pub group_by: Vec<Dimension>,

    /// Measure columns to sum (default: configured measures).
    #[arg(long = "measure", value_name = "COLUMN")]
    pub measures: Vec<String>,

    /// Write the summary as CSV instead of printing a table.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Dimension whose options are listed.
    #[arg(value_name = "DIMENSION", value_parser = parse_dimension)]
    pub dimension: Dimension,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OptionsFormatArg,
}

#[derive(Args)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Category splitting the series (default: configured history category).
    #[arg(long = "category", value_name = "DIMENSION", value_parser = parse_dimension)]
    pub category: Option<Dimension>,

    /// Write the series as CSV instead of printing a table.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OptionsFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_dimension(value: &str) -> Result<Dimension, String> {
    value.parse().map_err(|error| format!("{error}"))
}
