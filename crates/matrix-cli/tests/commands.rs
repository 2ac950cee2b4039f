//! Integration tests for the command runners.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use matrix_cli::cli::{DataArgs, HistoryArgs, OptionsArgs, OptionsFormatArg, SummaryArgs};
use matrix_cli::commands::{load_options, resolve_filters, run_history, run_options, run_summary};
use matrix_cli::render::{frame_rows, options_json};
use matrix_ingest::read_csv_frame;
use matrix_model::{DashboardOptions, Dimension};

const PLANTS_CSV: &str = "\
status,state,fuel_origin,fuel_type,fuel_type_name,generator_type,installed_power,commission_date
Operação,SP,Hídrica,Potencial hidráulico,Potencial hidráulico,UHE,100,1990-01-01
Operação,RJ,Hídrica,Potencial hidráulico,Potencial hidráulico,UHE,200,1992-06-30
Operação,SP,Solar,Radiação solar,Radiação solar,UFV,50,2018-03-01
Construção não iniciada,BA,Eólica,Cinética do vento,Cinética do vento,EOL,300,
Construção não iniciada,RN,Eólica,Cinética do vento,Cinética do vento,EOL,400,
";

fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", content).expect("write temp file");
    file
}

fn data_args(path: PathBuf, filters: &[&str]) -> DataArgs {
    DataArgs {
        data: path,
        filters: filters.iter().map(|filter| (*filter).to_string()).collect(),
    }
}

#[test]
fn summary_groups_operating_plants_by_fuel_origin() {
    let data = create_temp_file(PLANTS_CSV);
    let args = SummaryArgs {
        data: data_args(data.path().to_path_buf(), &["status=Operação"]),
        group_by: Vec::new(),
        measures: Vec::new(),
        output: None,
    };

    let summary = run_summary(&args, &DashboardOptions::default()).expect("run summary");

    assert_eq!(
        frame_rows(&summary).expect("render rows"),
        vec![vec!["Hídrica", "300"], vec!["Solar", "50"]]
    );
}

#[test]
fn summary_writes_csv_when_output_is_given() {
    let data = create_temp_file(PLANTS_CSV);
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = dir.path().join("summary.csv");
    let args = SummaryArgs {
        data: data_args(data.path().to_path_buf(), &[]),
        group_by: vec![Dimension::Status, Dimension::State],
        measures: vec!["installed_power".to_string()],
        output: Some(output.clone()),
    };

    run_summary(&args, &DashboardOptions::default()).expect("run summary");

    let written = read_csv_frame(&output).expect("read summary back");
    let names: Vec<&str> = written
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, vec!["status", "state", "installed_power"]);
    assert_eq!(written.height(), 5);
}

#[test]
fn summary_with_unknown_measure_fails() {
    let data = create_temp_file(PLANTS_CSV);
    let args = SummaryArgs {
        data: data_args(data.path().to_path_buf(), &[]),
        group_by: Vec::new(),
        measures: vec!["capacity_factor".to_string()],
        output: None,
    };

    let error = run_summary(&args, &DashboardOptions::default()).unwrap_err();

    assert!(format!("{error:#}").contains("capacity_factor"));
}

#[test]
fn options_ignore_own_filter() {
    let data = create_temp_file(PLANTS_CSV);
    let args = OptionsArgs {
        data: data_args(data.path().to_path_buf(), &["state=SP", "fuel_origin=Solar"]),
        dimension: Dimension::FuelOrigin,
        format: OptionsFormatArg::Json,
    };

    let options = run_options(&args, &DashboardOptions::default()).expect("run options");

    assert_eq!(options, vec!["Hídrica", "Solar"]);
    insta::assert_snapshot!(options_json(Dimension::FuelOrigin, &options).unwrap(), @r#"
    {
      "dimension": "fuel_origin",
      "options": [
        "Hídrica",
        "Solar"
      ]
    }
    "#);
}

#[test]
fn history_follows_configured_category() {
    let data = create_temp_file(PLANTS_CSV);
    let options = DashboardOptions::default().with_history_category(Dimension::GeneratorType);
    let args = HistoryArgs {
        data: data_args(data.path().to_path_buf(), &[]),
        category: None,
        output: None,
    };

    let history = run_history(&args, &options).expect("run history");

    assert!(history.column("generator_type").is_ok());
    assert_eq!(history.height(), (2018 - 1990 + 1) * 3);
}

#[test]
fn command_line_filters_replace_configured_ones() {
    let config = create_temp_file("[filters]\nstate = [\"SP\"]\nstatus = [\"Operação\"]\n");
    let options = load_options(Some(config.path())).expect("load config");
    let args = data_args(PathBuf::from("unused.csv"), &["state=RJ,BA", "status="]);

    let filters = resolve_filters(&options, &args).expect("resolve filters");

    let states: Vec<&str> = filters
        .values(Dimension::State)
        .expect("state filter")
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(states, vec!["BA", "RJ"]);
    assert!(!filters.is_active(Dimension::Status));
}

#[test]
fn malformed_filter_is_reported() {
    let args = data_args(PathBuf::from("unused.csv"), &["state"]);

    let error = resolve_filters(&DashboardOptions::default(), &args).unwrap_err();

    assert!(error.to_string().contains("invalid --filter 'state'"));
}
