#![allow(dead_code)]

use std::collections::BTreeMap;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

/// One fixture plant: status, state, fuel origin, fuel type, generator type,
/// installed power, commission date.
pub type Plant<'a> = (&'a str, &'a str, &'a str, &'a str, &'a str, f64, Option<&'a str>);

pub fn plants_df(plants: &[Plant<'_>]) -> DataFrame {
    let status: Vec<&str> = plants.iter().map(|plant| plant.0).collect();
    let state: Vec<&str> = plants.iter().map(|plant| plant.1).collect();
    let fuel_origin: Vec<&str> = plants.iter().map(|plant| plant.2).collect();
    let fuel_type: Vec<&str> = plants.iter().map(|plant| plant.3).collect();
    let generator_type: Vec<&str> = plants.iter().map(|plant| plant.4).collect();
    let installed_power: Vec<f64> = plants.iter().map(|plant| plant.5).collect();
    let commission_date: Vec<Option<&str>> = plants.iter().map(|plant| plant.6).collect();
    let columns: Vec<Column> = vec![
        Series::new("status".into(), status).into_column(),
        Series::new("state".into(), state).into_column(),
        Series::new("fuel_origin".into(), fuel_origin).into_column(),
        Series::new("fuel_type".into(), fuel_type.clone()).into_column(),
        Series::new("fuel_type_name".into(), fuel_type).into_column(),
        Series::new("generator_type".into(), generator_type).into_column(),
        Series::new("installed_power".into(), installed_power).into_column(),
        Series::new("commission_date".into(), commission_date).into_column(),
    ];
    DataFrame::new(columns).expect("build plants frame")
}

/// The five-plant table used across the engine tests.
pub fn sample_plants() -> DataFrame {
    plants_df(&[
        ("operating", "SP", "Fossil", "Hydro", "UHE", 100.0, Some("1990-01-01")),
        ("operating", "RJ", "Fossil", "Hydro", "UHE", 200.0, Some("1992-06-30")),
        ("operating", "SP", "Solar", "Solar", "UFV", 50.0, Some("2018-03-01")),
        ("planned", "BA", "Wind", "Wind", "EOL", 300.0, None),
        ("planned", "RN", "Wind", "Wind", "EOL", 400.0, None),
    ])
}

pub fn strings(df: &DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .expect("column")
        .str()
        .expect("string column")
        .into_iter()
        .map(|value| value.unwrap_or_default().to_string())
        .collect()
}

pub fn floats(df: &DataFrame, column: &str) -> Vec<f64> {
    df.column(column)
        .expect("column")
        .f64()
        .expect("float column")
        .into_iter()
        .map(|value| value.unwrap_or_default())
        .collect()
}

/// Summary keyed by one string column with one float measure.
pub fn keyed(df: &DataFrame, key: &str, measure: &str) -> BTreeMap<String, f64> {
    strings(df, key)
        .into_iter()
        .zip(floats(df, measure))
        .collect()
}
