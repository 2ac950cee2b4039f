//! Plant dataset ingestion.
//!
//! Loads the processed dataset from CSV into a Polars DataFrame with the
//! canonical column names from [`matrix_model::schema`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use matrix_ingest::read_plant_table;
//!
//! let plants = read_plant_table(Path::new("data/processed/plants.csv"))?;
//! ```

mod error;
mod normalize;
mod reader;

pub use error::{IngestError, Result};
pub use normalize::{
    cast_schema, normalize_columns, required_columns, validate_measures, validate_schema,
};
pub use reader::{read_csv_frame, read_plant_table};
