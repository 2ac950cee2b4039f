//! Data model for the Brazilian electric matrix dashboard.
//!
//! - **schema**: canonical column names and legacy header aliases
//! - **dimension**: categorical columns that filters and groupings refer to
//! - **status**: plant operating status
//! - **filter**: per-dimension membership constraints
//! - **options**: dashboard configuration

pub mod dimension;
pub mod error;
pub mod filter;
pub mod options;
pub mod schema;
pub mod status;

pub use dimension::Dimension;
pub use error::{ModelError, Result};
pub use filter::FilterSet;
pub use options::DashboardOptions;
pub use status::PlantStatus;
