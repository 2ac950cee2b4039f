//! Filtering, aggregation and cascading-options engine.
//!
//! Pure functions over an immutable plant table (a Polars `DataFrame` with the
//! canonical schema from [`matrix_model::schema`]):
//!
//! - **filter**: keep rows matching a [`FilterSet`](matrix_model::FilterSet)
//! - **aggregate**: group by categorical columns and sum measures
//! - **cascade**: option lists for dependent filter widgets
//! - **selection**: non-empty selection guard and per-session state
//! - **totals**: installed power per operating status
//! - **history**: cumulative installed power per commission year

pub mod aggregate;
pub mod cascade;
pub mod error;
pub mod filter;
mod frame;
pub mod history;
pub mod selection;
pub mod totals;

pub use aggregate::group_and_sum;
pub use cascade::{cascade_options, distinct_values, valid_options};
pub use error::{EngineError, Result};
pub use filter::apply_filters;
pub use history::{commission_year, cumulative_history};
pub use selection::{SelectionState, ensure_nonempty};
pub use totals::{StatusTotal, installed_for, status_totals};
