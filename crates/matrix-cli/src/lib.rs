//! CLI library components for the electric matrix dashboard.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
