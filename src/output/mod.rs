//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod tasks;

pub use tasks::output_tasks;
