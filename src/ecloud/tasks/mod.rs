//! Tasks module

mod api;
pub mod checks;
mod commands;
mod models;

pub use checks::{resource_task_status_check, task_status_check};
pub use commands::{run_resource_task_command, run_task_command};
pub use models::{Task, TaskStatus};
