//! ecloudctl - Manage eCloud infrastructure from the command line
//!
//! A CLI tool for inspecting and waiting on eCloud tasks.
//!
//! # Features
//!
//! - List and show tasks
//! - Wait for one or more tasks to reach a status
//! - Wait on tasks through instance, network, router, VPC and firewall
//!   policy endpoints
//! - Multiple output formats (table, CSV, JSON, YAML)
//! - Automatic pagination handling
//!
//! # Example
//!
//! ```bash
//! # List in-progress tasks
//! ecloudctl task list --status in-progress
//!
//! # Wait for two tasks to complete
//! ecloudctl task wait task-abcdef12 task-12345678
//!
//! # Wait for a VPC task, polling every 2 seconds
//! ecloudctl vpc task wait vpc-abcdef12 task-abcdef12 --wait-interval 2
//! ```

pub mod cli;
pub mod config;
pub mod ecloud;
pub mod error;
pub mod output;
pub mod settings;
pub mod ui;
pub mod wait;

pub use cli::{Cli, Command, OutputFormat, ResourceAction, TaskAction};
pub use ecloud::{
    log_completion, run_resource_task_command, run_task_command, ApiKeyResolver,
    CommandOutcome, EcloudClient, ResourceKind, Task, TaskStatus,
};
pub use error::{EcloudError, Result, WaitError};
pub use output::output_tasks;
pub use settings::{Settings, SettingsFile, SettingsStore};
pub use wait::{wait_for_status, wait_for_tasks, WaitConfig, WaitSummary};
