//! Task command definitions and arguments

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::defaults;

/// How `task list` and `task show` render tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns: ID, resource, name, status, created
    Table,
    /// One task per line, RFC 4180 quoting
    Csv,
    /// Array of task objects
    Json,
    /// Sequence of task mappings
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Actions for the top-level 'task' command
#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List tasks
    #[command(visible_alias = "ls")]
    List(TaskListArgs),

    /// Show one or more tasks
    #[command(visible_alias = "get")]
    Show(TaskShowArgs),

    /// Wait for one or more tasks to reach a status
    Wait(TaskWaitArgs),
}

/// Arguments for 'task list'
#[derive(Parser, Debug)]
pub struct TaskListArgs {
    /// Filter by status (complete, failed, in-progress)
    #[arg(long)]
    pub status: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit the header row (table and CSV)
    #[arg(long, default_value_t = false)]
    pub no_header: bool,
}

/// Arguments for 'task show'
#[derive(Parser, Debug)]
pub struct TaskShowArgs {
    /// Task IDs (task-xxx)
    #[arg(required = true)]
    pub task_ids: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit the header row (table and CSV)
    #[arg(long, default_value_t = false)]
    pub no_header: bool,
}

/// Arguments for 'task wait'
#[derive(Parser, Debug)]
pub struct TaskWaitArgs {
    /// Task IDs (task-xxx), waited on in the order given
    #[arg(required = true)]
    pub task_ids: Vec<String>,

    /// Status to wait for (complete, failed, in-progress)
    #[arg(long, default_value = defaults::WAIT_STATUS)]
    pub status: String,
}
