//! Nested task commands for resources (`<resource> task wait`)

use clap::{Parser, Subcommand};

use crate::config::defaults;

/// Sub-resources reachable from a resource command
#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// Tasks belonging to the resource
    #[command(visible_alias = "tasks")]
    Task {
        #[command(subcommand)]
        action: ResourceTaskAction,
    },
}

/// Actions on a resource's tasks
#[derive(Subcommand, Debug)]
pub enum ResourceTaskAction {
    /// Wait for one or more of the resource's tasks to reach a status
    Wait(ResourceTaskWaitArgs),
}

/// Arguments for '<resource> task wait'
#[derive(Parser, Debug)]
pub struct ResourceTaskWaitArgs {
    /// ID of the resource owning the tasks
    pub resource_id: String,

    /// Task IDs (task-xxx), waited on in the order given
    #[arg(required = true)]
    pub task_ids: Vec<String>,

    /// Status to wait for (complete, failed, in-progress)
    #[arg(long, default_value = defaults::WAIT_STATUS)]
    pub status: String,
}
