//! CLI argument parsing

mod resource;
mod task;

use clap::{Parser, Subcommand};

use crate::config::defaults;
use crate::ecloud::{ResourceKind, TaskStatus};
use crate::error::Result;

pub use resource::{ResourceAction, ResourceTaskAction, ResourceTaskWaitArgs};
pub use task::{OutputFormat, TaskAction, TaskListArgs, TaskShowArgs, TaskWaitArgs};

/// eCloud command-line client
#[derive(Parser, Debug)]
#[command(name = "ecloudctl")]
#[command(version)]
#[command(about = "Manage eCloud infrastructure from the command line", long_about = None)]
pub struct Cli {
    /// API key (overrides env vars and settings file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URI
    #[arg(long, global = true)]
    pub api_uri: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners or interactive output
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Seconds between task status polls
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub wait_interval: Option<u64>,

    /// Seconds before a task wait gives up
    #[arg(long, global = true)]
    pub wait_timeout: Option<u64>,

    /// Maximum number of status polls per task
    #[arg(long, global = true)]
    pub wait_max_attempts: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands (nouns)
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tasks (asynchronous operations)
    #[command(visible_alias = "tasks")]
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Instance sub-resources
    Instance {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Network sub-resources
    Network {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Router sub-resources
    Router {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// VPC sub-resources
    Vpc {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Firewall policy sub-resources
    FirewallPolicy {
        #[command(subcommand)]
        action: ResourceAction,
    },
}

impl Command {
    /// The resource kind and action for nested resource commands
    pub fn resource(&self) -> Option<(ResourceKind, &ResourceAction)> {
        match self {
            Command::Task { .. } => None,
            Command::Instance { action } => Some((ResourceKind::Instance, action)),
            Command::Network { action } => Some((ResourceKind::Network, action)),
            Command::Router { action } => Some((ResourceKind::Router, action)),
            Command::Vpc { action } => Some((ResourceKind::Vpc, action)),
            Command::FirewallPolicy { action } => Some((ResourceKind::FirewallPolicy, action)),
        }
    }

    /// Parse the `--status` argument, if the command takes one
    ///
    /// Runs before settings are resolved so bad input is reported first.
    pub fn parse_status(&self) -> Result<Option<TaskStatus>> {
        let raw = match self {
            Command::Task {
                action: TaskAction::List(args),
            } => args.status.as_deref(),
            Command::Task {
                action: TaskAction::Wait(args),
            } => Some(args.status.as_str()),
            Command::Task {
                action: TaskAction::Show(_),
            } => None,
            command => match command.resource() {
                Some((_, ResourceAction::Task { action: ResourceTaskAction::Wait(args) })) => {
                    Some(args.status.as_str())
                }
                None => None,
            },
        };
        raw.map(str::parse::<TaskStatus>).transpose()
    }
}
