//! eCloud API client module
//!
//! This module provides functionality to interact with the eCloud v2 API.

mod client;
mod credentials;
pub mod helpers;
pub mod resources;
pub mod tasks;
pub mod traits;

pub use client::EcloudClient;
pub use credentials::ApiKeyResolver;
pub use helpers::{collect_item_results, fetch_each, log_completion, CommandOutcome};
pub use resources::ResourceKind;
pub use tasks::{run_resource_task_command, run_task_command, Task, TaskStatus};
pub use traits::{PaginatedResponse, Pagination, PaginationMeta};
