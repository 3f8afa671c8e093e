//! Sequential waits over several task IDs
//!
//! Every ID is attempted, in the order given. A failure is printed and
//! recorded, never propagated: the caller decides the exit code from the
//! returned summary.

use std::future::Future;

use log::{debug, info};

use crate::ecloud::TaskStatus;
use crate::error::Result;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::{wait_for_status, WaitConfig};

/// A single task that did not reach the expected status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitFailure {
    pub task_id: String,
    pub message: String,
}

/// Outcome of waiting on a batch of tasks
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WaitSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<WaitFailure>,
}

impl WaitSummary {
    /// True when at least one task failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Number of tasks waited on
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Wait on each task ID in turn
///
/// `subject` names the task kind in messages (e.g. "task", "instance task").
/// `make_check` builds the status-check closure bound to one task ID.
pub async fn wait_for_tasks<'a, F, C, Fut>(
    task_ids: &'a [String],
    subject: &str,
    config: &WaitConfig,
    expected: TaskStatus,
    quiet: bool,
    mut make_check: F,
) -> WaitSummary
where
    F: FnMut(&'a str) -> C,
    C: FnMut() -> Fut,
    Fut: Future<Output = Result<TaskStatus>>,
{
    let mut summary = WaitSummary::default();

    for task_id in task_ids {
        debug!("Waiting for {} [{}] to reach [{}]", subject, task_id, expected);

        let spinner = create_spinner(
            &format!("Waiting for {} [{}] to reach [{}]...", subject, task_id, expected),
            quiet,
        );

        match wait_for_status(config, expected, make_check(task_id)).await {
            Ok(()) => {
                finish_spinner(spinner, &format!("{} [{}] is {}", subject, task_id, expected));
                summary.succeeded.push(task_id.clone());
            }
            Err(e) => {
                clear_spinner(spinner);
                let message = format!("Error waiting for {} [{}]: {}", subject, task_id, e);
                report_failure(&message);
                summary.failed.push(WaitFailure {
                    task_id: task_id.clone(),
                    message,
                });
            }
        }
    }

    if summary.has_failures() {
        info!(
            "{} of {} waits failed",
            summary.failed.len(),
            summary.attempted()
        );
    } else {
        info!("All {} waits completed successfully", summary.attempted());
    }

    summary
}

/// Print a per-item failure and carry on with the batch
fn report_failure(message: &str) {
    eprintln!("{}", message);
}
