//! Task status waiter
//!
//! Polls a status-check closure until the task reaches the expected status,
//! a terminal status that can never match, a lookup error, or the polling
//! budget runs out. The waiter knows nothing about HTTP or resource kinds;
//! callers bind those into the closure (see `ecloud::tasks::checks`).

mod batch;

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::time::{sleep, Instant};

use crate::config::defaults;
use crate::ecloud::TaskStatus;
use crate::error::{Result, WaitError};

pub use batch::{wait_for_tasks, WaitFailure, WaitSummary};

/// Polling policy for a single wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitConfig {
    /// Delay between two status checks
    pub poll_interval: Duration,
    /// Wall-clock ceiling for the whole wait
    pub timeout: Duration,
    /// Optional ceiling on the number of status checks
    pub max_attempts: Option<u32>,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(defaults::WAIT_SLEEP_SECONDS),
            timeout: Duration::from_secs(defaults::WAIT_TIMEOUT_SECONDS),
            max_attempts: None,
        }
    }
}

/// Wait until `check` reports `expected`
///
/// Lookup errors and terminal mismatches end the wait on the spot; only a
/// non-terminal status is polled again after `poll_interval`.
pub async fn wait_for_status<F, Fut>(
    config: &WaitConfig,
    expected: TaskStatus,
    mut check: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<TaskStatus>>,
{
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let status = check()
            .await
            .map_err(|e| WaitError::Lookup(Box::new(e)))?;

        debug!(
            "Poll {}: task status [{}], waiting for [{}]",
            attempts, status, expected
        );

        if status == expected {
            return Ok(());
        }

        if status.is_terminal() {
            return Err(WaitError::TaskFailed(status).into());
        }

        let attempts_exhausted = config.max_attempts.is_some_and(|max| attempts >= max);
        if attempts_exhausted || started.elapsed() + config.poll_interval > config.timeout {
            return Err(WaitError::Timeout {
                elapsed: started.elapsed(),
                attempts,
            }
            .into());
        }

        sleep(config.poll_interval).await;
    }
}
