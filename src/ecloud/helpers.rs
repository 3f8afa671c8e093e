//! Helper functions for commands that fan out over several IDs
//!
//! Per-item failures are printed and collected instead of aborting the
//! command; `CommandOutcome` carries them back to `main`.

use futures::future::join_all;
use std::future::Future;

use crate::error::EcloudError;
use crate::wait::WaitSummary;

/// Per-item failures of one command invocation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub failures: Vec<String>,
}

impl CommandOutcome {
    /// Outcome with no per-item failures
    pub fn success() -> Self {
        Self::default()
    }

    /// True when at least one item failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl From<WaitSummary> for CommandOutcome {
    fn from(summary: WaitSummary) -> Self {
        Self {
            failures: summary.failed.into_iter().map(|f| f.message).collect(),
        }
    }
}

/// Fetch one item per ID concurrently
///
/// Results come back in the same order as `ids`.
pub async fn fetch_each<T, F, Fut>(ids: &[String], fetcher: F) -> Vec<Result<T, (String, EcloudError)>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, (String, EcloudError)>>,
{
    join_all(ids.iter().cloned().map(fetcher)).await
}

/// Split fetch results into successes and printed failure messages
pub fn collect_item_results<T>(
    results: Vec<Result<T, (String, EcloudError)>>,
    resource_name: &str,
) -> (Vec<T>, Vec<String>) {
    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for result in results {
        match result {
            Ok(item) => successes.push(item),
            Err((id, e)) => {
                let msg = format!("Error retrieving {} [{}]: {}", resource_name, id, e);
                eprintln!("{}", msg);
                failures.push(msg);
            }
        }
    }

    (successes, failures)
}

/// Log completion status to info log
pub fn log_completion(outcome: &CommandOutcome) {
    if outcome.has_failures() {
        log::info!("Completed with {} error(s)", outcome.failures.len());
    } else {
        log::info!("Completed successfully");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wait::WaitFailure;

    #[test]
    fn test_collect_item_results_all_success() {
        let results: Vec<Result<i32, (String, EcloudError)>> = vec![Ok(1), Ok(2), Ok(3)];
        let (successes, failures) = collect_item_results(results, "task");
        assert_eq!(successes, vec![1, 2, 3]);
        assert!(failures.is_empty());
    }

    #[test]
    fn test_collect_item_results_with_errors() {
        let results: Vec<Result<i32, (String, EcloudError)>> = vec![
            Ok(1),
            Err((
                "task-2".to_string(),
                EcloudError::NotFound("Task [task-2] not found".to_string()),
            )),
            Ok(3),
        ];
        let (successes, failures) = collect_item_results(results, "task");
        assert_eq!(successes, vec![1, 3]);
        assert_eq!(
            failures,
            vec!["Error retrieving task [task-2]: Task [task-2] not found".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_each_preserves_order() {
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let results = fetch_each(&ids, |id| async move {
            if id == "b" {
                Err((id, EcloudError::NotFound("missing".to_string())))
            } else {
                Ok(id.to_uppercase())
            }
        })
        .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), "A");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap(), "C");
    }

    #[test]
    fn test_outcome_from_wait_summary() {
        let summary = WaitSummary {
            succeeded: vec!["task-2".to_string()],
            failed: vec![WaitFailure {
                task_id: "task-1".to_string(),
                message: "Error waiting for task [task-1]: boom".to_string(),
            }],
        };
        let outcome = CommandOutcome::from(summary);
        assert!(outcome.has_failures());
        assert_eq!(outcome.failures, vec!["Error waiting for task [task-1]: boom"]);
    }

    #[test]
    fn test_success_outcome() {
        let outcome = CommandOutcome::success();
        assert!(!outcome.has_failures());
        log_completion(&outcome);
    }
}
