//! Status-check adapters for the task waiter
//!
//! Each constructor binds a task (and, for nested endpoints, its parent
//! resource) to a closure that performs exactly one lookup per call.

use futures::future::{BoxFuture, FutureExt};

use crate::ecloud::resources::ResourceKind;
use crate::ecloud::{EcloudClient, TaskStatus};
use crate::error::{EcloudError, Result};

/// Status check for a top-level task (`/tasks/{id}`)
pub fn task_status_check<'a>(
    client: &'a EcloudClient,
    task_id: &'a str,
) -> impl FnMut() -> BoxFuture<'a, Result<TaskStatus>> + 'a {
    move || {
        async move {
            match client.get_task(task_id).await? {
                Some(task) => Ok(task.status),
                None => Err(EcloudError::NotFound(format!(
                    "Task [{}] not found",
                    task_id
                ))),
            }
        }
        .boxed()
    }
}

/// Status check for a task under a resource (`/{kind}/{id}/tasks`)
pub fn resource_task_status_check<'a>(
    client: &'a EcloudClient,
    kind: ResourceKind,
    resource_id: &'a str,
    task_id: &'a str,
) -> impl FnMut() -> BoxFuture<'a, Result<TaskStatus>> + 'a {
    move || {
        async move {
            match client.get_resource_task(kind, resource_id, task_id).await? {
                Some(task) => Ok(task.status),
                None => Err(EcloudError::NotFound(format!(
                    "Task [{}] not found for {} [{}]",
                    task_id,
                    kind.label(),
                    resource_id
                ))),
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_task_status_check_one_request_per_call() {
        let mock_server = MockServer::start().await;
        let client = EcloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/ecloud/v2/tasks/task-abcdef12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "task-abcdef12", "status": "in-progress"}
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let mut check = task_status_check(&client, "task-abcdef12");
        assert_eq!(check().await.unwrap(), TaskStatus::InProgress);
        assert_eq!(check().await.unwrap(), TaskStatus::InProgress);
    }

    #[tokio::test]
    async fn test_task_status_check_missing_task() {
        let mock_server = MockServer::start().await;
        let client = EcloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/ecloud/v2/tasks/task-gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let mut check = task_status_check(&client, "task-gone");
        let err = check().await.unwrap_err();
        assert_eq!(err.to_string(), "Task [task-gone] not found");
    }

    #[tokio::test]
    async fn test_resource_task_status_check() {
        let mock_server = MockServer::start().await;
        let client = EcloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/ecloud/v2/routers/rtr-1/tasks"))
            .and(query_param("id:eq", "task-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "task-1", "status": "failed"}]
            })))
            .mount(&mock_server)
            .await;

        let mut check = resource_task_status_check(&client, ResourceKind::Router, "rtr-1", "task-1");
        assert_eq!(check().await.unwrap(), TaskStatus::Failed);
    }

    #[tokio::test]
    async fn test_resource_task_status_check_missing_task() {
        let mock_server = MockServer::start().await;
        let client = EcloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/ecloud/v2/networks/net-1/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
            .mount(&mock_server)
            .await;

        let mut check =
            resource_task_status_check(&client, ResourceKind::Network, "net-1", "task-1");
        let err = check().await.unwrap_err();
        assert_eq!(err.to_string(), "Task [task-1] not found for network [net-1]");
    }
}
