//! Task API operations

use log::debug;

use crate::config::api;
use crate::ecloud::resources::ResourceKind;
use crate::ecloud::traits::ApiListResponse;
use crate::ecloud::EcloudClient;
use crate::error::Result;

use super::models::{Task, TaskStatus};

impl EcloudClient {
    /// Get all top-level tasks (follows pagination)
    ///
    /// `status` is applied server-side with a `status:eq` filter.
    pub async fn get_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let mut path = format!("/{}", api::TASKS);
        if let Some(status) = status {
            path.push_str(&format!("?status:eq={}", status));
        }
        let tasks = self
            .fetch_all_pages::<Task, ApiListResponse<Task>>(&path, "tasks")
            .await?;
        debug!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Get a single top-level task by ID
    ///
    /// Returns `None` when the API answers 404.
    pub async fn get_task(&self, task_id: &str) -> Result<Option<Task>> {
        let path = format!("/{}/{}", api::TASKS, urlencoding::encode(task_id));
        self.fetch_resource_by_path(&path, &format!("task [{}]", task_id))
            .await
    }

    /// Get a task through a resource's nested tasks endpoint
    ///
    /// The nested endpoints only list, so the task is located with an
    /// `id:eq` filter. Returns `None` when nothing matches.
    pub async fn get_resource_task(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        task_id: &str,
    ) -> Result<Option<Task>> {
        let url = format!(
            "{}/{}/{}/{}?id:eq={}",
            self.base_url(),
            kind.path(),
            urlencoding::encode(resource_id),
            api::TASKS,
            urlencoding::encode(task_id)
        );

        debug!("Fetching {} task from: {}", kind.label(), url);

        let response = self.get(&url).send().await?;
        let context = format!("tasks for {} [{}]", kind.label(), resource_id);
        let tasks: ApiListResponse<Task> = self.parse_api_response(response, &context).await?;

        Ok(tasks.data.into_iter().find(|t| t.id == task_id))
    }
}
