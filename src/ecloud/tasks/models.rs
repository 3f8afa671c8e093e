//! Task data models

use serde::{Deserialize, Serialize};

use crate::error::EcloudError;

/// Task statuses reported by the eCloud API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Complete,
    Failed,
    InProgress,
}

impl TaskStatus {
    /// Every status, in the order shown to users
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Complete,
        TaskStatus::Failed,
        TaskStatus::InProgress,
    ];

    /// Canonical API representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Complete => "complete",
            TaskStatus::Failed => "failed",
            TaskStatus::InProgress => "in-progress",
        }
    }

    /// A terminal task never transitions again
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Complete | TaskStatus::Failed)
    }

    fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = EcloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                EcloudError::InvalidStatus(format!(
                    "Invalid task status [{}], valid values: {}",
                    s,
                    Self::valid_values()
                ))
            })
    }
}

/// Task data from the eCloud API
#[derive(Deserialize, Debug, Clone)]
pub struct Task {
    pub id: String,
    pub resource_id: Option<String>,
    pub name: Option<String>,
    pub status: TaskStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Task {
    /// Get the task name (operation performed)
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Get the ID of the resource the task acts on
    pub fn resource_id(&self) -> &str {
        self.resource_id.as_deref().unwrap_or("")
    }

    /// Get created_at timestamp
    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }

    /// Get updated_at timestamp
    pub fn updated_at(&self) -> &str {
        self.updated_at.as_deref().unwrap_or("")
    }
}
