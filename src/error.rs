use std::fmt;
use std::time::Duration;

use crate::ecloud::TaskStatus;

/// Custom error type for eCloud operations
#[derive(Debug)]
pub enum EcloudError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Requested resource does not exist
    NotFound(String),
    /// API key not found in any source
    ApiKeyNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Unrecognized task status supplied by the user
    InvalidStatus(String),
    /// Waiting for a task did not reach the expected status
    Wait(WaitError),
}

/// Reasons a single wait can stop without reaching the expected status
#[derive(Debug)]
pub enum WaitError {
    /// The status lookup itself failed
    Lookup(Box<EcloudError>),
    /// Task reached a terminal status other than the one awaited
    TaskFailed(TaskStatus),
    /// Polling budget exhausted
    Timeout { elapsed: Duration, attempts: u32 },
}

impl fmt::Display for EcloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcloudError::Http(e) => write!(f, "HTTP request failed: {}", e),
            EcloudError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            EcloudError::NotFound(msg) => write!(f, "{}", msg),
            EcloudError::ApiKeyNotFound(msg) => write!(f, "{}", msg),
            EcloudError::Json(msg) => write!(f, "JSON error: {}", msg),
            EcloudError::Config(msg) => write!(f, "Configuration error: {}", msg),
            EcloudError::InvalidStatus(msg) => write!(f, "{}", msg),
            EcloudError::Wait(e) => write!(f, "Error waiting for command: {}", e),
        }
    }
}

impl fmt::Display for WaitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitError::Lookup(e) => write!(f, "Failed to retrieve task status: {}", e),
            WaitError::TaskFailed(status) => write!(f, "Task in [{}] state", status),
            WaitError::Timeout { .. } => write!(f, "Timeout waiting for command"),
        }
    }
}

impl std::error::Error for EcloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EcloudError::Http(e) => Some(e),
            EcloudError::Wait(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for WaitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WaitError::Lookup(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for EcloudError {
    fn from(err: reqwest::Error) -> Self {
        EcloudError::Http(err)
    }
}

impl From<serde_json::Error> for EcloudError {
    fn from(err: serde_json::Error) -> Self {
        EcloudError::Json(err.to_string())
    }
}

impl From<WaitError> for EcloudError {
    fn from(err: WaitError) -> Self {
        EcloudError::Wait(err)
    }
}

/// Result type alias for eCloud operations
pub type Result<T> = std::result::Result<T, EcloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = EcloudError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EcloudError>();
    }

    #[test]
    fn test_not_found_display_is_bare_message() {
        let err = EcloudError::NotFound("test error".to_string());
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_wait_lookup_display() {
        let err: EcloudError =
            WaitError::Lookup(Box::new(EcloudError::NotFound("test error".to_string()))).into();
        assert_eq!(
            err.to_string(),
            "Error waiting for command: Failed to retrieve task status: test error"
        );
    }

    #[test]
    fn test_wait_task_failed_display() {
        let err: EcloudError = WaitError::TaskFailed(TaskStatus::Failed).into();
        assert_eq!(err.to_string(), "Error waiting for command: Task in [failed] state");
    }

    #[test]
    fn test_wait_timeout_display() {
        let err: EcloudError = WaitError::Timeout {
            elapsed: Duration::from_secs(10),
            attempts: 3,
        }
        .into();
        assert_eq!(err.to_string(), "Error waiting for command: Timeout waiting for command");
    }

    #[test]
    fn test_config_error_display() {
        let err = EcloudError::Config("Missing required config".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: EcloudError = json_err.into();
        match err {
            EcloudError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected EcloudError::Json"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err: EcloudError =
            WaitError::Lookup(Box::new(EcloudError::NotFound("gone".to_string()))).into();
        let wait = err.source().unwrap();
        assert_eq!(wait.source().unwrap().to_string(), "gone");

        let api = EcloudError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(api.source().is_none());
    }
}
