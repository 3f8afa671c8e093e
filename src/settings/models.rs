//! Settings file data model

use serde::Deserialize;

/// Contents of `~/.ecloudctl/config.json`
///
/// Every field is optional; missing values fall back to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsFile {
    /// API key used when none is given on the command line or environment
    pub api_key: Option<String>,
    /// API base URI override
    pub api_uri: Option<String>,
    /// Seconds between task status polls
    pub command_wait_sleep_seconds: Option<u64>,
    /// Seconds before a task wait gives up
    pub command_wait_timeout_seconds: Option<u64>,
    /// Maximum number of status polls per task
    pub command_wait_max_attempts: Option<u32>,
}
