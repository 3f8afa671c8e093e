/// Configuration constants for the eCloud API
pub mod api {
    /// Default API base URI
    pub const DEFAULT_URI: &str = "https://api.ukfast.io";

    /// Base path for eCloud API v2
    pub const BASE_PATH: &str = "/ecloud/v2";

    /// Tasks endpoint
    pub const TASKS: &str = "tasks";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Maximum concurrent page requests when listing
    pub const MAX_CONCURRENT_PAGE_REQUESTS: usize = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for the API key (checked in order)
    pub const API_KEY_ENV_VARS: &[&str] = &["ECLOUD_API_KEY", "UKF_API_KEY"];
}

/// Configuration constants for the settings file
pub mod settings {
    /// Directory under the home directory
    pub const DIR_NAME: &str = ".ecloudctl";

    /// Settings file name
    pub const FILE_NAME: &str = "config.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Seconds between task status polls
    pub const WAIT_SLEEP_SECONDS: u64 = 5;

    /// Seconds before a task wait gives up
    pub const WAIT_TIMEOUT_SECONDS: u64 = 1200;

    /// Task status awaited when `--status` is not given
    pub const WAIT_STATUS: &str = "complete";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
        assert!(!api::DEFAULT_URI.ends_with('/'));
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(
            credentials::API_KEY_ENV_VARS,
            &["ECLOUD_API_KEY", "UKF_API_KEY"]
        );
    }

    #[test]
    fn test_wait_defaults_are_sane() {
        assert!(defaults::WAIT_SLEEP_SECONDS > 0);
        assert!(defaults::WAIT_TIMEOUT_SECONDS > defaults::WAIT_SLEEP_SECONDS);
    }
}
