//! API key resolution from multiple sources

use log::debug;

use crate::config::{credentials, settings};
use crate::error::{EcloudError, Result};

/// API key resolution with fallback logic
pub struct ApiKeyResolver;

impl ApiKeyResolver {
    /// Resolve the API key from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (ECLOUD_API_KEY, UKF_API_KEY - in order)
    /// 3. Settings file (~/.ecloudctl/config.json)
    pub fn resolve(cli_key: Option<&str>, settings_key: Option<&str>) -> Result<String> {
        if let Some(key) = cli_key {
            debug!("Using API key from CLI argument");
            return Ok(key.to_string());
        }

        for env_var in credentials::API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(env_var) {
                if !key.is_empty() {
                    debug!("Using API key from {} environment variable", env_var);
                    return Ok(key);
                }
            }
        }

        if let Some(key) = settings_key {
            debug!("Using API key from settings file");
            return Ok(key.to_string());
        }

        Err(EcloudError::ApiKeyNotFound(Self::not_found_message()))
    }

    /// Generate helpful error message when no API key is found
    fn not_found_message() -> String {
        format!(
            "No API key found. Please provide one using one of:\n\
             \n\
             1. CLI argument:      ecloudctl --api-key <KEY>\n\
             2. Environment var:   export {}=<KEY>\n\
             3. Settings file:     \"api_key\" in ~/{}/{}\n\
             \n\
             Checked: env vars [{}]",
            credentials::API_KEY_ENV_VARS[0],
            settings::DIR_NAME,
            settings::FILE_NAME,
            credentials::API_KEY_ENV_VARS.join(", ")
        )
    }
}
