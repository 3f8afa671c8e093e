//! Runtime settings
//!
//! Merges command-line flags, environment variables, and the settings file
//! (`~/.ecloudctl/config.json`) into the values a command runs with.

mod models;
mod store;

use std::time::Duration;

use log::debug;

use crate::cli::Cli;
use crate::config::{api, defaults};
use crate::ecloud::ApiKeyResolver;
use crate::error::{EcloudError, Result};
use crate::wait::WaitConfig;

pub use models::SettingsFile;
pub use store::SettingsStore;

/// Fully resolved settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_uri: String,
    pub wait: WaitConfig,
}

impl Settings {
    /// Resolve settings: CLI flag, then environment, then file, then default
    pub fn resolve(cli: &Cli, file: &SettingsFile) -> Result<Self> {
        let api_key = ApiKeyResolver::resolve(cli.api_key.as_deref(), file.api_key.as_deref())?;

        let api_uri = cli
            .api_uri
            .clone()
            .or_else(|| file.api_uri.clone())
            .unwrap_or_else(|| api::DEFAULT_URI.to_string());
        debug!("Using API URI: {}", api_uri);

        Ok(Self {
            api_key,
            api_uri,
            wait: wait_config(cli, file)?,
        })
    }
}

/// Resolve the polling policy for task waits
///
/// The settings file's poll interval must be at least one second.
pub fn wait_config(cli: &Cli, file: &SettingsFile) -> Result<WaitConfig> {
    if file.command_wait_sleep_seconds == Some(0) {
        return Err(EcloudError::Config(
            "command_wait_sleep_seconds must be at least 1".to_string(),
        ));
    }

    let sleep_seconds = cli
        .wait_interval
        .or(file.command_wait_sleep_seconds)
        .unwrap_or(defaults::WAIT_SLEEP_SECONDS);
    let timeout_seconds = cli
        .wait_timeout
        .or(file.command_wait_timeout_seconds)
        .unwrap_or(defaults::WAIT_TIMEOUT_SECONDS);
    let max_attempts = cli.wait_max_attempts.or(file.command_wait_max_attempts);

    debug!(
        "Wait policy: interval={}s, timeout={}s, max_attempts={:?}",
        sleep_seconds, timeout_seconds, max_attempts
    );

    Ok(WaitConfig {
        poll_interval: Duration::from_secs(sleep_seconds),
        timeout: Duration::from_secs(timeout_seconds),
        max_attempts,
    })
}
