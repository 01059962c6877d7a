use std::{env, fmt, time::Duration};

use thiserror::Error;

pub const DEFAULT_TABLE_NAME: &str = "dropbox2slack-table";
pub const DEFAULT_DROPBOX_API_URL: &str = "https://api.dropboxapi.com/2";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Errors raised while loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// DynamoDB table holding the cursor (default: "dropbox2slack-table")
    pub table_name: String,
    /// Dropbox API access token
    pub dropbox_token: String,
    /// Dropbox folder whose subfolders map to Slack channels
    pub dropbox_target_dir: String,
    /// Slack Incoming Webhook URL
    pub slack_webhook_url: String,
    /// Dropbox RPC base URL (default: "https://api.dropboxapi.com/2")
    pub dropbox_api_url: String,
    /// Per-request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "dropbox2slack-table")
    /// - `DROPBOX_TOKEN` - Dropbox access token (required)
    /// - `DROPBOX_TARGET_DIR` - Watched Dropbox folder (required)
    /// - `SLACK_WEBHOOK_URL` - Slack Incoming Webhook URL (required)
    /// - `DROPBOX_API_URL` - Dropbox API base URL (default: "https://api.dropboxapi.com/2")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECONDS",
                value,
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECONDS,
        };

        Ok(Self {
            table_name: lookup("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            dropbox_token: required("DROPBOX_TOKEN")?,
            dropbox_target_dir: required("DROPBOX_TARGET_DIR")?,
            slack_webhook_url: required("SLACK_WEBHOOK_URL")?,
            dropbox_api_url: lookup("DROPBOX_API_URL")
                .unwrap_or_else(|| DEFAULT_DROPBOX_API_URL.to_string()),
            request_timeout_seconds,
        })
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("table_name", &self.table_name)
            .field("dropbox_token", &"<redacted>")
            .field("dropbox_target_dir", &self.dropbox_target_dir)
            .field("slack_webhook_url", &"<redacted>")
            .field("dropbox_api_url", &self.dropbox_api_url)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}
