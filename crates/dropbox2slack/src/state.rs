//! Application state shared by all request handlers.
//!
//! Service clients are trait objects so handlers and the relay can run
//! against fakes in tests and against real backends in production.

use std::sync::Arc;

use dropbox2slack_core::dropbox::DropboxApi;
use dropbox2slack_core::slack::SlackNotifier;
use dropbox2slack_core::storage::CursorRepository;

use crate::clients::{http_client, DropboxClient, SlackWebhookClient};
use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler. The clients inside are created
/// once and reused across Lambda invocations.
#[derive(Clone)]
pub struct AppState {
    /// Cursor storage.
    pub cursor_repo: Arc<dyn CursorRepository>,
    /// Dropbox API client.
    pub dropbox: Arc<dyn DropboxApi>,
    /// Slack webhook client.
    pub slack: Arc<dyn SlackNotifier>,
    /// Dropbox folder whose subfolders map to Slack channels.
    pub target_dir: String,
}

impl AppState {
    pub fn new(
        cursor_repo: Arc<dyn CursorRepository>,
        dropbox: Arc<dyn DropboxApi>,
        slack: Arc<dyn SlackNotifier>,
        target_dir: impl Into<String>,
    ) -> Self {
        Self {
            cursor_repo,
            dropbox,
            slack,
            target_dir: target_dir.into(),
        }
    }

    /// Builds the production state from configuration.
    pub async fn from_config(config: &Config) -> Self {
        let http = http_client(config.request_timeout());

        let dropbox = DropboxClient::new(
            http.clone(),
            config.dropbox_api_url.clone(),
            config.dropbox_token.clone(),
        );
        let slack = SlackWebhookClient::new(http, config.slack_webhook_url.clone());

        Self::new(
            cursor_repository(config).await,
            Arc::new(dropbox),
            Arc::new(slack),
            config.dropbox_target_dir.clone(),
        )
    }
}

#[cfg(feature = "dynamodb")]
async fn cursor_repository(config: &Config) -> Arc<dyn CursorRepository> {
    use crate::storage::DynamoDbCursorRepository;

    let repo = DynamoDbCursorRepository::from_env(config.table_name.clone()).await;
    tracing::info!(table = repo.table_name(), "Using DynamoDB cursor storage");
    Arc::new(repo)
}

#[cfg(not(feature = "dynamodb"))]
async fn cursor_repository(_config: &Config) -> Arc<dyn CursorRepository> {
    use crate::storage::InMemoryCursorRepository;

    tracing::warn!("Built without DynamoDB support, cursor is kept in memory");
    Arc::new(InMemoryCursorRepository::new())
}
