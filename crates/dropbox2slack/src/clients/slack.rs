//! Slack Incoming Webhook client.

use async_trait::async_trait;
use reqwest::StatusCode;

use dropbox2slack_core::slack::{Result, SlackError, SlackNotifier, WebhookMessage};

/// Posts messages to a single Incoming Webhook URL.
#[derive(Clone)]
pub struct SlackWebhookClient {
    client: reqwest::Client,
    webhook_url: String,
}

impl SlackWebhookClient {
    pub fn new(client: reqwest::Client, webhook_url: impl Into<String>) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait]
impl SlackNotifier for SlackWebhookClient {
    async fn post(&self, message: &WebhookMessage) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        let status = response.status();
        tracing::info!(
            status = status.as_u16(),
            channel = ?message.channel,
            "Slack webhook response"
        );

        if status.is_success() {
            return Ok(());
        }

        // Webhooks answer 404 (channel_not_found) for unknown channels.
        if status == StatusCode::NOT_FOUND {
            if let Some(channel) = &message.channel {
                return Err(SlackError::ChannelNotFound {
                    channel: channel.clone(),
                });
            }
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(SlackError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock_server::MockServer;
    use axum::http::StatusCode;
    use serde_json::json;

    const WEBHOOK_PATH: &str = "/services/xxxxxxxx";

    fn message() -> WebhookMessage {
        WebhookMessage::files_updated("channel1", &["link1".to_string()])
    }

    fn client_for(server: &MockServer) -> SlackWebhookClient {
        SlackWebhookClient::new(
            reqwest::Client::new(),
            format!("{}{WEBHOOK_PATH}", server.url()),
        )
    }

    #[tokio::test]
    async fn test_post_sends_message_json() {
        let server = MockServer::builder()
            .respond(WEBHOOK_PATH, StatusCode::OK, json!({}))
            .start()
            .await;
        let client = client_for(&server);

        client.post(&message()).await.unwrap();

        let requests = server.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, WEBHOOK_PATH);
        assert_eq!(requests[0].body, serde_json::to_value(message()).unwrap());
    }

    #[tokio::test]
    async fn test_not_found_is_channel_not_found() {
        let server = MockServer::builder()
            .respond(WEBHOOK_PATH, StatusCode::NOT_FOUND, json!("channel_not_found"))
            .start()
            .await;
        let client = client_for(&server);

        let err = client.post(&message()).await.unwrap_err();

        assert_eq!(
            err,
            SlackError::ChannelNotFound {
                channel: "channel1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_not_found_without_channel_is_rejected() {
        let server = MockServer::builder()
            .respond(WEBHOOK_PATH, StatusCode::NOT_FOUND, json!("no_service"))
            .start()
            .await;
        let client = client_for(&server);

        let err = client.post(&message().without_channel()).await.unwrap_err();

        assert!(matches!(err, SlackError::Rejected { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_rejected() {
        let server = MockServer::builder()
            .respond(WEBHOOK_PATH, StatusCode::INTERNAL_SERVER_ERROR, json!("oops"))
            .start()
            .await;
        let client = client_for(&server);

        let err = client.post(&message()).await.unwrap_err();

        assert!(matches!(err, SlackError::Rejected { status: 500, .. }));
    }
}
