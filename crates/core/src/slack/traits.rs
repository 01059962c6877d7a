use async_trait::async_trait;

use super::{Result, WebhookMessage};

/// Delivers messages to Slack.
#[async_trait]
pub trait SlackNotifier: Send + Sync {
    /// Posts one message.
    ///
    /// Implementations must return [`super::SlackError::ChannelNotFound`]
    /// when Slack rejects the message because its channel does not exist.
    async fn post(&self, message: &WebhookMessage) -> Result<()>;
}
