//! HTTP clients for the external services the relay talks to.

mod dropbox;
mod slack;

#[cfg(test)]
mod mock_server;

pub use dropbox::DropboxClient;
pub use slack::SlackWebhookClient;

use std::time::Duration;

/// Build the shared reqwest client with the configured timeout.
pub fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Falling back to default HTTP client");
            reqwest::Client::new()
        })
}
