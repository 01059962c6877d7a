use thiserror::Error;

/// Errors from building or delivering Slack messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlackError {
    #[error("Invalid shared link: {0}")]
    InvalidLink(String),

    #[error("Slack channel not found: {channel}")]
    ChannelNotFound { channel: String },

    #[error("Slack webhook returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Slack request failed: {0}")]
    Request(String),
}

/// Result type alias for Slack operations.
pub type Result<T> = std::result::Result<T, SlackError>;
