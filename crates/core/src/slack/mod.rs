//! Slack message construction.
//!
//! Changed files are grouped per channel, rendered as Slack link markup and
//! wrapped into one Incoming Webhook message per channel.

mod error;
mod link;
mod message;
mod store;
mod traits;

pub use error::{Result, SlackError};
pub use link::FileLink;
pub use message::{
    Attachment, AttachmentField, WebhookMessage, ATTACHMENT_COLOR, FALLBACK_TEXT, FIELD_TITLE,
};
pub use store::{ChangedFileStore, SlackMessageStore};
pub use traits::SlackNotifier;
