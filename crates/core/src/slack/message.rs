//! Incoming Webhook payload.

use serde::{Deserialize, Serialize};

/// Notification text shown where attachments cannot be rendered.
pub const FALLBACK_TEXT: &str = "Dropboxが更新されました。";
/// Heading above the list of changed files.
pub const FIELD_TITLE: &str = "以下のファイルが更新されました。";
/// Dropbox blue.
pub const ATTACHMENT_COLOR: &str = "#0062ff";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    /// Target channel. When absent the webhook's own default channel is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub fallback: String,
    pub color: String,
    pub fields: Vec<AttachmentField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
}

impl WebhookMessage {
    /// Builds the "files were updated" message for one channel.
    pub fn files_updated(channel: impl Into<String>, lines: &[String]) -> Self {
        Self {
            channel: Some(channel.into()),
            attachments: vec![Attachment {
                fallback: FALLBACK_TEXT.to_string(),
                color: ATTACHMENT_COLOR.to_string(),
                fields: vec![AttachmentField {
                    title: FIELD_TITLE.to_string(),
                    value: lines.join("\n"),
                }],
            }],
        }
    }

    /// Same message, addressed to the webhook's default channel.
    pub fn without_channel(&self) -> Self {
        Self {
            channel: None,
            attachments: self.attachments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_files_updated_wire_format() {
        let message = WebhookMessage::files_updated(
            "channel1",
            &["<https://shared.link.com|/target/channel1/file>".to_string()],
        );

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "channel": "channel1",
                "attachments": [{
                    "fallback": "Dropboxが更新されました。",
                    "color": "#0062ff",
                    "fields": [{
                        "title": "以下のファイルが更新されました。",
                        "value": "<https://shared.link.com|/target/channel1/file>"
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_without_channel_omits_field() {
        let message = WebhookMessage::files_updated("channel1", &["link1".to_string()]);
        let value = serde_json::to_value(message.without_channel()).unwrap();

        assert!(value.get("channel").is_none());
        assert_eq!(value["attachments"][0]["fields"][0]["value"], "link1");
    }
}
