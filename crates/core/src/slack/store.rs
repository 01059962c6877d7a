//! Per-channel accumulation of changed files.
//!
//! Both stores keep channels in first-insertion order and entries in
//! insertion order, so messages go out in the order changes were seen.

use super::{FileLink, Result, WebhookMessage};

/// Changed files grouped by Slack channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFileStore {
    files_by_channel: Vec<(String, Vec<FileLink>)>,
}

impl ChangedFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a changed file. Fails if `shared_link` is not a valid URL.
    pub fn add(
        &mut self,
        channel: &str,
        filepath: impl Into<String>,
        shared_link: impl Into<String>,
    ) -> Result<()> {
        let link = FileLink::new(filepath, shared_link)?;
        push_grouped(&mut self.files_by_channel, channel, link);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileLink])> {
        self.files_by_channel
            .iter()
            .map(|(channel, files)| (channel.as_str(), files.as_slice()))
    }

    /// Total number of files across all channels.
    pub fn len(&self) -> usize {
        self.files_by_channel.iter().map(|(_, f)| f.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files_by_channel.is_empty()
    }
}

/// Rendered Slack lines grouped by channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackMessageStore {
    lines_by_channel: Vec<(String, Vec<String>)>,
}

impl SlackMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, channel: &str, line: impl Into<String>) {
        push_grouped(&mut self.lines_by_channel, channel, line.into());
    }

    /// Lines recorded for a channel.
    pub fn lines(&self, channel: &str) -> Option<&[String]> {
        self.lines_by_channel
            .iter()
            .find(|(c, _)| c == channel)
            .map(|(_, lines)| lines.as_slice())
    }

    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.lines_by_channel.iter().map(|(c, _)| c.as_str())
    }

    /// One webhook message per channel, in channel order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, WebhookMessage)> + '_ {
        self.lines_by_channel.iter().map(|(channel, lines)| {
            (
                channel.as_str(),
                WebhookMessage::files_updated(channel.as_str(), lines),
            )
        })
    }

    pub fn len(&self) -> usize {
        self.lines_by_channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines_by_channel.is_empty()
    }
}

impl From<&ChangedFileStore> for SlackMessageStore {
    fn from(store: &ChangedFileStore) -> Self {
        let mut messages = SlackMessageStore::new();
        for (channel, files) in store.iter() {
            for file in files {
                messages.add(channel, file.to_markup());
            }
        }
        messages
    }
}

fn push_grouped<T>(groups: &mut Vec<(String, Vec<T>)>, key: &str, value: T) {
    match groups.iter_mut().find(|(k, _)| k == key) {
        Some((_, values)) => values.push(value),
        None => groups.push((key.to_string(), vec![value])),
    }
}
