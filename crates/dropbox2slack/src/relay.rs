//! The webhook workflow: pull changes from Dropbox, notify Slack, advance the cursor.

use serde::Serialize;
use thiserror::Error;

use dropbox2slack_core::dropbox::{
    channel_for_path, DropboxApi, DropboxError, Metadata, SharedLinkSettings,
};
use dropbox2slack_core::slack::{ChangedFileStore, SlackError, SlackMessageStore, SlackNotifier};
use dropbox2slack_core::storage::RepositoryError;

use crate::state::AppState;

/// Errors that abort a relay run. The cursor is left untouched when they occur.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Dropbox(#[from] DropboxError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Outcome of one relay run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelaySummary {
    /// Entries reported by Dropbox since the previous cursor.
    pub entries: usize,
    /// Files that were matched to a channel and linked.
    pub files: usize,
    /// Slack messages delivered.
    pub messages: usize,
    /// Slack messages that could not be delivered.
    pub failed_messages: usize,
}

/// Runs one relay pass using the services held in `state`.
pub async fn relay_changes(state: &AppState) -> Result<RelaySummary, RelayError> {
    let dropbox = state.dropbox.as_ref();

    let cursor = match state.cursor_repo.get_cursor().await? {
        Some(cursor) => cursor,
        None => {
            tracing::info!(target_dir = %state.target_dir, "No stored cursor, fetching latest");
            latest_cursor(dropbox, &state.target_dir).await?
        }
    };

    let (entries, next_cursor) = match list_changes(dropbox, cursor).await {
        Err(err) if err.is_cursor_reset() => {
            tracing::warn!(
                target_dir = %state.target_dir,
                "Stored cursor was reset by Dropbox, restarting from latest"
            );
            let cursor = latest_cursor(dropbox, &state.target_dir).await?;
            list_changes(dropbox, cursor).await?
        }
        result => result?,
    };

    let store = collect_files(dropbox, &state.target_dir, &entries).await;
    let messages = SlackMessageStore::from(&store);
    let (sent, failed) = send_messages(state.slack.as_ref(), &messages).await;

    state.cursor_repo.save_cursor(&next_cursor).await?;

    let summary = RelaySummary {
        entries: entries.len(),
        files: store.len(),
        messages: sent,
        failed_messages: failed,
    };

    tracing::info!(
        entries = summary.entries,
        files = summary.files,
        messages = summary.messages,
        failed_messages = summary.failed_messages,
        "Relay finished"
    );

    Ok(summary)
}

async fn latest_cursor(dropbox: &dyn DropboxApi, target_dir: &str) -> Result<String, DropboxError> {
    Ok(dropbox.get_latest_cursor(target_dir).await?.cursor)
}

/// Pages through `list_folder/continue` until Dropbox reports no more entries.
async fn list_changes(
    dropbox: &dyn DropboxApi,
    mut cursor: String,
) -> Result<(Vec<Metadata>, String), DropboxError> {
    let mut entries = Vec::new();

    loop {
        let page = dropbox.list_folder_continue(&cursor).await?;
        tracing::debug!(count = page.entries.len(), has_more = page.has_more, "Fetched changes");

        entries.extend(page.entries);
        cursor = page.cursor;

        if !page.has_more {
            return Ok((entries, cursor));
        }
    }
}

/// Resolves a shared link for every changed file that belongs to a channel.
///
/// Failures for a single file are logged and the file is skipped.
async fn collect_files(
    dropbox: &dyn DropboxApi,
    target_dir: &str,
    entries: &[Metadata],
) -> ChangedFileStore {
    let mut store = ChangedFileStore::new();

    for entry in entries {
        let Some(path) = entry.file_path() else {
            tracing::debug!(entry = ?entry, "Skipping non-file entry");
            continue;
        };

        let Some(channel) = channel_for_path(target_dir, path) else {
            tracing::debug!(path, "Skipping file outside any channel directory");
            continue;
        };

        let link = match shared_link(dropbox, path).await {
            Ok(link) => link,
            Err(err) => {
                tracing::warn!(path, error = %err, "Could not obtain shared link");
                continue;
            }
        };

        if let Err(err) = store.add(&channel, path, link) {
            tracing::warn!(path, error = %err, "Discarding file with unusable link");
        }
    }

    store
}

/// Returns the file's existing shared link (opened up to the team), or creates a public one.
async fn shared_link(dropbox: &dyn DropboxApi, path: &str) -> Result<String, DropboxError> {
    let existing = dropbox.list_shared_links(path).await?;

    if let Some(link) = existing.links.into_iter().next() {
        if let Err(err) = dropbox
            .modify_shared_link_settings(&link.url, SharedLinkSettings::team_viewer())
            .await
        {
            tracing::warn!(path, error = %err, "Could not update shared link settings");
        }
        return Ok(link.url);
    }

    let created = dropbox
        .create_shared_link_with_settings(path, SharedLinkSettings::public_viewer())
        .await?;
    Ok(created.url)
}

/// Posts one message per channel, falling back to the webhook's default
/// channel when Slack does not know the target channel.
///
/// Returns `(sent, failed)`.
async fn send_messages(slack: &dyn SlackNotifier, messages: &SlackMessageStore) -> (usize, usize) {
    let mut sent = 0;
    let mut failed = 0;

    for (channel, message) in messages.messages() {
        tracing::info!(channel, "Sending message");

        let result = match slack.post(&message).await {
            Err(SlackError::ChannelNotFound { .. }) => {
                tracing::warn!(channel, "Channel does not exist, sending to default channel");
                slack.post(&message.without_channel()).await
            }
            other => other,
        };

        match result {
            Ok(()) => sent += 1,
            Err(err) => {
                tracing::error!(channel, error = %err, "Failed to send message");
                failed += 1;
            }
        }
    }

    (sent, failed)
}
