use async_trait::async_trait;

use super::{
    LatestCursor, ListFolderResult, ListSharedLinksResult, Result, SharedLinkMetadata,
    SharedLinkSettings,
};

/// The subset of the Dropbox HTTP API used by the relay.
#[async_trait]
pub trait DropboxApi: Send + Sync {
    /// `files/list_folder/get_latest_cursor`, recursive from `path`.
    async fn get_latest_cursor(&self, path: &str) -> Result<LatestCursor>;

    /// `files/list_folder/continue` from a previously obtained cursor.
    async fn list_folder_continue(&self, cursor: &str) -> Result<ListFolderResult>;

    /// `sharing/list_shared_links` for a single file.
    async fn list_shared_links(&self, path: &str) -> Result<ListSharedLinksResult>;

    /// `sharing/modify_shared_link_settings` on an existing link.
    async fn modify_shared_link_settings(
        &self,
        url: &str,
        settings: SharedLinkSettings,
    ) -> Result<SharedLinkMetadata>;

    /// `sharing/create_shared_link_with_settings` for a file without a link.
    async fn create_shared_link_with_settings(
        &self,
        path: &str,
        settings: SharedLinkSettings,
    ) -> Result<SharedLinkMetadata>;
}
