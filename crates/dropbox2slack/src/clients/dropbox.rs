//! Dropbox RPC client.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use dropbox2slack_core::dropbox::{
    CreateSharedLinkArg, DropboxApi, DropboxError, GetLatestCursorArg, LatestCursor,
    ListFolderContinueArg, ListFolderResult, ListSharedLinksArg, ListSharedLinksResult,
    ModifySharedLinkSettingsArg, Result, SharedLinkMetadata, SharedLinkSettings,
};

const GET_LATEST_CURSOR: &str = "files/list_folder/get_latest_cursor";
const LIST_FOLDER_CONTINUE: &str = "files/list_folder/continue";
const LIST_SHARED_LINKS: &str = "sharing/list_shared_links";
const MODIFY_SHARED_LINK_SETTINGS: &str = "sharing/modify_shared_link_settings";
const CREATE_SHARED_LINK_WITH_SETTINGS: &str = "sharing/create_shared_link_with_settings";

/// HTTP client for the Dropbox API.
#[derive(Clone)]
pub struct DropboxClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl DropboxClient {
    /// Create a new client for `base_url` (e.g. `https://api.dropboxapi.com/2`).
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// POST a JSON argument to an RPC endpoint and decode the JSON result.
    async fn rpc<A, T>(&self, endpoint: &'static str, arg: &A) -> Result<T>
    where
        A: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(endpoint))
            .bearer_auth(&self.token)
            .json(arg)
            .send()
            .await
            .map_err(|e| DropboxError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DropboxError::Api {
                endpoint,
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| DropboxError::InvalidResponse(format!("{endpoint}: {e}")))
    }
}

#[async_trait]
impl DropboxApi for DropboxClient {
    async fn get_latest_cursor(&self, path: &str) -> Result<LatestCursor> {
        self.rpc(GET_LATEST_CURSOR, &GetLatestCursorArg::recursive(path))
            .await
    }

    async fn list_folder_continue(&self, cursor: &str) -> Result<ListFolderResult> {
        let arg = ListFolderContinueArg {
            cursor: cursor.to_string(),
        };
        self.rpc(LIST_FOLDER_CONTINUE, &arg).await
    }

    async fn list_shared_links(&self, path: &str) -> Result<ListSharedLinksResult> {
        self.rpc(LIST_SHARED_LINKS, &ListSharedLinksArg::direct(path))
            .await
    }

    async fn modify_shared_link_settings(
        &self,
        url: &str,
        settings: SharedLinkSettings,
    ) -> Result<SharedLinkMetadata> {
        let arg = ModifySharedLinkSettingsArg {
            url: url.to_string(),
            settings,
        };
        self.rpc(MODIFY_SHARED_LINK_SETTINGS, &arg).await
    }

    async fn create_shared_link_with_settings(
        &self,
        path: &str,
        settings: SharedLinkSettings,
    ) -> Result<SharedLinkMetadata> {
        let arg = CreateSharedLinkArg {
            path: path.to_string(),
            settings,
        };
        self.rpc(CREATE_SHARED_LINK_WITH_SETTINGS, &arg).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock_server::{MockServer, Recorded};
    use axum::http::StatusCode;
    use serde_json::json;

    fn client_for(server: &MockServer) -> DropboxClient {
        DropboxClient::new(reqwest::Client::new(), server.url(), "DUMMYTOKEN")
    }

    #[tokio::test]
    async fn test_get_latest_cursor() {
        let server = MockServer::builder()
            .respond(
                "/files/list_folder/get_latest_cursor",
                StatusCode::OK,
                json!({"cursor": "cursor-value"}),
            )
            .start()
            .await;

        let cursor = client_for(&server)
            .get_latest_cursor("/target")
            .await
            .unwrap();

        assert_eq!(cursor.cursor, "cursor-value");

        let requests: Vec<Recorded> = server.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer DUMMYTOKEN"));
        assert_eq!(requests[0].body, json!({"path": "/target", "recursive": true}));
    }

    #[tokio::test]
    async fn test_list_folder_continue() {
        let body = json!({
            "cursor": "UT-cursor",
            "entries": [
                {".tag": "folder", "path_display": "/path/to/folder"},
                {".tag": "deleted", "path_display": "/path/to/folder2"},
            ],
            "has_more": false,
        });
        let server = MockServer::builder()
            .respond("/files/list_folder/continue", StatusCode::OK, body)
            .start()
            .await;

        let result = client_for(&server)
            .list_folder_continue("prev_cursor")
            .await
            .unwrap();

        assert_eq!(result.cursor, "UT-cursor");
        assert_eq!(result.entries.len(), 2);
        assert_eq!(server.requests().await[0].body, json!({"cursor": "prev_cursor"}));
    }

    #[tokio::test]
    async fn test_list_shared_links() {
        let server = MockServer::builder()
            .respond(
                "/sharing/list_shared_links",
                StatusCode::OK,
                json!({"links": [
                    {"url": "https://sharedlink.com/1"},
                    {"url": "https://sharedlink.com/2"}
                ]}),
            )
            .start()
            .await;

        let result = client_for(&server)
            .list_shared_links("/path/to/file")
            .await
            .unwrap();

        assert_eq!(
            result.links,
            vec![
                SharedLinkMetadata {
                    url: "https://sharedlink.com/1".to_string()
                },
                SharedLinkMetadata {
                    url: "https://sharedlink.com/2".to_string()
                },
            ]
        );
        assert_eq!(
            server.requests().await[0].body,
            json!({"path": "/path/to/file", "direct_only": true})
        );
    }

    #[tokio::test]
    async fn test_modify_shared_link_sends_team_settings() {
        let server = MockServer::builder()
            .respond(
                "/sharing/modify_shared_link_settings",
                StatusCode::OK,
                json!({"url": "https://sharedlink.com"}),
            )
            .start()
            .await;

        let result = client_for(&server)
            .modify_shared_link_settings(
                "https://post.sharedlink.com",
                SharedLinkSettings::team_viewer(),
            )
            .await
            .unwrap();

        assert_eq!(result.url, "https://sharedlink.com");
        assert_eq!(
            server.requests().await[0].body,
            json!({
                "url": "https://post.sharedlink.com",
                "settings": {"audience": "team", "access": "viewer", "allow_download": true}
            })
        );
    }

    #[tokio::test]
    async fn test_create_shared_link_sends_public_settings() {
        let server = MockServer::builder()
            .respond(
                "/sharing/create_shared_link_with_settings",
                StatusCode::OK,
                json!({"url": "https://sharedlink.com", ".tag": "file", "name": "a.txt"}),
            )
            .start()
            .await;

        let result = client_for(&server)
            .create_shared_link_with_settings(
                "/target/ch/a.txt",
                SharedLinkSettings::public_viewer(),
            )
            .await
            .unwrap();

        assert_eq!(result.url, "https://sharedlink.com");
        assert_eq!(server.requests().await[0].body["settings"]["audience"], "public");
    }

    #[tokio::test]
    async fn test_api_error_carries_status_and_body() {
        let server = MockServer::builder()
            .respond(
                "/files/list_folder/continue",
                StatusCode::CONFLICT,
                json!({"error_summary": "reset/"}),
            )
            .start()
            .await;

        let err = client_for(&server)
            .list_folder_continue("stale")
            .await
            .unwrap_err();

        match err {
            DropboxError::Api {
                endpoint,
                status,
                message,
            } => {
                assert_eq!(endpoint, "files/list_folder/continue");
                assert_eq!(status, 409);
                assert!(message.contains("reset/"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::builder()
            .respond(
                "/files/list_folder/get_latest_cursor",
                StatusCode::OK,
                json!("cursor"),
            )
            .start()
            .await;

        let err = client_for(&server)
            .get_latest_cursor("/target")
            .await
            .unwrap_err();

        assert!(matches!(err, DropboxError::InvalidResponse(_)));
    }
}
