//! Request and response bodies for the Dropbox endpoints the relay calls.
//!
//! Responses carry many more fields than listed here; serde ignores them.

use serde::{Deserialize, Serialize};

/// Body of `files/list_folder/get_latest_cursor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLatestCursorArg {
    pub path: String,
    pub recursive: bool,
}

impl GetLatestCursorArg {
    /// Recursive listing rooted at `path`.
    pub fn recursive(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            recursive: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestCursor {
    pub cursor: String,
}

/// Body of `files/list_folder/continue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderContinueArg {
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderResult {
    #[serde(default)]
    pub entries: Vec<Metadata>,
    pub cursor: String,
    #[serde(default)]
    pub has_more: bool,
}

/// A changed entry, discriminated by Dropbox's `.tag` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "lowercase")]
pub enum Metadata {
    File {
        #[serde(default)]
        path_display: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path_lower: Option<String>,
    },
    Folder {
        #[serde(default)]
        path_display: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path_lower: Option<String>,
    },
    Deleted {
        #[serde(default)]
        path_display: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path_lower: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl Metadata {
    /// Display path of a file entry; `None` for folders, deletions and unknown tags.
    pub fn file_path(&self) -> Option<&str> {
        match self {
            Metadata::File { path_display, .. } if !path_display.is_empty() => {
                Some(path_display.as_str())
            }
            _ => None,
        }
    }

    /// Display path regardless of the entry kind.
    pub fn path_display(&self) -> Option<&str> {
        match self {
            Metadata::File { path_display, .. }
            | Metadata::Folder { path_display, .. }
            | Metadata::Deleted { path_display, .. } => Some(path_display.as_str()),
            Metadata::Unknown => None,
        }
    }
}

/// Body of `sharing/list_shared_links`.
///
/// Without `direct_only`, Dropbox also returns links on parent folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSharedLinksArg {
    pub path: String,
    pub direct_only: bool,
}

impl ListSharedLinksArg {
    /// Links on `path` itself, never on a folder containing it.
    pub fn direct(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            direct_only: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSharedLinksResult {
    #[serde(default)]
    pub links: Vec<SharedLinkMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedLinkMetadata {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Public,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedLinkSettings {
    pub audience: Audience,
    pub access: Access,
    pub allow_download: bool,
}

impl SharedLinkSettings {
    /// Read-only link visible to team members. Applied to links that already exist.
    pub fn team_viewer() -> Self {
        Self {
            audience: Audience::Team,
            access: Access::Viewer,
            allow_download: true,
        }
    }

    /// Read-only link anyone can open. Used when a link has to be created.
    pub fn public_viewer() -> Self {
        Self {
            audience: Audience::Public,
            access: Access::Viewer,
            allow_download: true,
        }
    }
}

/// Body of `sharing/modify_shared_link_settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifySharedLinkSettingsArg {
    pub url: String,
    pub settings: SharedLinkSettings,
}

/// Body of `sharing/create_shared_link_with_settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSharedLinkArg {
    pub path: String,
    pub settings: SharedLinkSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_latest_cursor_arg_serializes_recursive() {
        let arg = GetLatestCursorArg::recursive("/target");
        assert_eq!(
            serde_json::to_value(&arg).unwrap(),
            json!({"path": "/target", "recursive": true})
        );
    }

    #[test]
    fn test_list_folder_result_parses_tagged_entries() {
        let body = json!({
            "cursor": "UT-cursor",
            "entries": [
                {".tag": "folder", "path_display": "/path/to/folder", "id": "id:1"},
                {".tag": "deleted", "path_display": "/path/to/folder2"},
                {
                    ".tag": "file",
                    "path_display": "/Target/Ch/a.txt",
                    "path_lower": "/target/ch/a.txt",
                    "size": 3
                }
            ]
        });

        let result: ListFolderResult = serde_json::from_value(body).unwrap();

        assert_eq!(result.cursor, "UT-cursor");
        assert!(!result.has_more);
        assert_eq!(result.entries.len(), 3);
        assert_eq!(result.entries[0].file_path(), None);
        assert_eq!(result.entries[1].file_path(), None);
        assert_eq!(result.entries[2].file_path(), Some("/Target/Ch/a.txt"));
    }

    #[test]
    fn test_unknown_tag_is_tolerated() {
        let entry: Metadata =
            serde_json::from_value(json!({".tag": "symlink", "path_display": "/x"})).unwrap();
        assert_eq!(entry, Metadata::Unknown);
        assert_eq!(entry.path_display(), None);
    }

    #[test]
    fn test_shared_link_settings_wire_format() {
        let arg = ModifySharedLinkSettingsArg {
            url: "https://www.dropbox.com/s/abc".to_string(),
            settings: SharedLinkSettings::team_viewer(),
        };
        assert_eq!(
            serde_json::to_value(&arg).unwrap(),
            json!({
                "url": "https://www.dropbox.com/s/abc",
                "settings": {"audience": "team", "access": "viewer", "allow_download": true}
            })
        );

        let arg = CreateSharedLinkArg {
            path: "/target/ch/a.txt".to_string(),
            settings: SharedLinkSettings::public_viewer(),
        };
        assert_eq!(
            serde_json::to_value(&arg).unwrap()["settings"]["audience"],
            "public"
        );
    }

    #[test]
    fn test_list_shared_links_arg_excludes_parent_links() {
        assert_eq!(
            serde_json::to_value(ListSharedLinksArg::direct("/target/ch/a.txt")).unwrap(),
            json!({"path": "/target/ch/a.txt", "direct_only": true})
        );
    }

    #[test]
    fn test_list_shared_links_defaults_to_empty() {
        let result: ListSharedLinksResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.links.is_empty());
    }
}
