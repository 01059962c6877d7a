//! Dropbox API types and pure helpers.
//!
//! Only the handful of endpoints the relay talks to are modelled here. The
//! HTTP implementation of [`DropboxApi`] lives in the `dropbox2slack` crate.

mod error;
mod paths;
mod traits;
mod types;

pub use error::{DropboxError, Result};
pub use paths::channel_for_path;
pub use traits::DropboxApi;
pub use types::{
    Access, Audience, CreateSharedLinkArg, GetLatestCursorArg, LatestCursor, ListFolderContinueArg,
    ListFolderResult, ListSharedLinksArg, ListSharedLinksResult, Metadata,
    ModifySharedLinkSettingsArg, SharedLinkMetadata, SharedLinkSettings,
};
