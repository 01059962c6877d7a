use async_trait::async_trait;

use super::Result;

/// Persistence for the Dropbox list-folder cursor.
///
/// The relay only ever needs the most recent cursor, so the repository stores
/// a single value under [`super::CURSOR_ID`].
#[async_trait]
pub trait CursorRepository: Send + Sync {
    /// Gets the stored cursor, or `None` if nothing has been saved yet.
    async fn get_cursor(&self) -> Result<Option<String>>;

    /// Stores the cursor, replacing any previous value.
    async fn save_cursor(&self, cursor: &str) -> Result<()>;
}
