//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dropbox2slack_core::storage::{CursorRepository, Result};

/// In-memory cursor storage.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCursorRepository {
    cursor: Arc<RwLock<Option<String>>>,
}

impl InMemoryCursorRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `cursor`.
    pub fn with_cursor(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Arc::new(RwLock::new(Some(cursor.into()))),
        }
    }
}

#[async_trait]
impl CursorRepository for InMemoryCursorRepository {
    async fn get_cursor(&self) -> Result<Option<String>> {
        Ok(self.cursor.read().await.clone())
    }

    async fn save_cursor(&self, cursor: &str) -> Result<()> {
        *self.cursor.write().await = Some(cursor.to_string());
        Ok(())
    }
}
