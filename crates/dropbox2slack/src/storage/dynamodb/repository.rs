//! DynamoDB repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use dropbox2slack_core::storage::{CursorRepository, Result};

use super::conversions::{cursor_key, cursor_to_item, item_to_cursor};
use super::error::{map_get_item_error, map_put_item_error};

/// DynamoDB-based cursor repository.
pub struct DynamoDbCursorRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbCursorRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    ///
    /// `AWS_ENDPOINT_URL` is honoured by the SDK, which is how local runs
    /// point at DynamoDB Local.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl CursorRepository for DynamoDbCursorRepository {
    async fn get_cursor(&self) -> Result<Option<String>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(cursor_key()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &self.table_name))?;

        match result.item {
            Some(item) => Ok(Some(item_to_cursor(&item)?)),
            None => Ok(None),
        }
    }

    async fn save_cursor(&self, cursor: &str) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(cursor_to_item(cursor)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name))?;

        Ok(())
    }
}
