//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! cursor. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use dropbox2slack_core::storage::{RepositoryError, CURSOR_ID};

/// Partition key attribute name.
pub const ID_ATTRIBUTE: &str = "id";
/// Attribute holding the cursor value.
pub const CURSOR_ATTRIBUTE: &str = "cursor";

/// Key of the cursor item.
pub fn cursor_key() -> HashMap<String, AttributeValue> {
    HashMap::from([(
        ID_ATTRIBUTE.to_string(),
        AttributeValue::S(CURSOR_ID.to_string()),
    )])
}

/// Convert a cursor to a DynamoDB item.
pub fn cursor_to_item(cursor: &str) -> HashMap<String, AttributeValue> {
    let mut item = cursor_key();
    item.insert(
        CURSOR_ATTRIBUTE.to_string(),
        AttributeValue::S(cursor.to_string()),
    );
    item
}

/// Convert a DynamoDB item to a cursor.
pub fn item_to_cursor(item: &HashMap<String, AttributeValue>) -> Result<String, RepositoryError> {
    match item.get(CURSOR_ATTRIBUTE) {
        Some(AttributeValue::S(cursor)) => Ok(cursor.clone()),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "Attribute '{CURSOR_ATTRIBUTE}' is not a string"
        ))),
        None => Err(RepositoryError::InvalidData(format!(
            "Missing attribute '{CURSOR_ATTRIBUTE}'"
        ))),
    }
}
