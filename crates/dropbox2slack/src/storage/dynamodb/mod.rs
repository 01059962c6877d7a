//! DynamoDB storage backend implementation.
//!
//! The table has a single string partition key, `id`. The cursor is one
//! item: `{ id: "cursor", cursor: <value> }`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbCursorRepository;
