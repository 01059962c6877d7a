//! Cursor storage backends.
//!
//! This module provides concrete implementations of
//! `dropbox2slack_core::storage::CursorRepository`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled. It backs the tests and local
//! runs built with `--no-default-features`.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbCursorRepository;

pub use inmemory::InMemoryCursorRepository;
