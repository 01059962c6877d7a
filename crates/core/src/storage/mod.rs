mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::CursorRepository;

/// Partition key value of the single item that holds the Dropbox cursor.
pub const CURSOR_ID: &str = "cursor";
