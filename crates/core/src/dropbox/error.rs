use thiserror::Error;

/// Errors returned by Dropbox API operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DropboxError {
    #[error("Dropbox request failed: {0}")]
    Request(String),

    #[error("Dropbox {endpoint} returned {status}: {message}")]
    Api {
        endpoint: &'static str,
        status: u16,
        message: String,
    },

    #[error("Invalid Dropbox response: {0}")]
    InvalidResponse(String),
}

impl DropboxError {
    /// True when Dropbox has expired a `list_folder` cursor (`409 reset/...`).
    ///
    /// The cursor cannot be resumed and a fresh one must be fetched.
    pub fn is_cursor_reset(&self) -> bool {
        match self {
            DropboxError::Api {
                status, message, ..
            } => *status == 409 && message.contains("reset"),
            _ => false,
        }
    }
}

/// Result type alias for Dropbox operations.
pub type Result<T> = std::result::Result<T, DropboxError>;
