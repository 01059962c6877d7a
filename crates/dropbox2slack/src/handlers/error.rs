use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dropbox2slack_core::dropbox::DropboxError;
use dropbox2slack_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::relay::RelayError;

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(relay_error) = self.0.downcast_ref::<RelayError>() {
            return match relay_error {
                RelayError::Dropbox(_) => StatusCode::BAD_GATEWAY,
                RelayError::Repository(err) => repository_status(err),
            };
        }

        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_status(repo_error)
        } else if self.0.downcast_ref::<DropboxError>().is_some() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    StatusCode::from_u16(repository_error_to_status_code(err))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        tracing::error!(status = status_code.as_u16(), error = %self.0, "Request failed");

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
