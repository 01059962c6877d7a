//! Dropbox webhook verification.
//!
//! Dropbox confirms ownership of the endpoint by sending a `challenge` query
//! parameter and expecting it echoed back verbatim.

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

const NOSNIFF: &str = "nosniff";

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub challenge: Option<String>,
}

/// GET / - Echo the Dropbox verification challenge.
#[axum::debug_handler]
pub async fn verify(Query(query): Query<VerifyQuery>) -> Response {
    match query.challenge.filter(|c| !c.is_empty()) {
        Some(challenge) => {
            tracing::info!("Answering Dropbox verification challenge");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/plain"),
                    (header::X_CONTENT_TYPE_OPTIONS, NOSNIFF),
                ],
                challenge,
            )
                .into_response()
        }
        None => {
            tracing::error!("Verification request without a challenge parameter");
            (StatusCode::BAD_REQUEST, "missing challenge parameter").into_response()
        }
    }
}
