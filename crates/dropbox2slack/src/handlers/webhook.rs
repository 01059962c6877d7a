use axum::{extract::State, Json};

use crate::handlers::AppError;
use crate::relay::{relay_changes, RelaySummary};
use crate::state::AppState;

/// POST / - Dropbox change notification.
///
/// The notification body only lists account ids, so it is ignored. Changes
/// are pulled from the stored cursor instead.
#[axum::debug_handler]
pub async fn webhook(State(state): State<AppState>) -> Result<Json<RelaySummary>, AppError> {
    let summary = relay_changes(&state).await?;
    Ok(Json(summary))
}
