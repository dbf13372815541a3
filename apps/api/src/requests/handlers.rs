use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::requests::{notification_email, validate, RequestPayload};
use crate::state::AppState;

/// POST /request
///
/// Validates the form payload, relays it to the operator inbox via Resend,
/// and answers `{ "ok": true }`. Validation failures are 400s with the
/// user-facing message; a Resend failure is a 502 with upstream diagnostics.
pub async fn handle_submit_request(
    State(state): State<AppState>,
    Json(payload): Json<RequestPayload>,
) -> Result<Json<Value>, AppError> {
    let submission = validate(&payload).map_err(AppError::Validation)?;

    let email = notification_email(&submission, &state.config.email_from, &state.config.email_to);
    state.mailer.send(&email).await?;

    info!(
        "Application request relayed for {} {}",
        submission.first_name, submission.last_name
    );

    Ok(Json(json!({ "ok": true })))
}
