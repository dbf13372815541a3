use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mailer::MailerError;
use crate::supabase::SupabaseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream fetch failed (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Email failed to send: {0}")]
    EmailSend(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SupabaseError> for AppError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::Api { status, body } => AppError::Upstream { status, body },
            // Transport failure before any upstream status existed.
            SupabaseError::Http(e) => AppError::Upstream {
                status: 0,
                body: e.to_string(),
            },
            SupabaseError::UnexpectedShape(msg) => AppError::Upstream {
                status: 200,
                body: msg,
            },
        }
    }
}

impl From<MailerError> for AppError {
    fn from(err: MailerError) -> Self {
        match err {
            MailerError::Api { status, body } => {
                AppError::EmailSend(format!("upstream status {status}: {body}"))
            }
            MailerError::Http(e) => AppError::EmailSend(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Client-input problems are the caller's, not ours; no error log.
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upstream { status, body } => {
                tracing::error!("Upstream fetch failed (status {status}): {body}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    format!("Upstream fetch failed (status {status}): {body}"),
                )
            }
            AppError::EmailSend(msg) => {
                tracing::error!("Email send failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMAIL_SEND_FAILED",
                    format!("Email failed to send: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
