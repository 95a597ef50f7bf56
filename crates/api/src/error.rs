use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`]:
///
/// - not found (unknown id, or an id segment that is not an integer):
///   404 with an empty body
/// - malformed bodies and query strings: 400 with `{ "error": ..., "code": ... }`
/// - database failures: 500 with a generic plain-text body; the detail is
///   logged, never returned
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request body or query string.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An id path segment that could not be parsed as an integer.
    #[error("Unmatched path")]
    UnmatchedPath,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::UnmatchedPath => StatusCode::NOT_FOUND.into_response(),
            AppError::BadRequest(msg) => client_error("BAD_REQUEST", msg),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

fn client_error(code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
}
