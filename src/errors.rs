use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

/// Transport-level failures. The scoring read surface reports per-symbol
/// problems inside a 200 payload instead; this type covers what remains
/// (scheduler lifecycle, unexpected job aborts).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("external error: {0}")]
    External(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::External(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
        }
    }
}
