use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Clients match on these —
// never on the human-readable message string.

/// Stable error code constants.
///
/// Clients should match on `code` from `{"code": "INVALID_DATE", "message": "..."}`.
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const MISSING_PARAMETER: &str = "MISSING_PARAMETER";
    pub const INVALID_DATE: &str = "INVALID_DATE";
    pub const INVALID_ITEM_BY: &str = "INVALID_ITEM_BY";
    pub const RANK_OUT_OF_RANGE: &str = "RANK_OUT_OF_RANGE";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type used across all modules.
///
/// Each variant maps to a stable error code (see [`error_code`]) and an
/// HTTP status code. The JSON response always includes both:
///
/// ```json
/// {"code": "MISSING_PARAMETER", "message": "Missing parameter(s): start_date"}
/// ```
#[derive(Error, Debug)]
pub enum ServiceError {
    /// One or more required query parameters are absent or empty. HTTP 400.
    #[error("{0}")]
    MissingParameter(String),

    /// A date parameter is not a valid calendar date. HTTP 400.
    #[error("{0}")]
    InvalidDate(String),

    /// Unrecognized ranking key. HTTP 400.
    #[error("{0}")]
    InvalidItemBy(String),

    /// Requested rank exceeds the number of distinct items. HTTP 400.
    #[error("{0}")]
    RankOutOfRange(String),

    /// Unexpected internal error. HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::MissingParameter(_) => error_code::MISSING_PARAMETER,
            ServiceError::InvalidDate(_) => error_code::INVALID_DATE,
            ServiceError::InvalidItemBy(_) => error_code::INVALID_ITEM_BY,
            ServiceError::RankOutOfRange(_) => error_code::RANK_OUT_OF_RANGE,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidItemBy(_) => StatusCode::BAD_REQUEST,
            ServiceError::RankOutOfRange(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
