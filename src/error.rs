//! Service error types with HTTP status code mapping.
//!
//! [`LeadsError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::AuthError;
use crate::domain::InquiryStatus;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "inquiry not found: 4f0c…",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see the code ranges on [`LeadsError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request / 422        |
/// | 2000–2999 | State/Not Found | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server          | 500 Internal Server Error    |
/// | 4000–4999 | Auth            | 401 Unauthorized / 500       |
#[derive(Debug, thiserror::Error)]
pub enum LeadsError {
    /// Malformed request (unparseable JSON body or query string).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Status value outside the fixed set.
    #[error("invalid status '{0}'; must be one of: new, contacted, in_progress, booked, archived")]
    InvalidStatus(String),

    /// Field-level validation of a well-formed body failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Inquiry with the given ID was not found.
    #[error("inquiry not found: {0}")]
    InquiryNotFound(String),

    /// Conditional status update did not match the stored status.
    #[error("status conflict: expected '{expected}' but inquiry is '{actual}'")]
    StatusConflict {
        /// Status the caller expected to replace.
        expected: InquiryStatus,
        /// Status currently stored.
        actual: InquiryStatus,
    },

    /// Authentication or authorization failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Document store failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LeadsError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidStatus(_) => 1002,
            Self::Validation(_) => 1003,
            Self::InquiryNotFound(_) => 2001,
            Self::StatusConflict { .. } => 2002,
            Self::Auth(e) => e.error_code(),
            Self::PersistenceError(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InquiryNotFound(_) => StatusCode::NOT_FOUND,
            Self::StatusConflict { .. } => StatusCode::CONFLICT,
            Self::Auth(e) => e.status_code(),
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Server-side failures are reported
    /// generically; the full error goes to the log.
    fn public_message(&self) -> String {
        match self {
            Self::PersistenceError(_) => "persistence error".to_string(),
            Self::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for LeadsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<sqlx::Error> for LeadsError {
    fn from(e: sqlx::Error) -> Self {
        Self::PersistenceError(e.to_string())
    }
}

impl From<JsonRejection> for LeadsError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that does not fit the schema.
            JsonRejection::JsonDataError(e) => Self::Validation(e.body_text()),
            other => Self::InvalidRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for LeadsError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for LeadsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
