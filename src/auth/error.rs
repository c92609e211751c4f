//! Authentication and authorization failures.

use axum::http::StatusCode;

/// Reasons an admin login or token check can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Email or password did not match the configured admin.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a request that requires one.
    #[error("missing bearer token")]
    MissingToken,

    /// Token signature, format or expiry check failed.
    #[error("invalid or expired token")]
    InvalidOrExpired,

    /// Token is valid but its subject is not an authorized admin.
    #[error("unauthorized")]
    Unauthorized,

    /// Signing secret, admin email or password hash is not configured.
    #[error("admin auth not configured")]
    NotConfigured,

    /// The stored password hash could not be used, or hashing failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// A token could not be signed.
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl AuthError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidCredentials => 4001,
            Self::MissingToken => 4002,
            Self::InvalidOrExpired => 4003,
            Self::Unauthorized => 4004,
            Self::NotConfigured => 4005,
            Self::Hashing(_) => 4006,
            Self::Signing(_) => 4007,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials
            | Self::MissingToken
            | Self::InvalidOrExpired
            | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotConfigured | Self::Hashing(_) | Self::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
