//! Admin login DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for `POST /admin/login`.
#[derive(Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    /// Admin email.
    #[validate(email)]
    pub email: String,
    /// Admin password in plaintext.
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Response body for a successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}
