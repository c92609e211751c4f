//! Bearer-token extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use super::{AuthError, GuardedEndpoint};
use crate::app_state::AppState;
use crate::error::LeadsError;

/// Authenticated admin extracted from an `Authorization: Bearer` header.
///
/// Add it as a handler parameter to make the endpoint admin-only:
///
/// ```ignore
/// async fn list(admin: AdminPrincipal, State(state): State<AppState>) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct AdminPrincipal {
    /// The admin email carried in the token subject.
    pub email: String,
}

impl AdminPrincipal {
    /// Authenticates the bearer token in `headers`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] without a bearer header, and
    /// the errors of [`super::AdminAuth::authenticate`] otherwise.
    pub fn from_headers(headers: &HeaderMap, state: &AppState) -> Result<Self, AuthError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
        let email = state.auth.authenticate(token)?;
        Ok(Self { email })
    }

    /// Authenticates only when the access policy gates `endpoint`.
    ///
    /// Returns `Ok(None)` for a public endpoint without inspecting headers.
    ///
    /// # Errors
    ///
    /// See [`AdminPrincipal::from_headers`].
    pub fn require_for(
        endpoint: GuardedEndpoint,
        headers: &HeaderMap,
        state: &AppState,
    ) -> Result<Option<Self>, AuthError> {
        if !state.access.requires_admin(endpoint) {
            return Ok(None);
        }
        Self::from_headers(headers, state).map(Some)
    }
}

impl FromRequestParts<AppState> for AdminPrincipal {
    type Rejection = LeadsError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers, state)?)
    }
}

/// Returns the token of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; an empty token counts as
/// missing.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
