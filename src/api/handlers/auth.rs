//! Admin login endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use validator::Validate;

use crate::api::dto::{LoginRequest, TokenResponse};
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, LeadsError};

/// `POST /admin/login` — Exchange admin credentials for a bearer token.
///
/// # Errors
///
/// Returns [`LeadsError`] when the body is malformed, the credentials are
/// wrong, or admin auth is not configured.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Auth",
    summary = "Admin login",
    description = "Verifies the admin email and password and returns a signed bearer token.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Admin auth not configured", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, LeadsError> {
    req.validate()?;
    let issued = state.auth.login(&req.email, &req.password)?;
    Ok(Json(TokenResponse {
        access_token: issued.token,
        token_type: "bearer".to_string(),
        expires_in: issued.expires_in,
    }))
}

/// Auth routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/admin/login", post(login))
}
