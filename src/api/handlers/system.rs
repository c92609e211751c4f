//! System endpoints: API root message and health check.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::MessageResponse;
use crate::app_state::AppState;

/// Message returned by the API root.
pub const API_ROOT_MESSAGE: &str = "Little Luxe GETAWAYS API";

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /api/` — API liveness message.
#[utoipa::path(
    get,
    path = "/api/",
    tag = "System",
    summary = "API root",
    responses(
        (status = 200, description = "API is up", body = MessageResponse),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    Json(MessageResponse::new(API_ROOT_MESSAGE))
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes mounted at the root level.
///
/// The API root answers with and without a trailing slash.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api", get(root_handler))
        .route("/api/", get(root_handler))
}
