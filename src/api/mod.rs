//! REST API layer: route handlers, DTOs, extractors and router composition.
//!
//! Resource endpoints are mounted under `/api`; the health check lives at
//! the root.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::auth::{AccessPolicy, AdminAuth};
    use crate::config::AppConfig;
    use crate::persistence::InMemoryInquiryRepository;
    use crate::server;

    fn app() -> Router {
        let Ok(config) = AppConfig::from_lookup(|_| None) else {
            panic!("default configuration must load");
        };
        let state = server::build_state(
            Arc::new(InMemoryInquiryRepository::new()),
            AdminAuth::unconfigured(),
            AccessPolicy::default(),
        );
        server::build_app(state, &config)
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let Ok(response) = app().oneshot(request).await else {
            panic!("router failed");
        };
        let status = response.status();
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn api_root_answers() {
        let Ok(request) = Request::get("/api/").body(Body::empty()) else {
            panic!("bad request");
        };
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Little Luxe GETAWAYS API");
    }

    #[tokio::test]
    async fn body_without_json_content_type_uses_error_envelope() {
        let Ok(request) = Request::post("/api/inquiries").body(Body::from("{}")) else {
            panic!("bad request");
        };
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1001);
    }

    #[tokio::test]
    async fn unconfigured_auth_is_reported_before_query_parsing() {
        let Ok(request) = Request::get("/api/inquiries?limit=abc")
            .header("authorization", "Bearer x")
            .body(Body::empty())
        else {
            panic!("bad request");
        };
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], 4005);
    }
}
