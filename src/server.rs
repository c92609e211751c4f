//! Application assembly: storage bootstrap, state, router and middleware.
//!
//! [`build_app`] is shared by the binary and the integration tests so both
//! run the same middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::auth::{AccessPolicy, AdminAuth};
use crate::config::{AppConfig, StorageBackend};
use crate::error::LeadsError;
use crate::persistence::{
    InMemoryInquiryRepository, InquiryRepository, PostgresInquiryRepository,
};
use crate::service::InquiryService;

/// The storage backend selected at startup.
#[derive(Debug, Clone)]
pub enum Storage {
    /// Process-local map.
    Memory(Arc<InMemoryInquiryRepository>),
    /// PostgreSQL document table.
    Postgres(Arc<PostgresInquiryRepository>),
}

impl Storage {
    /// Opens the backend named in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`LeadsError::PersistenceError`] if the document store
    /// cannot be reached or bootstrapped.
    pub async fn open(config: &AppConfig) -> Result<Self, LeadsError> {
        match config.storage_backend {
            StorageBackend::Memory => {
                tracing::warn!("using in-memory storage; inquiries are lost on restart");
                Ok(Self::Memory(Arc::new(InMemoryInquiryRepository::new())))
            }
            StorageBackend::Postgres => {
                let repository = PostgresInquiryRepository::connect(&config.database).await?;
                tracing::info!("connected to document store");
                Ok(Self::Postgres(Arc::new(repository)))
            }
        }
    }

    /// The backend as a trait object.
    #[must_use]
    pub fn repository(&self) -> Arc<dyn InquiryRepository> {
        match self {
            Self::Memory(repo) => Arc::clone(repo) as Arc<dyn InquiryRepository>,
            Self::Postgres(repo) => Arc::clone(repo) as Arc<dyn InquiryRepository>,
        }
    }

    /// Releases backend connections.
    pub async fn close(&self) {
        if let Self::Postgres(repo) = self {
            repo.close().await;
        }
    }
}

/// Wires the service layer and admin auth into an [`AppState`].
#[must_use]
pub fn build_state(
    repository: Arc<dyn InquiryRepository>,
    auth: AdminAuth,
    access: AccessPolicy,
) -> AppState {
    AppState {
        inquiries: Arc::new(InquiryService::new(repository)),
        auth: Arc::new(auth),
        access,
    }
}

/// Builds the full application [`Router`] with all middleware layers.
///
/// Layers, innermost first: request timeout, request tracing, CORS.
pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    let router = api::build_router();

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
        )
    };

    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

/// Builds the CORS layer; `*` (or no origins) allows any origin.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_origin_is_permissive() {
        let _ = cors_layer(&["*".to_string()]);
        let _ = cors_layer(&[]);
    }

    #[test]
    fn invalid_origins_are_skipped() {
        let _ = cors_layer(&[
            "http://localhost:3000".to_string(),
            "bad\norigin".to_string(),
        ]);
    }

    #[tokio::test]
    async fn memory_storage_opens_without_network() {
        let Ok(config) = AppConfig::from_lookup(|key| {
            (key == "STORAGE_BACKEND").then(|| "memory".to_string())
        }) else {
            panic!("memory backend config must load");
        };
        let storage = Storage::open(&config).await;
        assert!(matches!(storage, Ok(Storage::Memory(_))));
    }
}
