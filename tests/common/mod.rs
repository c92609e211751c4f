//! Shared harness for the HTTP integration tests.
//!
//! Starts the real router (same middleware stack as the binary) on an
//! ephemeral port with the in-memory backend.

#![allow(dead_code, clippy::panic)]

use std::sync::{Arc, OnceLock};

use chrono::Duration;
use serde_json::{Value, json};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use travel_leads::auth::password::hash_password;
use travel_leads::auth::{AccessPolicy, AdminAuth, SingleAdminAuthorizer, TokenIssuer};
use travel_leads::config::AppConfig;
use travel_leads::persistence::InMemoryInquiryRepository;
use travel_leads::server;

/// Admin email accepted by [`configured_auth`].
pub const ADMIN_EMAIL: &str = "admin@littleluxe.example";
/// Admin password accepted by [`configured_auth`].
pub const ADMIN_PASSWORD: &str = "integration-test-password";
/// Token signing secret used by [`configured_auth`].
pub const SECRET: &str = "integration-test-secret";

/// Argon2 hash of [`ADMIN_PASSWORD`], computed once per test binary.
pub fn admin_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| match hash_password(ADMIN_PASSWORD) {
        Ok(hash) => hash,
        Err(e) => panic!("hashing failed: {e}"),
    })
}

/// Token issuer sharing the server's secret.
pub fn issuer(ttl: Duration) -> TokenIssuer {
    TokenIssuer::new(SECRET, ttl)
}

/// Fully configured admin auth.
pub fn configured_auth() -> AdminAuth {
    AdminAuth::new(
        ADMIN_EMAIL,
        admin_hash(),
        issuer(Duration::hours(8)),
        Arc::new(SingleAdminAuthorizer::new(ADMIN_EMAIL)),
    )
}

/// Minimal valid inquiry submission.
pub fn inquiry_body(first: &str, last: &str, email: &str, destinations: &str) -> Value {
    json!({
        "first_name": first,
        "last_name": last,
        "email": email,
        "destinations": destinations,
        "departure_airport": "LHR",
    })
}

/// A running server bound to `127.0.0.1` on a random port.
#[derive(Debug)]
pub struct TestServer {
    base_url: String,
    /// HTTP client for requests against this server.
    pub client: reqwest::Client,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Starts a server with configured admin auth and public detail,
    /// status and delete endpoints.
    pub async fn start() -> Self {
        Self::start_with(configured_auth(), AccessPolicy::default()).await
    }

    /// Starts a server with explicit auth and access policy.
    pub async fn start_with(auth: AdminAuth, access: AccessPolicy) -> Self {
        let Ok(config) = AppConfig::from_lookup(|key| match key {
            "STORAGE_BACKEND" => Some("memory".to_string()),
            "LISTEN_ADDR" => Some("127.0.0.1:0".to_string()),
            _ => None,
        }) else {
            panic!("test configuration must load");
        };

        let state = server::build_state(Arc::new(InMemoryInquiryRepository::new()), auth, access);
        let app = server::build_app(state, &config);

        let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
            Ok(listener) => listener,
            Err(e) => panic!("bind failed: {e}"),
        };
        let addr = match listener.local_addr() {
            Ok(addr) => addr,
            Err(e) => panic!("no local address: {e}"),
        };

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let served = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = served {
                eprintln!("test server failed: {e}");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Logs in as the admin and returns the bearer token.
    pub async fn admin_token(&self) -> String {
        let response = self
            .client
            .post(self.url("/api/admin/login"))
            .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
            .send()
            .await;
        let Ok(response) = response else {
            panic!("login request failed");
        };
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body = json_body(response).await;
        match body["access_token"].as_str() {
            Some(token) => token.to_string(),
            None => panic!("no access_token in {body}"),
        }
    }

    /// Creates an inquiry and returns the stored record.
    pub async fn create(&self, body: &Value) -> Value {
        let Ok(response) = self
            .client
            .post(self.url("/api/inquiries"))
            .json(body)
            .send()
            .await
        else {
            panic!("create request failed");
        };
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        json_body(response).await
    }

    /// Stops the server and waits for it to exit.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = tokio::time::timeout(std::time::Duration::from_secs(5), handle).await;
        }
    }
}

/// Decodes a JSON response body.
pub async fn json_body(response: reqwest::Response) -> Value {
    match response.json::<Value>().await {
        Ok(value) => value,
        Err(e) => panic!("response is not JSON: {e}"),
    }
}

/// Numeric `error.code` of an error response.
pub async fn error_code(response: reqwest::Response) -> u64 {
    let body = json_body(response).await;
    match body["error"]["code"].as_u64() {
        Some(code) => code,
        None => panic!("not an error body: {body}"),
    }
}
