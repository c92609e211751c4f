//! travel-leads server entry point.
//!
//! Loads configuration, opens the inquiry store and serves the REST API
//! until Ctrl-C or SIGTERM.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use travel_leads::auth::AdminAuth;
use travel_leads::config::{AppConfig, LogFormat};
use travel_leads::server::{self, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, backend = ?config.storage_backend, "starting travel-leads");

    let storage = Storage::open(&config)
        .await
        .context("failed to open inquiry storage")?;
    let auth = AdminAuth::from_config(&config.auth);
    tracing::info!(admin_configured = auth.is_configured(), access = ?config.access, "admin access");
    let state = server::build_state(storage.repository(), auth, config.access);
    let app = server::build_app(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await
        .context("server error")?;

    storage.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
