//! HTTP server initialization and runtime setup.
//!
//! Wires the link store, identity provider and services together, then runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::{AuthService, LinkService};
use crate::config::Config;
use crate::domain::repositories::{IdentityProvider, LinkStore};
use crate::infrastructure::identity::HeaderIdentityProvider;
use crate::infrastructure::persistence::{MemoryLinkStore, PgLinkStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::http::HeaderName;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store: PostgreSQL (with migrations) when a database is configured,
///   otherwise an in-memory store
/// - Header identity provider
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let identity_header = HeaderName::try_from(config.identity_header.as_str())
        .context("Invalid IDENTITY_HEADER")?;
    let provider: Arc<dyn IdentityProvider> = Arc::new(HeaderIdentityProvider::new(
        identity_header,
        config.login_url.clone(),
        config.login_return_param.clone(),
    ));

    let state = AppState::new(
        Arc::new(LinkService::new(store)),
        Arc::new(AuthService::new(provider, config.auth_domain.clone())),
        config.index_file.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Builds the configured link store.
async fn connect_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("No database configured; links are kept in memory only");
        return Ok(Arc::new(MemoryLinkStore::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(Arc::new(PgLinkStore::new(Arc::new(pool))))
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
