//! HTTP server initialization and runtime setup.
//!
//! Builds the record store, probe and service from [`Config`], then runs the
//! Axum server until a shutdown signal arrives.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::domain::probe::ReachabilityProbe;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::infrastructure::probe::{HttpProbe, NoopProbe};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::url_builder::UrlBuilder;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Record store (PostgreSQL pool + migrations, or in-memory)
/// - Reachability probe
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The base URL or listen address is invalid
/// - Server bind fails
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let probe: Arc<dyn ReachabilityProbe> = if config.probe_enabled {
        Arc::new(
            HttpProbe::new(config.probe_timeout()).context("Failed to build probe HTTP client")?,
        )
    } else {
        tracing::info!("Reachability probe disabled");
        Arc::new(NoopProbe)
    };

    let urls = UrlBuilder::new(&config.base_url).context("Invalid BASE_URL")?;
    let url_service = Arc::new(UrlService::new(repository, probe, urls));
    let state = AppState::new(url_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Creates the record store selected by `DATABASE_URL`.
async fn build_repository(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    if config.is_memory_storage() {
        tracing::warn!("Using in-memory storage; records are lost on restart");
        return Ok(Arc::new(MemoryUrlRepository::new()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    run_migrations(&pool).await?;

    Ok(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

/// Applies the SQL migrations embedded from `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Database migrations complete");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
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
                tracing::error!("Failed to listen for SIGTERM: {e}");
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
