//! Server startup: database pool, service wiring, listener.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{StatsService, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgStatsRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::reachability::{ReachabilityChecker, TcpProbe};

/// Connects to the database, runs migrations and serves the API until
/// the process receives a shutdown signal.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let pool = Arc::new(pool);
    let url_repository = Arc::new(PgUrlRepository::new(Arc::clone(&pool)));
    let stats_repository = Arc::new(PgStatsRepository::new(Arc::clone(&pool)));

    let reachability: Option<Arc<dyn ReachabilityChecker>> = if config.reachability_check {
        Some(Arc::new(TcpProbe::new(Duration::from_secs(
            config.reachability_timeout_secs,
        ))))
    } else {
        None
    };

    let url_service = Arc::new(UrlService::new(
        Arc::clone(&url_repository),
        config.code_length,
        reachability,
    ));
    let stats_service = Arc::new(StatsService::new(url_repository, stats_repository));

    let state = AppState {
        url_service,
        stats_service,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.listen_addr))?;
    tracing::info!("Listening on {}", config.listen_addr);

    // NormalizePath wraps the Router, so the service (not the router) is
    // converted into a make-service here.
    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
