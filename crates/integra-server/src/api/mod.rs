//! Application assembly: backends, router and server loop

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use integra_common::{Clock, SystemClock};
use serde_json::json;
use std::{future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};
use tokio::{signal, sync::Notify};
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::audit::{AuditContext, Enricher, MemoryAuditStore, PgAuditStore};
use crate::catalog::{MemoryCatalog, PgCatalog};
use crate::config::{AuditConfig, Config, StoreBackend};
use crate::directory::{MemoryDirectory, PgDirectory};
use crate::features::{self, FeatureState};
use crate::{db, middleware};

/// Wire the in-memory backends together
pub fn memory_state(
    clock: Arc<dyn Clock>,
    settings: AuditConfig,
    directory: MemoryDirectory,
    catalog: MemoryCatalog,
) -> FeatureState {
    let directory = Arc::new(directory);
    let store = Arc::new(MemoryAuditStore::new(clock.clone()));

    FeatureState {
        audit: AuditContext::new(
            store,
            Enricher::new(directory.clone(), directory),
            clock,
            settings,
        ),
        catalog: Arc::new(catalog),
    }
}

/// Build the backends selected by `config.audit.backend`
pub async fn build_state(config: &Config) -> anyhow::Result<FeatureState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match config.audit.backend {
        StoreBackend::Memory => {
            info!("Using in-memory audit store; entries are lost on shutdown");
            Ok(memory_state(
                clock,
                config.audit.clone(),
                MemoryDirectory::new(),
                MemoryCatalog::new(),
            ))
        },
        StoreBackend::Postgres => {
            let pool = db::create_pool(&config.database).await?;

            if config.database.run_migrations {
                db::run_migrations(&pool).await?;
            }

            let store = PgAuditStore::new(pool.clone(), clock.clone())
                .with_purge_chunk_size(config.audit.purge_chunk_size);
            let directory = Arc::new(PgDirectory::new(pool.clone()));

            Ok(FeatureState {
                audit: AuditContext::new(
                    Arc::new(store),
                    Enricher::new(directory.clone(), directory),
                    clock,
                    config.audit.clone(),
                ),
                catalog: Arc::new(PgCatalog::new(pool)),
            })
        },
    }
}

/// Create the application router with all routes and middleware
pub fn create_router(state: FeatureState, config: &Config) -> Router {
    let health = Router::new()
        .route("/health", get(health_check))
        .with_state(state.audit.clone());

    health
        .nest("/api", features::router(state))
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = build_state(&config).await?;
    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let timeout_secs = config.server.shutdown_timeout_secs;
    let shutdown = Arc::new(Notify::new());
    let trigger = shutdown.clone();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("Waiting up to {} seconds for connections to close", timeout_secs);
            trigger.notify_one();
        })
        .into_future();

    let drain_deadline = async {
        shutdown.notified().await;
        tokio::time::sleep(Duration::from_secs(timeout_secs)).await;
    };

    tokio::select! {
        result = server => {
            result?;
            info!("Server shut down gracefully");
        },
        _ = drain_deadline => {
            tracing::warn!(timeout_secs, "Shutdown timeout elapsed with open connections");
        },
    }

    Ok(())
}

/// Health check handler
async fn health_check(State(ctx): State<AuditContext>) -> Result<Response, StatusCode> {
    match ctx.store.ping().await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "store": "connected"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Audit store health check failed: {:?}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        },
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
