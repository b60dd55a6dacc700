//! Health Cache - expiring in-memory caches for health tracking data
//!
//! Serves cached weather, global health, education and food lookups over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use health_cache::api::create_router;
use health_cache::{AppState, Config, DomainCaches, StaticDataSource};

/// Main entry point for the health cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the domain caches with their configured TTLs
/// 4. Start background TTL cleanup on every cache
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "health_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Health Cache Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: weather_ttl={}s, food_ttl={}s, education_ttl={}s, global_health_ttl={}s, port={}, cleanup_interval={}s",
        config.weather_ttl,
        config.food_ttl,
        config.education_ttl,
        config.global_health_ttl,
        config.server_port,
        config.cleanup_interval
    );

    let caches = DomainCaches::from_config(&config).context("Invalid cache configuration")?;
    info!("Domain caches initialized");

    caches
        .start_cleanup_all(config.cleanup_interval())
        .context("Failed to start cache cleanup")?;
    info!("Background cleanup tasks started");

    let state = AppState::new(caches.clone(), Arc::new(StaticDataSource));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(caches))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, stops the cleanup tasks and allows graceful shutdown.
async fn shutdown_signal(caches: DomainCaches) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    caches.stop_cleanup_all();
    warn!("Cleanup tasks stopped");
}
